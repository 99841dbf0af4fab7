//! Startup data: the built-in sample courses, TOML seed files, and wiring
//! courses into a ready coordinator.

use std::{fs, path::Path};

use serde::Deserialize;
use shared::{Course, RosterError, Student};

use crate::{
    accessor::CourseAccessor,
    coordinator::{Coordinator, CoordinatorCell},
    view::RosterView,
};

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    courses: Vec<Course>,
}

pub fn sample_courses() -> Vec<Course> {
    vec![
        Course::with_students(
            "Programming Patterns",
            vec![
                Student::new("Mubeen", 50.0),
                Student::new("Rachelle", 70.0),
                Student::new("Mert", 20.0),
            ],
        ),
        Course::with_students(
            "E-Commerce",
            vec![
                Student::new("Smaie", 80.0),
                Student::new("James", 70.0),
                Student::new("Sonia", 60.0),
            ],
        ),
    ]
}

/// One accessor per course, in the same order.
pub fn accessors_for(courses: impl IntoIterator<Item = Course>) -> Vec<CourseAccessor> {
    courses.into_iter().map(CourseAccessor::new).collect()
}

pub fn parse_seed(raw: &str) -> Result<Vec<Course>, toml::de::Error> {
    toml::from_str::<SeedFile>(raw).map(|seed| seed.courses)
}

pub fn load_seed_file(path: &Path) -> Result<Vec<Course>, RosterError> {
    let courses = fs::read_to_string(path)
        .map_err(|err| RosterError::seed_file(path, err))
        .and_then(|raw| parse_seed(&raw).map_err(|err| RosterError::seed_file(path, err)))
        .inspect_err(|err| tracing::warn!(error = %err, "unreadable seed file"))?;
    tracing::info!(path = %path.display(), courses = courses.len(), "loaded seed file");
    Ok(courses)
}

/// Courses from `seed_file` when given, the built-in samples otherwise.
pub fn load_courses(seed_file: Option<&Path>) -> Result<Vec<Course>, RosterError> {
    match seed_file {
        Some(path) => load_seed_file(path),
        None => Ok(sample_courses()),
    }
}

/// Wraps `courses`, initializes `cell` with them and shows the view.
pub fn bootstrap<V: RosterView>(
    cell: &mut CoordinatorCell<V>,
    courses: Vec<Course>,
    view: V,
) -> &mut Coordinator<V> {
    let coordinator = cell.get_or_init(accessors_for(courses), view);
    coordinator.show_view();
    coordinator
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;
    use crate::{log_capture::capture_logs, view::BufferedView};

    #[test]
    fn sample_data_has_two_courses_of_three_students() {
        let courses = sample_courses();
        let names: Vec<&str> = courses.iter().map(Course::name).collect();
        assert_eq!(names, ["Programming Patterns", "E-Commerce"]);
        assert!(courses.iter().all(|course| course.students().len() == 3));
        assert_eq!(courses[0].students()[2], Student::new("Mert", 20.0));
    }

    #[test]
    fn accessors_preserve_course_order() {
        let accessors = accessors_for(sample_courses());
        assert_eq!(accessors[0].course_name(), "Programming Patterns");
        assert_eq!(accessors[1].course_name(), "E-Commerce");
    }

    #[test]
    fn parses_seed_toml() {
        let courses = parse_seed(
            r#"
            [[courses]]
            name = "Compilers"

            [[courses.students]]
            name = "Ada"
            grade = 91.5

            [[courses]]
            name = "Empty"
            "#,
        )
        .expect("seed");

        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].students(), [Student::new("Ada", 91.5)]);
        assert!(courses[1].students().is_empty());
    }

    #[test]
    fn rejects_student_without_grade() {
        let err = parse_seed("[[courses]]\nname = \"X\"\n[[courses.students]]\nname = \"Y\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn missing_seed_file_is_reported_with_path() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("roster_missing_seed_{suffix}.toml"));

        let (result, logs) = capture_logs(|| load_seed_file(&path));
        match result {
            Err(RosterError::SeedFile { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected seed file error, got {other:?}"),
        }
        assert!(logs.contains("WARN"), "logs: {logs}");
        assert!(logs.contains("unreadable seed file"), "logs: {logs}");
    }

    #[test]
    fn loads_seed_file_from_disk() {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("roster_seed_{suffix}.toml"));
        fs::write(&path, "[[courses]]\nname = \"Disk\"\n").expect("write seed");

        let courses = load_courses(Some(&path)).expect("load");
        assert_eq!(courses[0].name(), "Disk");

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn bootstrap_initializes_and_shows_view() {
        let mut cell = CoordinatorCell::new();
        let coordinator = bootstrap(&mut cell, sample_courses(), BufferedView::new());

        assert!(coordinator.view().is_visible());
        assert_eq!(coordinator.accessors().len(), 2);
    }
}
