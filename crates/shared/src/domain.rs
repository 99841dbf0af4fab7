use serde::{Deserialize, Serialize};

/// Position of a course accessor inside the coordinator's accessor sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccessorIndex(pub usize);

/// One enrolled student. Grades are not range checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    name: String,
    grade: f64,
}

impl Student {
    pub fn new(name: impl Into<String>, grade: f64) -> Self {
        Self {
            name: name.into(),
            grade,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn grade(&self) -> f64 {
        self.grade
    }

    pub fn set_grade(&mut self, grade: f64) {
        self.grade = grade;
    }
}

/// A named course that exclusively owns its ordered student sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    name: String,
    #[serde(default)]
    students: Vec<Student>,
}

impl Course {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            students: Vec::new(),
        }
    }

    pub fn with_students(name: impl Into<String>, students: Vec<Student>) -> Self {
        Self {
            name: name.into(),
            students,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Live student sequence. Edits made through this borrow are what every
    /// later read of the course observes.
    pub fn students_mut(&mut self) -> &mut Vec<Student> {
        &mut self.students
    }

    /// Replaces the whole sequence, returning the discarded one.
    pub fn set_students(&mut self, students: Vec<Student>) -> Vec<Student> {
        std::mem::replace(&mut self.students, students)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_accepts_out_of_range_grades() {
        let mut student = Student::new("Mert", 20.0);
        student.set_grade(-15.5);
        assert_eq!(student.grade(), -15.5);
        student.set_grade(1_000.0);
        assert_eq!(student.grade(), 1_000.0);
    }

    #[test]
    fn set_students_discards_previous_sequence() {
        let mut course = Course::with_students("E-Commerce", vec![Student::new("Smaie", 80.0)]);
        let old = course.set_students(vec![Student::new("James", 70.0), Student::new("Sonia", 60.0)]);

        assert_eq!(old, vec![Student::new("Smaie", 80.0)]);
        let names: Vec<&str> = course.students().iter().map(Student::name).collect();
        assert_eq!(names, ["James", "Sonia"]);
    }

    #[test]
    fn live_student_sequence_mutations_are_visible() {
        let mut course = Course::new("Programming Patterns");
        course.students_mut().push(Student::new("Rachelle", 70.0));
        course.students_mut()[0].set_name("Mubeen");

        assert_eq!(course.students(), [Student::new("Mubeen", 70.0)]);
    }

    #[test]
    fn course_deserializes_without_students() {
        let course: Course = toml::from_str("name = \"Empty\"").expect("course toml");
        assert_eq!(course.name(), "Empty");
        assert!(course.students().is_empty());
    }
}
