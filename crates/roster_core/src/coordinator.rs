//! Query resolution and roster rendering over the full set of course accessors.

use shared::{AccessorIndex, Student};

use crate::{accessor::CourseAccessor, view::RosterView};

/// Owns every [`CourseAccessor`] plus the view it drives.
///
/// Construct one explicitly and pass it to whatever runs the UI loop. The
/// selection made by the last [`Coordinator::resolve_selection`] is kept so
/// the render step can pick it up.
#[derive(Debug)]
pub struct Coordinator<V> {
    accessors: Vec<CourseAccessor>,
    view: V,
    selection: Option<AccessorIndex>,
}

impl<V: RosterView> Coordinator<V> {
    pub fn new(accessors: Vec<CourseAccessor>, view: V) -> Self {
        Self {
            accessors,
            view,
            selection: None,
        }
    }

    pub fn accessors(&self) -> &[CourseAccessor] {
        &self.accessors
    }

    /// Replaces the accessor sequence. Any pending selection pointed into the
    /// old sequence and is cleared.
    pub fn set_accessors(&mut self, accessors: Vec<CourseAccessor>) -> Vec<CourseAccessor> {
        self.selection = None;
        std::mem::replace(&mut self.accessors, accessors)
    }

    pub fn accessor(&self, index: AccessorIndex) -> Option<&CourseAccessor> {
        self.accessors.get(index.0)
    }

    pub fn accessor_mut(&mut self, index: AccessorIndex) -> Option<&mut CourseAccessor> {
        self.accessors.get_mut(index.0)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn selection(&self) -> Option<AccessorIndex> {
        self.selection
    }

    pub fn show_view(&mut self) {
        self.view.show();
    }

    /// Looks `query` up by course name, ignoring case.
    ///
    /// Every accessor is scanned. When several courses share a name the one
    /// with the highest index wins; earlier matches are not reported.
    pub fn find_course(&self, query: &str) -> Option<AccessorIndex> {
        self.accessors
            .iter()
            .rposition(|accessor| names_match(accessor.course_name(), query))
            .map(AccessorIndex)
    }

    /// Reads the view's query, resolves it and hands the result back to the view.
    pub fn resolve_selection(&mut self) -> Option<AccessorIndex> {
        let query = self.view.query_text();
        let selection = self.find_course(&query);
        match selection {
            Some(index) => tracing::debug!(
                query = %query,
                index = index.0,
                course = self.accessors[index.0].course_name(),
                "resolved course query"
            ),
            None => tracing::debug!(query = %query, "course query matched nothing"),
        }

        self.selection = selection;
        self.view.set_selection(selection);
        selection
    }

    /// Appends one line per student of the selected course, in roster order,
    /// and returns how many were written. `None` writes nothing.
    pub fn render_roster(&mut self, selection: Option<AccessorIndex>) -> usize {
        let Some(index) = selection else {
            return 0;
        };
        let Some(accessor) = self.accessors.get(index.0) else {
            tracing::debug!(index = index.0, "selection no longer refers to a course");
            return 0;
        };

        for student in accessor.course_students() {
            self.view.append_result_line(&roster_line(student));
        }
        let rendered = accessor.course_students().len();
        tracing::debug!(course = accessor.course_name(), rendered, "rendered roster");
        rendered
    }

    /// Renders whatever the last resolution selected.
    pub fn render_selection(&mut self) -> usize {
        self.render_roster(self.selection)
    }
}

/// Char-by-char comparison with single-char case mappings: two chars match
/// when equal, when their uppercase forms are equal, or when the lowercase
/// forms of those uppercase forms are equal. Lengths must agree.
fn names_match(course_name: &str, query: &str) -> bool {
    course_name.chars().count() == query.chars().count()
        && course_name
            .chars()
            .zip(query.chars())
            .all(|(a, b)| chars_match_ignoring_case(a, b))
}

fn chars_match_ignoring_case(a: char, b: char) -> bool {
    if a == b {
        return true;
    }
    let (upper_a, upper_b) = (simple_upper(a), simple_upper(b));
    upper_a == upper_b || simple_lower(upper_a) == simple_lower(upper_b)
}

/// Chars whose uppercase expands (`ß` to `SS`) have no single-char form and
/// map to themselves.
fn simple_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Only `İ` lowercases to more than one char; its leading `i` is the
/// single-char form.
fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// `"<name>  -  <grade>\n"`
pub fn roster_line(student: &Student) -> String {
    format!("{}  -  {}\n", student.name(), format_grade(student.grade()))
}

/// Renders a grade the way a plain decimal double prints: always at least one
/// fractional digit, scientific notation outside `[1e-3, 1e7)`.
pub fn format_grade(grade: f64) -> String {
    if grade.is_nan() {
        return "NaN".to_string();
    }
    if grade.is_infinite() {
        return if grade > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = grade.abs();
    if magnitude != 0.0 && !(1e-3..1e7).contains(&magnitude) {
        let formatted = format!("{grade:e}");
        let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
        return if mantissa.contains('.') {
            format!("{mantissa}E{exponent}")
        } else {
            format!("{mantissa}.0E{exponent}")
        };
    }

    let formatted = grade.to_string();
    if formatted.contains('.') {
        formatted
    } else {
        format!("{formatted}.0")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Uninitialized,
    Ready,
}

/// Holds at most one [`Coordinator`]. The first initialization wins.
#[derive(Debug)]
pub struct CoordinatorCell<V> {
    slot: Option<Coordinator<V>>,
}

impl<V> Default for CoordinatorCell<V> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<V: RosterView> CoordinatorCell<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CellState {
        if self.slot.is_some() {
            CellState::Ready
        } else {
            CellState::Uninitialized
        }
    }

    /// Builds the coordinator on first use. Later calls log a warning, drop
    /// their arguments and return the existing coordinator unchanged.
    pub fn get_or_init(&mut self, accessors: Vec<CourseAccessor>, view: V) -> &mut Coordinator<V> {
        if self.slot.is_some() {
            tracing::warn!(
                ignored_accessors = accessors.len(),
                "coordinator already initialized; ignoring re-initialization"
            );
        }
        self.slot
            .get_or_insert_with(|| Coordinator::new(accessors, view))
    }

    pub fn get(&self) -> Option<&Coordinator<V>> {
        self.slot.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut Coordinator<V>> {
        self.slot.as_mut()
    }
}

#[cfg(test)]
#[path = "tests/coordinator_tests.rs"]
mod tests;
