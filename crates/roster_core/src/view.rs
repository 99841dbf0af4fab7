//! The capabilities the coordinator needs from whatever displays the roster.

use shared::AccessorIndex;

/// Input and output surface driven by [`crate::Coordinator`].
pub trait RosterView {
    /// Course name currently typed by the user.
    fn query_text(&self) -> String;

    /// Appends one already-terminated line to the result surface.
    fn append_result_line(&mut self, text: &str);

    fn show(&mut self);

    /// Records which course is active for display, `None` when the last query
    /// matched nothing.
    fn set_selection(&mut self, selection: Option<AccessorIndex>);
}

impl<V: RosterView + ?Sized> RosterView for &mut V {
    fn query_text(&self) -> String {
        (**self).query_text()
    }

    fn append_result_line(&mut self, text: &str) {
        (**self).append_result_line(text);
    }

    fn show(&mut self) {
        (**self).show();
    }

    fn set_selection(&mut self, selection: Option<AccessorIndex>) {
        (**self).set_selection(selection);
    }
}

/// Headless view that records everything pushed into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferedView {
    query: String,
    lines: Vec<String>,
    visible: bool,
    selection: Option<AccessorIndex>,
}

impl BufferedView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    /// All appended lines concatenated, as a text area would show them.
    pub fn transcript(&self) -> String {
        self.lines.concat()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn selection(&self) -> Option<AccessorIndex> {
        self.selection
    }
}

impl RosterView for BufferedView {
    fn query_text(&self) -> String {
        self.query.clone()
    }

    fn append_result_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn set_selection(&mut self, selection: Option<AccessorIndex>) {
        self.selection = selection;
    }
}
