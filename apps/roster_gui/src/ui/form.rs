use roster_core::{AccessorIndex, RosterView};

/// State behind the roster window: the course field, the result area and the
/// course currently shown.
#[derive(Debug, Clone, Default)]
pub struct FormView {
    pub input_text: String,
    pub result_text: String,
    visible: bool,
    selection: Option<AccessorIndex>,
}

impl FormView {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn selection(&self) -> Option<AccessorIndex> {
        self.selection
    }

    pub fn clear_results(&mut self) {
        self.result_text.clear();
    }
}

impl RosterView for FormView {
    fn query_text(&self) -> String {
        self.input_text.clone()
    }

    fn append_result_line(&mut self, text: &str) {
        self.result_text.push_str(text);
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn set_selection(&mut self, selection: Option<AccessorIndex>) {
        self.selection = selection;
    }
}
