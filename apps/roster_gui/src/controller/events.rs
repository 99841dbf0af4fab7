//! Events raised by the roster window.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// "Show students" pressed, or Enter in the course field.
    ShowStudents,
    ClearResults,
}

/// What happened after an event was dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Rendered {
        course: String,
        students: usize,
    },
    NoMatch {
        query: String,
    },
    Cleared,
}

impl EventOutcome {
    pub fn status_line(&self) -> String {
        match self {
            Self::Rendered {
                course, students, ..
            } => match *students {
                0 => format!("{course}: no students enrolled"),
                1 => format!("{course}: 1 student"),
                n => format!("{course}: {n} students"),
            },
            Self::NoMatch { query } if query.trim().is_empty() => {
                "Type a course name first".to_string()
            }
            Self::NoMatch { query } => format!("No course named '{query}'"),
            Self::Cleared => String::new(),
        }
    }
}
