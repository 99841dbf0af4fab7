//! Routes window events to the coordinator.

use roster_core::{Coordinator, RosterView};

use crate::controller::events::{EventOutcome, UiEvent};
use crate::ui::form::FormView;

pub fn dispatch_ui_event(coordinator: &mut Coordinator<FormView>, event: UiEvent) -> EventOutcome {
    tracing::debug!(?event, "dispatching ui event");
    match event {
        UiEvent::ShowStudents => show_students(coordinator),
        UiEvent::ClearResults => {
            coordinator.view_mut().clear_results();
            EventOutcome::Cleared
        }
    }
}

fn show_students(coordinator: &mut Coordinator<FormView>) -> EventOutcome {
    let selection = coordinator.resolve_selection();
    let students = coordinator.render_roster(selection);

    match selection.and_then(|index| coordinator.accessor(index)) {
        Some(accessor) => EventOutcome::Rendered {
            course: accessor.course_name().to_string(),
            students,
        },
        None => EventOutcome::NoMatch {
            query: coordinator.view().query_text(),
        },
    }
}
