use roster_core::{
    bootstrap::{accessors_for, bootstrap, sample_courses},
    AccessorIndex, BufferedView, CellState, Coordinator, CoordinatorCell, RosterError, RosterView,
};

#[test]
fn mixed_case_query_renders_ecommerce_roster() {
    let mut cell = CoordinatorCell::new();
    let coordinator = bootstrap(&mut cell, sample_courses(), BufferedView::with_query("e-COMMERCE"));

    let selection = coordinator.resolve_selection();
    assert_eq!(selection, Some(AccessorIndex(1)));
    assert_eq!(coordinator.render_roster(selection), 3);
    assert_eq!(
        coordinator.view().transcript(),
        "Smaie  -  80.0\nJames  -  70.0\nSonia  -  60.0\n"
    );
}

#[test]
fn unknown_course_renders_nothing() {
    let mut coordinator = Coordinator::new(
        accessors_for(sample_courses()),
        BufferedView::with_query("Nonexistent Course"),
    );

    let selection = coordinator.resolve_selection();
    assert_eq!(selection, None);
    assert_eq!(coordinator.render_roster(selection), 0);
    assert!(coordinator.view().lines().is_empty());
}

#[test]
fn edits_through_accessor_show_up_in_next_render() {
    let mut coordinator = Coordinator::new(
        accessors_for(sample_courses()),
        BufferedView::with_query("programming patterns"),
    );
    let selection = coordinator.resolve_selection();
    let index = selection.expect("sample course");

    let accessor = coordinator.accessor_mut(index).expect("accessor");
    accessor.set_student_grade(95.5, 2).expect("regrade Mert");
    assert_eq!(
        accessor.set_student_name("Nobody", 3),
        Err(RosterError::IndexOutOfRange { index: 3, len: 3 })
    );

    coordinator.render_selection();
    assert_eq!(
        coordinator.view().lines().last().map(String::as_str),
        Some("Mert  -  95.5\n")
    );
}

#[test]
fn second_bootstrap_keeps_first_roster() {
    let mut cell = CoordinatorCell::new();
    bootstrap(&mut cell, sample_courses(), BufferedView::new());
    let coordinator = bootstrap(&mut cell, Vec::new(), BufferedView::with_query("ignored"));

    assert_eq!(coordinator.accessors().len(), 2);
    assert_eq!(coordinator.view().query_text(), "");
    assert_eq!(cell.state(), CellState::Ready);
}
