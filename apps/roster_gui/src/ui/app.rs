use eframe::egui;
use roster_core::{AccessorIndex, Coordinator, CoordinatorCell};

use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_ui_event;
use crate::ui::form::FormView;

pub struct RosterApp {
    cell: CoordinatorCell<FormView>,
    status: String,
}

impl RosterApp {
    /// Takes a cell that bootstrap has already initialized.
    pub fn new(cell: CoordinatorCell<FormView>) -> Self {
        Self {
            cell,
            status: String::new(),
        }
    }

    fn draw_form(
        ui: &mut egui::Ui,
        coordinator: &mut Coordinator<FormView>,
        status: &str,
        events: &mut Vec<UiEvent>,
    ) {
        let names: Vec<String> = coordinator
            .accessors()
            .iter()
            .map(|accessor| accessor.course_name().to_string())
            .collect();
        let form = coordinator.view_mut();

        ui.heading("Course roster");
        ui.horizontal_wrapped(|ui| {
            ui.label("Courses:");
            for (index, name) in names.iter().enumerate() {
                if form.selection() == Some(AccessorIndex(index)) {
                    ui.label(egui::RichText::new(name).strong());
                } else {
                    ui.label(name);
                }
            }
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("Course name:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut form.input_text)
                    .hint_text("e.g. E-Commerce")
                    .desired_width(240.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                events.push(UiEvent::ShowStudents);
            }
            if ui.button("Show students").clicked() {
                events.push(UiEvent::ShowStudents);
            }
            if ui.button("Clear").clicked() {
                events.push(UiEvent::ClearResults);
            }
        });

        if !status.is_empty() {
            ui.label(egui::RichText::new(status).weak());
        }
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            let mut results = form.result_text.as_str();
            ui.add(
                egui::TextEdit::multiline(&mut results)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .desired_rows(12),
            );
        });
    }
}

impl eframe::App for RosterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let Some(coordinator) = self.cell.get_mut() else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.label("Roster not initialized");
            });
            return;
        };

        let mut events = Vec::new();
        let status = self.status.as_str();
        egui::CentralPanel::default().show(ctx, |ui| {
            Self::draw_form(ui, coordinator, status, &mut events);
        });

        for event in events {
            self.status = dispatch_ui_event(coordinator, event).status_line();
        }
    }
}
