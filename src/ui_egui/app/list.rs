use chrono::Local;

use super::CountdownApp;
use crate::services::countdown::{format_target_date, EventId};

/// Style applied to the completed marker.
const REACHED_COLOR: egui::Color32 = egui::Color32::from_rgb(150, 199, 140);

impl CountdownApp {
    pub(super) fn render_event_list(&mut self, ui: &mut egui::Ui) {
        if self.service.events().is_empty() {
            ui.weak("No events yet. Add one above.");
            return;
        }

        let now = Local::now();
        let statuses = self.service.tick(now);
        let mut to_remove: Option<EventId> = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            for (event, (_, status)) in self.service.events().iter().zip(statuses.iter()) {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.strong(event.name.as_str());
                        ui.weak(format_target_date(event.target_at));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Delete").clicked() {
                            to_remove = Some(event.id);
                        }
                        if status.reached {
                            ui.colored_label(REACHED_COLOR, status.text.as_str());
                        } else {
                            ui.label(format!("Remaining: {}", status.text));
                        }
                    });
                });
                ui.separator();
            }
        });

        if let Some(id) = to_remove {
            self.service.remove_event(id);
        }
    }
}
