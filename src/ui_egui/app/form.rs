use chrono::{Local, NaiveDate};
use egui_extras::DatePickerButton;

use super::CountdownApp;
use crate::utils::date::{combine_date_time, parse_time_hhmm};

/// Input state for the add-event row. The date picker always carries a
/// value, so validation focuses on the free-form time field.
pub(super) struct EventForm {
    pub name: String,
    pub date: NaiveDate,
    pub time: String,
    pub error: Option<String>,
}

impl Default for EventForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            date: Local::now().date_naive(),
            time: String::new(),
            error: None,
        }
    }
}

impl CountdownApp {
    pub(super) fn render_form(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.form.name)
                    .desired_width(160.0)
                    .hint_text("Event name"),
            );
            ui.add(DatePickerButton::new(&mut self.form.date));
            ui.add(
                egui::TextEdit::singleline(&mut self.form.time)
                    .desired_width(60.0)
                    .hint_text("HH:MM"),
            );
            if ui.button("Add").clicked() {
                self.submit_form();
            }
        });

        let mut enabled = self.service.notifications_enabled();
        if ui.checkbox(&mut enabled, "Desktop notifications").changed() {
            self.service.set_notifications_enabled(enabled);
        }

        if let Some(error) = &self.form.error {
            ui.colored_label(egui::Color32::from_rgb(200, 60, 60), error);
        }
    }

    /// Validate and add. Rejections leave the inputs untouched and create
    /// nothing; a successful add resets the whole form. Past targets are
    /// accepted and simply read as completed on the next tick.
    fn submit_form(&mut self) {
        if self.form.time.trim().is_empty() {
            self.form.error = Some("Select both a date and a time".to_string());
            return;
        }
        let Some(time) = parse_time_hhmm(&self.form.time) else {
            self.form.error = Some("Time must look like HH:MM".to_string());
            return;
        };
        let Some(target_at) = combine_date_time(self.form.date, time) else {
            self.form.error = Some("That time does not exist on the chosen day".to_string());
            return;
        };

        self.service.add_event(&self.form.name, target_at);
        self.form = EventForm::default();
    }
}
