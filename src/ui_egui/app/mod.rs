mod form;
mod list;

use std::path::PathBuf;

use chrono::Local;

use self::form::EventForm;
use crate::services::countdown::{
    load_snapshot, save_snapshot, CountdownService, TickScheduler,
};
use crate::services::notification::NotificationService;

/// The countdown widget's single window: an add-event form above the live
/// event list. Immediate mode re-renders the whole list from the store each
/// frame, so the rendered rows always mirror the store contents.
pub struct CountdownApp {
    service: CountdownService,
    scheduler: TickScheduler,
    notifier: NotificationService,
    storage_path: PathBuf,
    form: EventForm,
}

impl CountdownApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, storage_path: PathBuf) -> Self {
        let service = match load_snapshot(&storage_path) {
            Ok(snapshot) => CountdownService::from_snapshot(snapshot),
            Err(err) => {
                // Corrupt snapshots are rejected whole; start empty rather
                // than render garbage.
                log::warn!("starting with an empty event list: {:#}", err);
                CountdownService::new()
            }
        };
        log::info!(
            "loaded {} persisted event(s) from {}",
            service.events().len(),
            storage_path.display()
        );

        let mut scheduler = TickScheduler::new();
        scheduler.sync_with_store(service.events().len());

        Self {
            service,
            scheduler,
            notifier: NotificationService::new(),
            storage_path,
            form: EventForm::default(),
        }
    }

    /// Deliver at most one notification per reached event, then mark it so
    /// it never fires again. A failed delivery still consumes the attempt.
    fn dispatch_due_notifications(&mut self) {
        let now = Local::now();
        for (id, name) in self.service.due_notifications(now) {
            match self.notifier.notify_event_reached(&name) {
                Ok(()) => log::info!("notified {:?} ({})", id, name),
                Err(err) => log::warn!("failed to show notification for {:?}: {}", id, err),
            }
            self.service.mark_notified(id);
        }
    }

    /// Flush the store to disk after a mutation. One attempt, no retry; a
    /// failed save leaves in-memory state ahead of the file.
    fn save_if_dirty(&mut self) {
        if !self.service.is_dirty() {
            return;
        }
        if let Err(err) = save_snapshot(&self.storage_path, &self.service.snapshot()) {
            log::warn!(
                "failed to persist events to {}: {:#}",
                self.storage_path.display(),
                err
            );
        }
        self.service.mark_clean();
    }
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.dispatch_due_notifications();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_form(ui);
            ui.separator();
            self.render_event_list(ui);
        });

        self.scheduler.sync_with_store(self.service.events().len());
        if let Some(delay) = self.scheduler.next_tick_delay() {
            ctx.request_repaint_after(delay);
        }

        self.save_if_dirty();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.save_if_dirty();
    }
}
