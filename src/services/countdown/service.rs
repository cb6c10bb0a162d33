use chrono::{DateTime, Local};

use super::compute::{compute, CountdownStatus};
use super::models::{CountdownEvent, EventId, NotificationConfig, PersistedState};

/// Owns the live event collection while the app is running.
///
/// Events stay sorted ascending by target time; removals preserve order so
/// no re-sort is needed. Every mutation raises the dirty flag and the call
/// site follows up with a save.
pub struct CountdownService {
    events: Vec<CountdownEvent>,
    next_id: u64,
    dirty: bool,
    notification_config: NotificationConfig,
}

impl Default for CountdownService {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownService {
    pub fn new() -> Self {
        Self::from_snapshot(PersistedState::default())
    }

    /// Restore persisted events into live state. The stored order is not
    /// trusted: events re-sort ascending, and `next_id` is clamped above
    /// every restored id so a hand-edited snapshot can never hand out a
    /// duplicate.
    pub fn from_snapshot(snapshot: PersistedState) -> Self {
        let mut events = snapshot.events;
        events.sort_by_key(|event| event.target_at);
        let max_seen = events.iter().map(|event| event.id.0).max().unwrap_or(0);

        Self {
            events,
            next_id: snapshot.next_id.max(max_seen + 1).max(1),
            dirty: false,
            notification_config: snapshot.notification_config,
        }
    }

    /// Snapshot of the current state for JSON serialization.
    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            next_id: self.next_id,
            events: self.events.clone(),
            notification_config: self.notification_config,
        }
    }

    pub fn events(&self) -> &[CountdownEvent] {
        &self.events
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn notifications_enabled(&self) -> bool {
        self.notification_config.enabled
    }

    pub fn set_notifications_enabled(&mut self, enabled: bool) {
        if self.notification_config.enabled != enabled {
            self.notification_config.enabled = enabled;
            self.dirty = true;
        }
    }

    /// Add an event and keep the collection sorted by target time.
    /// The name is trimmed; an empty submission stores the placeholder.
    pub fn add_event(&mut self, name: &str, target_at: DateTime<Local>) -> EventId {
        let id = EventId(self.next_id);
        self.next_id += 1;

        let event = CountdownEvent {
            id,
            name: CountdownEvent::display_name(name),
            target_at,
            notified: false,
        };
        log::info!(
            "add_event: {:?} \"{}\" targeting {}",
            id,
            event.name,
            event.target_at
        );
        self.events.push(event);
        self.events.sort_by_key(|event| event.target_at);
        self.dirty = true;
        id
    }

    /// Remove the event with the given id. No-op returning false if absent.
    pub fn remove_event(&mut self, id: EventId) -> bool {
        if let Some(idx) = self.events.iter().position(|event| event.id == id) {
            let event = self.events.remove(idx);
            log::info!("remove_event: removed {:?} ({})", id, event.name);
            self.dirty = true;
            return true;
        }
        log::warn!("remove_event: {:?} not found", id);
        false
    }

    /// Flip the one-shot notified flag. Returns false if the event is
    /// missing or already notified.
    pub fn mark_notified(&mut self, id: EventId) -> bool {
        if let Some(event) = self.events.iter_mut().find(|event| event.id == id) {
            if !event.notified {
                event.notified = true;
                self.dirty = true;
                return true;
            }
        }
        false
    }

    /// Recompute every event's countdown in store order.
    pub fn tick(&self, now: DateTime<Local>) -> Vec<(EventId, CountdownStatus)> {
        self.events
            .iter()
            .map(|event| (event.id, compute(now, event.target_at)))
            .collect()
    }

    /// Events whose target has been reached but which have not yet
    /// notified. The enabled flag is consulted lazily, here at fire time;
    /// callers follow up with `mark_notified` after the single delivery
    /// attempt.
    pub fn due_notifications(&self, now: DateTime<Local>) -> Vec<(EventId, String)> {
        if !self.notification_config.enabled {
            return Vec::new();
        }

        self.events
            .iter()
            .filter(|event| !event.notified && event.target_at <= now)
            .map(|event| (event.id, event.name.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::countdown::models::DEFAULT_EVENT_NAME;
    use chrono::Duration;

    fn is_sorted(service: &CountdownService) -> bool {
        service
            .events()
            .windows(2)
            .all(|pair| pair[0].target_at <= pair[1].target_at)
    }

    #[test]
    fn add_grows_store_by_one_and_keeps_order() {
        let mut service = CountdownService::new();
        let base = Local::now();

        service.add_event("Later", base + Duration::days(10));
        assert_eq!(service.events().len(), 1);

        service.add_event("Sooner", base + Duration::days(2));
        assert_eq!(service.events().len(), 2);
        assert!(is_sorted(&service));
        assert_eq!(service.events()[0].name, "Sooner");
    }

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut service = CountdownService::new();
        let base = Local::now();
        let a = service.add_event("A", base + Duration::days(1));
        let b = service.add_event("B", base + Duration::days(1));
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn empty_name_stores_placeholder() {
        let mut service = CountdownService::new();
        service.add_event("   ", Local::now() + Duration::hours(1));
        assert_eq!(service.events()[0].name, DEFAULT_EVENT_NAME);
    }

    #[test]
    fn remove_missing_event_is_a_noop() {
        let mut service = CountdownService::new();
        let id = service.add_event("A", Local::now() + Duration::hours(1));
        service.mark_clean();

        assert!(!service.remove_event(EventId(id.0 + 99)));
        assert_eq!(service.events().len(), 1);
        assert!(!service.is_dirty());

        assert!(service.remove_event(id));
        assert!(service.events().is_empty());
        assert!(service.is_dirty());
    }

    #[test]
    fn notifications_fire_at_most_once() {
        let mut service = CountdownService::new();
        let now = Local::now();
        let id = service.add_event("Past", now - Duration::minutes(5));

        // Three consecutive ticks past the target: only the first reports
        // the event, because the caller marks it after the attempt.
        let due = service.due_notifications(now);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].0, id);
        assert!(service.mark_notified(id));

        assert!(service.due_notifications(now + Duration::seconds(1)).is_empty());
        assert!(service.due_notifications(now + Duration::seconds(2)).is_empty());
        assert!(!service.mark_notified(id));
    }

    #[test]
    fn disabled_notifications_suppress_due_events() {
        let mut service = CountdownService::new();
        let now = Local::now();
        service.add_event("Past", now - Duration::minutes(1));
        service.set_notifications_enabled(false);

        assert!(service.due_notifications(now).is_empty());
        // The event stays un-notified, so re-enabling lets it fire.
        service.set_notifications_enabled(true);
        assert_eq!(service.due_notifications(now).len(), 1);
    }

    #[test]
    fn future_events_are_never_due() {
        let mut service = CountdownService::new();
        let now = Local::now();
        service.add_event("Future", now + Duration::minutes(1));
        assert!(service.due_notifications(now).is_empty());
    }

    #[test]
    fn snapshot_round_trips_all_fields() {
        let mut service = CountdownService::new();
        let base = Local::now();
        let id = service.add_event("Trip", base + Duration::days(3));
        service.add_event("Launch", base + Duration::days(1));
        service.mark_notified(id);

        let restored = CountdownService::from_snapshot(service.snapshot());
        assert_eq!(restored.events(), service.events());
        assert!(!restored.is_dirty());
    }

    #[test]
    fn restore_resorts_and_clamps_next_id() {
        let base = Local::now();
        let snapshot = PersistedState {
            // Stale counter, as a hand-edited snapshot might carry.
            next_id: 2,
            events: vec![
                CountdownEvent {
                    id: EventId(9),
                    name: "Later".to_string(),
                    target_at: base + Duration::days(5),
                    notified: false,
                },
                CountdownEvent {
                    id: EventId(4),
                    name: "Sooner".to_string(),
                    target_at: base + Duration::days(1),
                    notified: true,
                },
            ],
            notification_config: NotificationConfig::default(),
        };

        let mut service = CountdownService::from_snapshot(snapshot);
        assert!(is_sorted(&service));
        assert_eq!(service.events()[0].name, "Sooner");
        assert!(service.events()[0].notified);

        let fresh = service.add_event("New", base + Duration::days(2));
        assert!(fresh.0 > 9);
    }

    #[test]
    fn tick_reports_every_event_in_store_order() {
        let mut service = CountdownService::new();
        let now = Local::now();
        service.add_event("Past", now - Duration::hours(1));
        service.add_event("Future", now + Duration::hours(1));

        let statuses = service.tick(now);
        assert_eq!(statuses.len(), 2);
        assert!(statuses[0].1.reached);
        assert!(!statuses[1].1.reached);
    }
}
