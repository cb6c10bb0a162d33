use std::time::Duration;

/// Repaint cadence while at least one event is being tracked.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SchedulerState {
    #[default]
    Stopped,
    Running,
}

/// 1 Hz tick state machine. Runs while the store holds at least one event,
/// stops when it empties. There is no drift correction or catch-up: each
/// tick recomputes from the current wall clock, so ticks missed during a
/// suspend are masked by the next one.
#[derive(Debug, Default)]
pub struct TickScheduler {
    state: SchedulerState,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    /// Reconcile the scheduler with the store size. Starts on the first
    /// event (including load-time restores) and stops once the store is
    /// empty again. Returns true when the state changed.
    pub fn sync_with_store(&mut self, tracked_events: usize) -> bool {
        let next = if tracked_events > 0 {
            SchedulerState::Running
        } else {
            SchedulerState::Stopped
        };

        if next == self.state {
            return false;
        }
        log::info!(
            "scheduler: {:?} -> {:?} ({} event(s) tracked)",
            self.state,
            next,
            tracked_events
        );
        self.state = next;
        true
    }

    /// How long the UI should wait before the next timed repaint, if any.
    pub fn next_tick_delay(&self) -> Option<Duration> {
        self.is_running().then_some(TICK_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped_with_no_delay() {
        let scheduler = TickScheduler::new();
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.next_tick_delay(), None);
    }

    #[test]
    fn first_event_starts_ticking() {
        let mut scheduler = TickScheduler::new();
        assert!(scheduler.sync_with_store(1));
        assert!(scheduler.is_running());
        assert_eq!(scheduler.next_tick_delay(), Some(TICK_INTERVAL));
    }

    #[test]
    fn emptying_the_store_stops_ticking() {
        let mut scheduler = TickScheduler::new();
        scheduler.sync_with_store(2);
        assert!(!scheduler.sync_with_store(1), "still running, no change");
        assert!(scheduler.sync_with_store(0));
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.next_tick_delay(), None);
    }

    #[test]
    fn adding_after_stop_restarts() {
        let mut scheduler = TickScheduler::new();
        scheduler.sync_with_store(1);
        scheduler.sync_with_store(0);
        assert!(scheduler.sync_with_store(1));
        assert!(scheduler.is_running());
    }
}
