mod compute;
mod models;
mod persistence;
mod scheduler;
mod service;

pub use compute::{compute, format_target_date, CountdownStatus, COMPLETED_MARKER};
pub use models::{
    CountdownEvent, EventId, NotificationConfig, PersistedState, DEFAULT_EVENT_NAME,
};
pub use persistence::{load_snapshot, save_snapshot};
pub use scheduler::{TickScheduler, TICK_INTERVAL};
pub use service::CountdownService;
