//! Data models shared between the Sweeply API client and its callers.
//!
//! Everything here mirrors the backend's JSON wire format (snake_case keys,
//! ISO-8601 timestamps). These types carry no I/O and no client state; the
//! request/response plumbing lives in `sweeply-client`.

pub mod rooms;
pub mod stats;
pub mod users;
pub mod zones;

pub use rooms::{NewRoom, Room, UpdateRoom};
pub use stats::StatsOverview;
pub use users::UserView;
pub use zones::{BulkClean, CleanZone, Frequency, NewZone, UpdateZone, Zone};
