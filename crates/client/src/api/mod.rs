//! Authenticated API surface: the orchestrating client and the thin domain
//! services built on top of it.

mod client;
mod errors;
mod rooms;
mod zones;

pub use client::ApiClient;
pub use errors::ApiError;
pub use rooms::RoomService;
pub use zones::ZoneService;
