//! Symbolic endpoint descriptors and URL construction.
//!
//! Every backend resource is addressed through a closed descriptor enum, so
//! building a URL is a pure, total function: no descriptor can fail to
//! resolve. Malformed ids are the caller's problem; this layer does not
//! validate them.

use std::fmt;

/// Auth endpoints (no bearer token required, except that `Refresh` carries
/// the refresh token in its body).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRoute {
    Login,
    Register,
    Refresh,
}

/// Room resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomRoute {
    /// `rooms`: list and create.
    Collection,
    /// `rooms/{id}`: get, patch, delete.
    ById(String),
    /// `rooms/{id}/zones`: list and create zones of a room.
    Zones(String),
    /// `rooms/{id}/restore`: undelete.
    Restore(String),
}

/// Zone resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneRoute {
    /// `zones/{id}`: patch, delete.
    ById(String),
    /// `zones/{id}/clean`: record a cleaning.
    Clean(String),
    /// `zones/due`: zones currently due.
    Due,
    /// `zones/bulk-clean`: clean several zones at once.
    BulkClean,
}

/// Statistics resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsRoute {
    Overview,
}

/// A symbolic, immutable resource descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Auth(AuthRoute),
    Rooms(RoomRoute),
    Zones(ZoneRoute),
    Stats(StatsRoute),
}

impl Endpoint {
    /// Path relative to the API base URL.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Auth(route) => match route {
                AuthRoute::Login => "auth/login".to_string(),
                AuthRoute::Register => "auth/register".to_string(),
                AuthRoute::Refresh => "auth/refresh".to_string(),
            },
            Self::Rooms(route) => match route {
                RoomRoute::Collection => "rooms".to_string(),
                RoomRoute::ById(id) => format!("rooms/{id}"),
                RoomRoute::Zones(id) => format!("rooms/{id}/zones"),
                RoomRoute::Restore(id) => format!("rooms/{id}/restore"),
            },
            Self::Zones(route) => match route {
                ZoneRoute::ById(id) => format!("zones/{id}"),
                ZoneRoute::Clean(id) => format!("zones/{id}/clean"),
                ZoneRoute::Due => "zones/due".to_string(),
                ZoneRoute::BulkClean => "zones/bulk-clean".to_string(),
            },
            Self::Stats(route) => match route {
                StatsRoute::Overview => "stats/overview".to_string(),
            },
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Resolves descriptors against a configured base URL. Stateless.
#[derive(Debug, Clone)]
pub struct EndpointBuilder {
    base_url: String,
}

impl EndpointBuilder {
    /// Create a builder for the given base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Fully qualified URL for the descriptor.
    #[must_use]
    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }
}
