//! Sweeply API client.
//!
//! Authenticated HTTP client for the Sweeply cleaning-tracker backend, built
//! around four layers:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ RoomService / ZoneService    │  domain glue
//! └──────────────┬───────────────┘
//!                │
//! ┌──────────────▼───────────────┐
//! │ ApiClient                    │  bearer auth, 401 → single-flight
//! │   └── AuthService            │  refresh → replay once
//! └──────┬───────────────┬───────┘
//!        │               │
//! ┌──────▼──────┐ ┌──────▼───────────┐
//! │ HttpTransport│ │ CredentialStore │  one round trip / secure storage
//! └─────────────┘ └──────────────────┘
//! ```
//!
//! Exactly one `ApiClient` (and one credential store) should exist per
//! process; the at-most-one-refresh-in-flight guarantee depends on it.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use sweeply_client::{ApiClient, ApiConfig, KeyringCredentialStore, RoomService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ApiConfig::with_base_url("http://localhost:8080/api/v1");
//! let store = Arc::new(KeyringCredentialStore::new("Sweeply.auth"));
//! let client = Arc::new(ApiClient::new(&config, store)?);
//!
//! client.auth().login("a@b.com", "pw123456").await?;
//!
//! let rooms = RoomService::new(Arc::clone(&client));
//! for room in rooms.list_rooms().await? {
//!     println!("{} ({:.0}%)", room.name, room.progress() * 100.0);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod credentials;
pub mod endpoints;
pub mod http;
pub mod testing;

pub use api::{ApiClient, ApiError, RoomService, ZoneService};
pub use auth::{AuthError, AuthService};
pub use config::ApiConfig;
pub use credentials::{CredentialKey, CredentialStore, CredentialStoreError, KeyringCredentialStore};
pub use endpoints::{Endpoint, EndpointBuilder};
pub use http::{HttpTransport, TransportError};
