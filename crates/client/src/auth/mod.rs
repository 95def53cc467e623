//! Authentication: session operations and wire types.
//!
//! The auth service talks to the backend's `auth/*` endpoints directly
//! through the transport, never through the API client, since no valid
//! access token can be assumed to exist during login or refresh.

mod service;
mod types;

pub use service::{AuthError, AuthService};
pub use types::{AuthResponse, CachedUser, LoginRequest, RefreshRequest, RefreshResponse, RegisterRequest};
