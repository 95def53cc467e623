//! User account view returned by the auth endpoints.

use serde::{Deserialize, Serialize};

/// Public view of a user account, embedded in auth responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    pub id: String,
    pub email: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email_verified: bool,
    pub created_at: String,
    pub updated_at: String,
}
