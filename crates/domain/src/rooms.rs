//! Room models and derived progress state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named physical area containing cleanable zones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub icon: String,

    /// Number of zones in this room that are currently clean.
    #[serde(rename = "zones_cleaned_count")]
    pub completed_zones: u32,

    /// Total number of zones in this room.
    #[serde(rename = "zones_total")]
    pub total_zones: u32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Room {
    /// Fraction of zones cleaned, in `0.0..=1.0`. A room with no zones counts
    /// as fully clean.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.total_zones == 0 {
            return 1.0;
        }
        self.completed_zones as f32 / self.total_zones as f32
    }

    /// A room needs attention while any of its zones is still dirty
    /// (progress strictly below 1.0).
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        self.progress() < 1.0
    }
}

/// Body for `POST rooms`.
#[derive(Debug, Clone, Serialize)]
pub struct NewRoom {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Body for `PATCH rooms/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateRoom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(completed: u32, total: u32) -> Room {
        Room {
            id: "r1".to_string(),
            name: "Kitchen".to_string(),
            icon: "🍳".to_string(),
            completed_zones: completed,
            total_zones: total,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn progress_is_fraction_of_cleaned_zones() {
        assert_eq!(room(2, 4).progress(), 0.5);
        assert_eq!(room(4, 4).progress(), 1.0);
    }

    #[test]
    fn empty_room_counts_as_clean() {
        let r = room(0, 0);
        assert_eq!(r.progress(), 1.0);
        assert!(!r.needs_attention());
    }

    #[test]
    fn partially_cleaned_room_needs_attention() {
        assert!(room(1, 3).needs_attention());
        assert!(!room(3, 3).needs_attention());
    }

    #[test]
    fn decodes_backend_wire_format() {
        let json = r#"{
            "id": "a1b2",
            "name": "Bathroom",
            "icon": "🛁",
            "zones_cleaned_count": 1,
            "zones_total": 5,
            "created_at": "2025-09-09T10:00:00Z",
            "updated_at": "2025-09-10T08:30:00Z",
            "deleted_at": null
        }"#;

        let room: Room = serde_json::from_str(json).unwrap();
        assert_eq!(room.id, "a1b2");
        assert_eq!(room.completed_zones, 1);
        assert_eq!(room.total_zones, 5);
        assert!(room.deleted_at.is_none());
        assert!(room.needs_attention());
    }
}
