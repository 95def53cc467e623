//! Zone models, cleaning frequencies and request bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How often a zone should be cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    /// Interval given by `custom_interval_days` on the zone.
    Custom,
}

/// A cleanable item within a room, with its due-date state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub room_id: String,
    pub name: String,
    pub icon: String,
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_interval_days: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_cleaned_at: Option<DateTime<Utc>>,
    pub is_due: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_due_at: Option<DateTime<Utc>>,
}

/// Body for `POST rooms/{id}/zones`.
#[derive(Debug, Clone, Serialize)]
pub struct NewZone {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub frequency: Frequency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_interval_days: Option<u32>,
}

/// Body for `PATCH zones/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateZone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_interval_days: Option<u32>,
}

/// Body for `POST zones/{id}/clean`.
#[derive(Debug, Clone, Serialize)]
pub struct CleanZone {
    /// UTC timestamp of the cleaning, ISO-8601 with millisecond precision.
    pub cleaned_at: String,
}

/// Body for `POST zones/bulk-clean`.
#[derive(Debug, Clone, Serialize)]
pub struct BulkClean {
    pub zone_ids: Vec<String>,
    pub cleaned_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_uses_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&Frequency::Weekly).unwrap(), "\"weekly\"");
        let f: Frequency = serde_json::from_str("\"custom\"").unwrap();
        assert_eq!(f, Frequency::Custom);
    }

    #[test]
    fn decodes_zone_with_due_state() {
        let json = r#"{
            "id": "z9",
            "room_id": "r1",
            "name": "Sink",
            "icon": "🚰",
            "frequency": "daily",
            "created_at": "2025-09-09T10:00:00Z",
            "updated_at": "2025-09-10T08:30:00Z",
            "last_cleaned_at": "2025-09-10T08:30:00Z",
            "is_due": true,
            "next_due_at": "2025-09-11T08:30:00Z"
        }"#;

        let zone: Zone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.frequency, Frequency::Daily);
        assert!(zone.is_due);
        assert!(zone.custom_interval_days.is_none());
    }

    #[test]
    fn update_zone_serializes_only_set_fields() {
        let update = UpdateZone { name: Some("Stove".to_string()), ..Default::default() };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Stove"}));
    }
}
