//! Zone operations over the authenticated API client.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use sweeply_domain::{BulkClean, CleanZone, UpdateZone, Zone};

use super::client::ApiClient;
use super::errors::ApiError;
use crate::endpoints::{Endpoint, ZoneRoute};

/// Thin mapping from zone operations to endpoint descriptors.
pub struct ZoneService {
    client: Arc<ApiClient>,
}

impl ZoneService {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `PATCH zones/{id}`
    pub async fn update_zone(&self, id: &str, update: &UpdateZone) -> Result<Zone, ApiError> {
        self.client.patch(&Endpoint::Zones(ZoneRoute::ById(id.to_string())), update).await
    }

    /// `DELETE zones/{id}`
    pub async fn delete_zone(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&Endpoint::Zones(ZoneRoute::ById(id.to_string()))).await
    }

    /// `POST zones/{id}/clean`: record a cleaning now; the backend
    /// recomputes last-cleaned and next-due state.
    pub async fn clean_zone(&self, id: &str) -> Result<Zone, ApiError> {
        let body = CleanZone { cleaned_at: now_utc_millis() };
        self.client.post(&Endpoint::Zones(ZoneRoute::Clean(id.to_string())), &body).await
    }

    /// `GET zones/due`: every zone currently due for cleaning.
    pub async fn due_zones(&self) -> Result<Vec<Zone>, ApiError> {
        self.client.get(&Endpoint::Zones(ZoneRoute::Due)).await
    }

    /// `POST zones/bulk-clean`: mark several zones cleaned at once.
    pub async fn bulk_clean(&self, zone_ids: &[String]) -> Result<(), ApiError> {
        let body = BulkClean { zone_ids: zone_ids.to_vec(), cleaned_at: now_utc_millis() };
        self.client
            .post::<_, ()>(&Endpoint::Zones(ZoneRoute::BulkClean), &body)
            .await
    }
}

/// UTC now as ISO-8601 with millisecond precision, the backend's expected
/// `cleaned_at` format.
fn now_utc_millis() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
