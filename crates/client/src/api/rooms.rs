//! Room CRUD over the authenticated API client.

use std::sync::Arc;

use sweeply_domain::{NewRoom, NewZone, Room, StatsOverview, UpdateRoom, Zone};

use super::client::ApiClient;
use super::errors::ApiError;
use crate::endpoints::{Endpoint, RoomRoute, StatsRoute};

/// Thin mapping from room operations to endpoint descriptors.
pub struct RoomService {
    client: Arc<ApiClient>,
}

impl RoomService {
    #[must_use]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// `GET rooms`
    pub async fn list_rooms(&self) -> Result<Vec<Room>, ApiError> {
        self.client.get(&Endpoint::Rooms(RoomRoute::Collection)).await
    }

    /// `GET rooms/{id}`
    pub async fn get_room(&self, id: &str) -> Result<Room, ApiError> {
        self.client.get(&Endpoint::Rooms(RoomRoute::ById(id.to_string()))).await
    }

    /// `POST rooms`
    pub async fn create_room(&self, room: &NewRoom) -> Result<Room, ApiError> {
        self.client.post(&Endpoint::Rooms(RoomRoute::Collection), room).await
    }

    /// `PATCH rooms/{id}`
    pub async fn update_room(&self, id: &str, update: &UpdateRoom) -> Result<Room, ApiError> {
        self.client.patch(&Endpoint::Rooms(RoomRoute::ById(id.to_string())), update).await
    }

    /// `DELETE rooms/{id}`
    pub async fn delete_room(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&Endpoint::Rooms(RoomRoute::ById(id.to_string()))).await
    }

    /// `POST rooms/{id}/restore`: undelete a soft-deleted room.
    pub async fn restore_room(&self, id: &str) -> Result<Room, ApiError> {
        self.client.post_empty(&Endpoint::Rooms(RoomRoute::Restore(id.to_string()))).await
    }

    /// `GET rooms/{id}/zones`
    pub async fn list_zones(&self, room_id: &str) -> Result<Vec<Zone>, ApiError> {
        self.client.get(&Endpoint::Rooms(RoomRoute::Zones(room_id.to_string()))).await
    }

    /// `POST rooms/{id}/zones`
    pub async fn create_zone(&self, room_id: &str, zone: &NewZone) -> Result<Zone, ApiError> {
        self.client.post(&Endpoint::Rooms(RoomRoute::Zones(room_id.to_string())), zone).await
    }

    /// `GET stats/overview`
    pub async fn stats_overview(&self) -> Result<StatsOverview, ApiError> {
        self.client.get(&Endpoint::Stats(StatsRoute::Overview)).await
    }
}
