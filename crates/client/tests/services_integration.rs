//! Integration tests for the room and zone services (domain glue).

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use sweeply_client::credentials::CredentialStore;
use sweeply_client::testing::MemoryCredentialStore;
use sweeply_client::{ApiClient, ApiConfig, ApiError, RoomService, ZoneService};
use sweeply_domain::{Frequency, NewRoom, NewZone, UpdateRoom, UpdateZone};
use uuid::Uuid;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn room_json(id: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "icon": "🧽",
        "zones_cleaned_count": 0,
        "zones_total": 0,
        "created_at": "2025-09-09T10:00:00Z",
        "updated_at": "2025-09-09T10:00:00Z"
    })
}

fn zone_json(id: &str, room_id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "room_id": room_id,
        "name": "Sink",
        "icon": "🚰",
        "frequency": "weekly",
        "created_at": "2025-09-09T10:00:00Z",
        "updated_at": "2025-09-09T10:00:00Z",
        "last_cleaned_at": "2025-09-10T08:30:00Z",
        "is_due": false,
        "next_due_at": "2025-09-17T08:30:00Z"
    })
}

async fn authed_client(server: &MockServer) -> Arc<ApiClient> {
    let config = ApiConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
        client_id: "desktop".to_string(),
    };
    let store = Arc::new(MemoryCredentialStore::new());
    store.save_token_pair("a1", Some("r1")).await.unwrap();
    Arc::new(ApiClient::new(&config, store as Arc<dyn CredentialStore>).unwrap())
}

#[tokio::test]
async fn list_rooms_decodes_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms"))
        .and(header("authorization", "Bearer a1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([room_json("r1", "Kitchen"), room_json("r2", "Bathroom")])),
        )
        .mount(&server)
        .await;

    let rooms = RoomService::new(authed_client(&server).await);
    let listed = rooms.list_rooms().await.unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[1].name, "Bathroom");
}

#[tokio::test]
async fn create_room_posts_name_and_icon() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4().to_string();
    Mock::given(method("POST"))
        .and(path("/rooms"))
        .and(body_json(json!({"name": "Kitchen", "icon": "🍳"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(room_json(&id, "Kitchen")))
        .expect(1)
        .mount(&server)
        .await;

    let rooms = RoomService::new(authed_client(&server).await);
    let created = rooms
        .create_room(&NewRoom { name: "Kitchen".to_string(), icon: Some("🍳".to_string()) })
        .await
        .unwrap();

    assert_eq!(created.id, id);
}

#[tokio::test]
async fn update_room_patches_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rooms/r1"))
        .and(body_json(json!({"name": "Pantry"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(room_json("r1", "Pantry")))
        .expect(1)
        .mount(&server)
        .await;

    let rooms = RoomService::new(authed_client(&server).await);
    let updated = rooms
        .update_room("r1", &UpdateRoom { name: Some("Pantry".to_string()), ..Default::default() })
        .await
        .unwrap();

    assert_eq!(updated.name, "Pantry");
}

#[tokio::test]
async fn delete_room_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/rooms/r1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let rooms = RoomService::new(authed_client(&server).await);
    rooms.delete_room("r1").await.unwrap();
}

#[tokio::test]
async fn restore_room_posts_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rooms/r1/restore"))
        .respond_with(ResponseTemplate::new(200).set_body_json(room_json("r1", "Kitchen")))
        .expect(1)
        .mount(&server)
        .await;

    let rooms = RoomService::new(authed_client(&server).await);
    let restored = rooms.restore_room("r1").await.unwrap();
    assert_eq!(restored.id, "r1");
}

#[tokio::test]
async fn zones_of_a_room_roundtrip() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms/r1/zones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([zone_json("z1", "r1")])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rooms/r1/zones"))
        .and(body_json(json!({"name": "Sink", "frequency": "weekly"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(zone_json("z2", "r1")))
        .expect(1)
        .mount(&server)
        .await;

    let rooms = RoomService::new(authed_client(&server).await);

    let zones = rooms.list_zones("r1").await.unwrap();
    assert_eq!(zones[0].frequency, Frequency::Weekly);

    let created = rooms
        .create_zone(
            "r1",
            &NewZone {
                name: "Sink".to_string(),
                icon: None,
                frequency: Frequency::Weekly,
                custom_interval_days: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(created.id, "z2");
}

#[tokio::test]
async fn clean_zone_posts_iso8601_timestamp() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/zones/z1/clean"))
        .and(body_string_contains("cleaned_at"))
        .respond_with(ResponseTemplate::new(200).set_body_json(zone_json("z1", "r1")))
        .expect(1)
        .mount(&server)
        .await;

    let zones = ZoneService::new(authed_client(&server).await);
    let cleaned = zones.clean_zone("z1").await.unwrap();

    assert_eq!(cleaned.id, "z1");
    assert!(!cleaned.is_due);
}

#[tokio::test]
async fn update_and_delete_zone() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/zones/z1"))
        .and(body_json(json!({"frequency": "daily"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(zone_json("z1", "r1")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/zones/z1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let zones = ZoneService::new(authed_client(&server).await);
    zones
        .update_zone("z1", &UpdateZone { frequency: Some(Frequency::Daily), ..Default::default() })
        .await
        .unwrap();
    zones.delete_zone("z1").await.unwrap();
}

#[tokio::test]
async fn due_zones_and_bulk_clean() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/zones/due"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([zone_json("z1", "r1")])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/zones/bulk-clean"))
        .and(body_string_contains("zone_ids"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let zones = ZoneService::new(authed_client(&server).await);

    let due = zones.due_zones().await.unwrap();
    assert_eq!(due.len(), 1);

    zones.bulk_clean(&["z1".to_string(), "z2".to_string()]).await.unwrap();
}

#[tokio::test]
async fn stats_overview_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/overview"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "rooms_total": 3,
            "zones_total": 12,
            "zones_cleaned": 7,
            "zones_due": 5
        })))
        .mount(&server)
        .await;

    let rooms = RoomService::new(authed_client(&server).await);
    let stats = rooms.stats_overview().await.unwrap();

    assert_eq!(stats.rooms_total, 3);
    assert_eq!(stats.zones_due, 5);
}

#[tokio::test]
async fn service_surfaces_unauthorized_after_forced_logout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let rooms = RoomService::new(authed_client(&server).await);
    let result = rooms.list_rooms().await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
}
