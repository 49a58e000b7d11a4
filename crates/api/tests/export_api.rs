//! HTTP-level integration tests for PDF export, backed by a local double of
//! the static map provider.
//!
//! The success path needs real TTF font files and is covered by unit tests
//! in `wayplan-export`; here we pin down the HTTP status mapping and the
//! guarantee that a failed export never creates the output directory.

mod common;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use common::{body_json, post, post_json};
use sqlx::PgPool;

/// Map-provider double serving a valid PNG for every static map URL.
fn map_stub() -> Router {
    Router::new().route(
        "/styles/v1/mapbox/streets-v11/static/{*rest}",
        get(|| async { common::TINY_PNG }),
    )
}

/// Map-provider double that always fails.
fn failing_map_stub() -> Router {
    Router::new().route(
        "/styles/v1/mapbox/streets-v11/static/{*rest}",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    )
}

/// Create a trip, an itinerary, and optionally one placed attraction.
/// Returns the itinerary id.
async fn setup_itinerary(pool: &PgPool, with_place: bool) -> i64 {
    common::seed_country(pool, "HU", "Hungary").await;
    common::seed_city(pool, 3054643, "Budapest", "HU").await;

    let app = common::build_test_app(pool.clone());
    let trip = body_json(
        post_json(
            app,
            "/api/v1/trips",
            serde_json::json!({"name": "Hungary Trip", "destinations": ["HU"]}),
        )
        .await,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let colors = body_json(common::get(app, "/api/v1/colors").await).await;

    let app = common::build_test_app(pool.clone());
    let itinerary = body_json(
        post_json(
            app,
            "/api/v1/itineraries",
            serde_json::json!({
                "name": "Day 1",
                "trip_id": trip["id"],
                "sort_order": 1,
                "color_id": colors[0]["id"],
            }),
        )
        .await,
    )
    .await;
    let itinerary_id = itinerary["id"].as_i64().unwrap();

    if with_place {
        let app = common::build_test_app(pool.clone());
        let attraction = body_json(
            post_json(
                app,
                "/api/v1/attractions",
                serde_json::json!({
                    "name": "Buda Castle",
                    "latitude": 47.4979,
                    "longitude": 19.0402,
                    "city_id": 3054643,
                }),
            )
            .await,
        )
        .await;

        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            &format!("/api/v1/itineraries/{itinerary_id}/places"),
            serde_json::json!({"attraction_id": attraction["id"]}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    itinerary_id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_export_unknown_itinerary_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post(app, "/api/v1/itineraries/999999/export").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_export_empty_itinerary_returns_400(pool: PgPool) {
    let itinerary_id = setup_itinerary(&pool, false).await;

    let app = common::build_test_app(pool);
    let response = post(app, &format!("/api/v1/itineraries/{itinerary_id}/export")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_export_map_failure_returns_502_and_writes_nothing(pool: PgPool) {
    let itinerary_id = setup_itinerary(&pool, true).await;
    let base = common::spawn_stub_server(failing_map_stub()).await;
    let workdir = tempfile::tempdir().unwrap();
    let export_dir = workdir.path().join("exports");

    let mut config = common::test_config();
    config.mapbox_base_url = base;
    config.export_dir = export_dir.clone();

    let app = common::build_test_app_with(pool, config);
    let response = post(app, &format!("/api/v1/itineraries/{itinerary_id}/export")).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["code"], "UPSTREAM_ERROR");

    // The export aborted before touching the filesystem.
    assert!(!export_dir.exists());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_export_missing_fonts_returns_500_and_writes_nothing(pool: PgPool) {
    let itinerary_id = setup_itinerary(&pool, true).await;
    let base = common::spawn_stub_server(map_stub()).await;
    let workdir = tempfile::tempdir().unwrap();
    let export_dir = workdir.path().join("exports");

    let mut config = common::test_config();
    config.mapbox_base_url = base;
    config.export_dir = export_dir.clone();
    // An empty directory: the renderer fails to open the fonts.
    config.font_dir = workdir.path().to_path_buf();

    let app = common::build_test_app_with(pool, config);
    let response = post(app, &format!("/api/v1/itineraries/{itinerary_id}/export")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INTERNAL_ERROR");

    assert!(!export_dir.exists());
}
