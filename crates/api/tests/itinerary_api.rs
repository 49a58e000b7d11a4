//! HTTP-level integration tests for itineraries, places, and the color
//! palette.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Seed geography and create a trip through the API, returning its id.
async fn setup_trip(pool: &PgPool) -> i64 {
    common::seed_country(pool, "HU", "Hungary").await;
    common::seed_city(pool, 3054643, "Budapest", "HU").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/trips",
            serde_json::json!({"name": "Hungary Trip", "destinations": ["HU"]}),
        )
        .await,
    )
    .await;
    created["id"].as_i64().unwrap()
}

async fn first_color_id(pool: &PgPool) -> i64 {
    let app = common::build_test_app(pool.clone());
    let colors = body_json(get(app, "/api/v1/colors").await).await;
    colors[0]["id"].as_i64().unwrap()
}

async fn create_itinerary(pool: &PgPool, trip_id: i64, name: &str, sort_order: i32) -> i64 {
    let color_id = first_color_id(pool).await;
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/itineraries",
            serde_json::json!({
                "name": name,
                "trip_id": trip_id,
                "sort_order": sort_order,
                "color_id": color_id,
            }),
        )
        .await,
    )
    .await;
    created["id"].as_i64().unwrap()
}

async fn create_attraction(pool: &PgPool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/attractions",
            serde_json::json!({
                "name": name,
                "latitude": 47.496,
                "longitude": 19.039,
                "city_id": 3054643,
            }),
        )
        .await,
    )
    .await;
    created["id"].as_i64().unwrap()
}

/// Add a place without an explicit position, returning the place row.
async fn add_place(pool: &PgPool, itinerary_id: i64, attraction_id: i64) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/itineraries/{itinerary_id}/places"),
        serde_json::json!({"attraction_id": attraction_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Color palette
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_colors_returns_seeded_palette(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/colors").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let colors = json.as_array().unwrap();
    assert_eq!(colors.len(), 17);
    assert_eq!(colors[0]["name"], "red");
    assert_eq!(colors[0]["hex"], "ef4444");
}

// ---------------------------------------------------------------------------
// Itinerary CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_itinerary_returns_201(pool: PgPool) {
    let trip_id = setup_trip(&pool).await;
    let color_id = first_color_id(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/itineraries",
        serde_json::json!({
            "name": "Day 1",
            "trip_id": trip_id,
            "sort_order": 1,
            "color_id": color_id,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Day 1");
    assert_eq!(json["trip_id"], trip_id);
    assert_eq!(json["color_id"], color_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_itinerary_blank_name_returns_400(pool: PgPool) {
    let trip_id = setup_trip(&pool).await;
    let color_id = first_color_id(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/itineraries",
        serde_json::json!({
            "name": " ",
            "trip_id": trip_id,
            "sort_order": 1,
            "color_id": color_id,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_itinerary_unknown_trip_returns_400(pool: PgPool) {
    let color_id = first_color_id(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/itineraries",
        serde_json::json!({
            "name": "Orphan Day",
            "trip_id": 999999,
            "sort_order": 1,
            "color_id": color_id,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REFERENCE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_itinerary_details(pool: PgPool) {
    let trip_id = setup_trip(&pool).await;
    let itinerary_id = create_itinerary(&pool, trip_id, "Day 1", 1).await;
    let attraction_id = create_attraction(&pool, "Buda Castle").await;
    add_place(&pool, itinerary_id, attraction_id).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/itineraries/{itinerary_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Day 1");
    assert_eq!(json["color"]["name"], "red");
    let places = json["places"].as_array().unwrap();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0]["sort_order"], 1);
    assert_eq!(places[0]["attraction"]["name"], "Buda Castle");
    assert_eq!(places[0]["attraction"]["city"]["name"], "Budapest");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_itinerary_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/itineraries/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rename_itinerary(pool: PgPool) {
    let trip_id = setup_trip(&pool).await;
    let itinerary_id = create_itinerary(&pool, trip_id, "Day 1", 1).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/itineraries/{itinerary_id}"),
        serde_json::json!({"name": "Castle Day"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Castle Day");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rename_itinerary_blank_name_returns_400(pool: PgPool) {
    let trip_id = setup_trip(&pool).await;
    let itinerary_id = create_itinerary(&pool, trip_id, "Day 1", 1).await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/itineraries/{itinerary_id}"),
        serde_json::json!({"name": ""}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_itinerary_cascades_places(pool: PgPool) {
    let trip_id = setup_trip(&pool).await;
    let itinerary_id = create_itinerary(&pool, trip_id, "Day 1", 1).await;
    let attraction_id = create_attraction(&pool, "Buda Castle").await;
    add_place(&pool, itinerary_id, attraction_id).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/itineraries/{itinerary_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/itineraries/{itinerary_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The attraction itself survives.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/attractions/{attraction_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Per-trip listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_trip_ordered_by_position(pool: PgPool) {
    let trip_id = setup_trip(&pool).await;
    create_itinerary(&pool, trip_id, "Second Day", 2).await;
    create_itinerary(&pool, trip_id, "First Day", 1).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/trips/{trip_id}/itineraries")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["First Day", "Second Day"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_trip_unknown_trip_is_empty(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/trips/999999/itineraries").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

// ---------------------------------------------------------------------------
// Places
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_place_appends_positions(pool: PgPool) {
    let trip_id = setup_trip(&pool).await;
    let itinerary_id = create_itinerary(&pool, trip_id, "Day 1", 1).await;
    let castle = create_attraction(&pool, "Buda Castle").await;
    let bastion = create_attraction(&pool, "Fisherman's Bastion").await;

    let first = add_place(&pool, itinerary_id, castle).await;
    assert_eq!(first["sort_order"], 1);

    let second = add_place(&pool, itinerary_id, bastion).await;
    assert_eq!(second["sort_order"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_place_accepts_explicit_position(pool: PgPool) {
    let trip_id = setup_trip(&pool).await;
    let itinerary_id = create_itinerary(&pool, trip_id, "Day 1", 1).await;
    let castle = create_attraction(&pool, "Buda Castle").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/itineraries/{itinerary_id}/places"),
        serde_json::json!({"attraction_id": castle, "sort_order": 5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["sort_order"], 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_place_unknown_attraction_returns_400(pool: PgPool) {
    let trip_id = setup_trip(&pool).await;
    let itinerary_id = create_itinerary(&pool, trip_id, "Day 1", 1).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/itineraries/{itinerary_id}/places"),
        serde_json::json!({"attraction_id": 999999}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_REFERENCE");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_remove_place_leaves_order_gap(pool: PgPool) {
    let trip_id = setup_trip(&pool).await;
    let itinerary_id = create_itinerary(&pool, trip_id, "Day 1", 1).await;
    let a = create_attraction(&pool, "A").await;
    let b = create_attraction(&pool, "B").await;
    let c = create_attraction(&pool, "C").await;
    add_place(&pool, itinerary_id, a).await;
    add_place(&pool, itinerary_id, b).await;
    add_place(&pool, itinerary_id, c).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(
        app,
        &format!("/api/v1/itineraries/{itinerary_id}/places/{b}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Remaining places keep their positions; nothing renumbers.
    let app = common::build_test_app(pool);
    let details = body_json(get(app, &format!("/api/v1/itineraries/{itinerary_id}")).await).await;
    let orders: Vec<(i64, i64)> = details["places"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| {
            (
                p["attraction_id"].as_i64().unwrap(),
                p["sort_order"].as_i64().unwrap(),
            )
        })
        .collect();
    assert_eq!(orders, vec![(a, 1), (c, 3)]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_remove_place_not_in_itinerary_returns_404(pool: PgPool) {
    let trip_id = setup_trip(&pool).await;
    let itinerary_id = create_itinerary(&pool, trip_id, "Day 1", 1).await;
    let castle = create_attraction(&pool, "Buda Castle").await;

    let app = common::build_test_app(pool);
    let response = delete(
        app,
        &format!("/api/v1/itineraries/{itinerary_id}/places/{castle}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_swap_places_with_two_order_updates(pool: PgPool) {
    let trip_id = setup_trip(&pool).await;
    let itinerary_id = create_itinerary(&pool, trip_id, "Day 1", 1).await;
    let a = create_attraction(&pool, "A").await;
    let b = create_attraction(&pool, "B").await;
    let first = add_place(&pool, itinerary_id, a).await;
    let second = add_place(&pool, itinerary_id, b).await;
    let first_id = first["id"].as_i64().unwrap();
    let second_id = second["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/places/{first_id}/order"),
        serde_json::json!({"sort_order": 2}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/places/{second_id}/order"),
        serde_json::json!({"sort_order": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let details = body_json(get(app, &format!("/api/v1/itineraries/{itinerary_id}")).await).await;
    let order: Vec<i64> = details["places"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["attraction_id"].as_i64().unwrap())
        .collect();
    assert_eq!(order, vec![b, a]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_place_order_rejects_zero(pool: PgPool) {
    let trip_id = setup_trip(&pool).await;
    let itinerary_id = create_itinerary(&pool, trip_id, "Day 1", 1).await;
    let castle = create_attraction(&pool, "Buda Castle").await;
    let place = add_place(&pool, itinerary_id, castle).await;
    let place_id = place["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/places/{place_id}/order"),
        serde_json::json!({"sort_order": 0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_order_unknown_place_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/places/999999/order",
        serde_json::json!({"sort_order": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
