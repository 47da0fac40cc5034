//! HTTP-level integration tests for the `/api/clients` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, post_raw, put_json};
use sqlx::PgPool;

async fn create_client(pool: &PgPool, name: &str) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/clients",
        serde_json::json!({"name": name, "email": "office@example.sk"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_client_returns_201_and_get_returns_same_row(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/clients",
        serde_json::json!({"name": "Acme", "email": "a@acme.sk", "phone": "+421900000000"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["name"], "Acme");
    assert!(created["id"].is_number());
    assert!(created["created_at"].is_string());

    let id = created["id"].as_i64().unwrap();
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/clients/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, created);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_clients_newest_first(pool: PgPool) {
    let first = create_client(&pool, "First").await;
    let second = create_client(&pool, "Second").await;
    assert!(second["id"].as_i64().unwrap() > first["id"].as_i64().unwrap());

    let app = common::build_test_app(pool);
    let response = get(app, "/api/clients").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Second", "First"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_client_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/clients/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Client not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_client_round_trips_and_refreshes_updated_at(pool: PgPool) {
    let created = create_client(&pool, "Original").await;
    let id = created["id"].as_i64().unwrap();

    let full = serde_json::json!({
        "name": "StartupXY",
        "email": "maria@startupxy.com",
        "phone": "+421 902 654 321",
        "company": "StartupXY s.r.o.",
        "address": "Hlavná 1, Bratislava",
        "ico": "12345678",
        "dic": "2020123456",
        "ic_dph": "SK2020123456",
    });

    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/clients/{id}"), full.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, &format!("/api/clients/{id}")).await).await;
    for key in ["name", "email", "phone", "company", "address", "ico", "dic", "ic_dph"] {
        assert_eq!(fetched[key], full[key], "field {key} should round-trip");
    }
    assert_eq!(fetched["created_at"], created["created_at"]);

    let before: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(created["updated_at"].clone()).unwrap();
    let after: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(fetched["updated_at"].clone()).unwrap();
    assert!(after > before);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_client_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/clients/999999",
        serde_json::json!({"name": "Ghost", "email": "ghost@example.sk"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_client_twice_returns_200_then_404(pool: PgPool) {
    let created = create_client(&pool, "Delete Me").await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/clients/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["message"], "Client deleted successfully");

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/clients/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_leaves_count_unchanged(pool: PgPool) {
    create_client(&pool, "Keeper").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, "/api/clients/424242").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/clients").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Boundary validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_client_with_invalid_email_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/clients",
        serde_json::json!({"name": "Acme", "email": "not-an-email"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/clients").await).await;
    assert!(json.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_padded_email_is_rejected_not_stored(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/clients",
        serde_json::json!({"name": "Acme", "email": "  a@acme.sk  "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let created = create_client(&pool, "Acme").await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/clients/{id}"),
        serde_json::json!({"name": "Acme", "email": " a@acme.sk"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/clients/{id}")).await).await;
    assert_eq!(json["email"], "office@example.sk");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_client_with_blank_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/clients",
        serde_json::json!({"name": "   ", "email": "a@acme.sk"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_client_missing_email_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/clients", serde_json::json!({"name": "Acme"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_malformed_json_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw(app, "/api/clients", "{\"name\": ").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
