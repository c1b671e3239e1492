//! Session, catalog and statistics API tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{read_json, spawn_app};

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app();

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn endpoints_require_a_session() {
    let app = spawn_app();

    for path in ["/equipment", "/requests", "/users", "/stats", "/auth/me"] {
        let response = app.get(path).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "GET {}", path);
    }
}

#[tokio::test]
async fn login_synthesizes_unknown_users() {
    let app = spawn_app();

    let user = app.login("new.teacher@school.edu", "staff").await;
    assert_eq!(user["name"], "new.teacher");
    assert_eq!(user["role"], "staff");
    assert_eq!(user["email"], "new.teacher@school.edu");
    assert!(user["school_id"].as_str().unwrap().starts_with("STF-"));

    let me = read_json(app.get("/auth/me").await).await;
    assert_eq!(me["id"], user["id"]);

    // The durable slot mirrors the session
    let cached = std::fs::read_to_string(&app.state.config.session.cache_path)
        .expect("Session cache slot missing");
    assert!(cached.contains("new.teacher@school.edu"));
}

#[tokio::test]
async fn login_reuses_existing_users() {
    let app = spawn_app();

    let user = app.login("emma.thompson@school.edu", "student").await;
    assert_eq!(user["id"], 1);
    assert_eq!(user["name"], "Emma Thompson");
    assert_eq!(user["school_id"], "STU-2024-001");
}

#[tokio::test]
async fn logout_is_idempotent() {
    let app = spawn_app();
    app.login("emma.thompson@school.edu", "student").await;

    let first = app.post("/auth/logout", json!({})).await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    let second = app.post("/auth/logout", json!({})).await;
    assert_eq!(second.status(), StatusCode::NO_CONTENT);

    let me = app.get("/auth/me").await;
    assert_eq!(me.status(), StatusCode::UNAUTHORIZED);
    assert!(!app.state.config.session.cache_path.exists());
}

#[tokio::test]
async fn session_restores_from_the_cache_slot() {
    let app = spawn_app();
    app.login("sarah.williams@school.edu", "staff").await;

    // A fresh service stack over the same slot picks the session back up
    let repository = gearloan_server::repository::Repository::with_seed_data();
    let services =
        gearloan_server::services::Services::new(repository, &app.state.config);
    services.sessions.restore().await;

    let restored = services.sessions.current().await.expect("No session restored");
    assert_eq!(restored.email, "sarah.williams@school.edu");
}

#[tokio::test]
async fn catalog_lists_the_seed_equipment() {
    let app = spawn_app();
    app.login("emma.thompson@school.edu", "student").await;

    let body = read_json(app.get("/equipment").await).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["name"], "Digital Camera Canon EOS");
    assert_eq!(items[0]["category"], "Camera");
    assert_eq!(items[0]["quantity"], 5);
    assert_eq!(items[0]["available"], 3);
}

#[tokio::test]
async fn students_may_not_manage_the_catalog() {
    let app = spawn_app();
    app.login("emma.thompson@school.edu", "student").await;

    let create = app
        .post(
            "/equipment",
            json!({
                "name": "Telescope",
                "category": "Lab",
                "condition": "Excellent",
                "quantity": 2
            }),
        )
        .await;
    assert_eq!(create.status(), StatusCode::FORBIDDEN);

    let delete = app.delete("/equipment/6").await;
    assert_eq!(delete.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn staff_create_and_delete_equipment() {
    let app = spawn_app();
    app.login("sarah.williams@school.edu", "staff").await;

    let response = app
        .post(
            "/equipment",
            json!({
                "name": "Telescope",
                "category": "Lab",
                "condition": "Excellent",
                "quantity": 2
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = read_json(response).await;
    assert_eq!(created["available"], 2);

    let id = created["id"].as_i64().unwrap();
    let delete = app.delete(&format!("/equipment/{}", id)).await;
    assert_eq!(delete.status(), StatusCode::NO_CONTENT);

    let get = app.get(&format!("/equipment/{}", id)).await;
    assert_eq!(get.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn equipment_with_active_requests_cannot_be_deleted() {
    let app = spawn_app();
    app.login("patricia.johnson@school.edu", "admin").await;

    // The seeded camera has an approved request against it
    let response = app.delete("/equipment/1").await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = read_json(response).await;
    assert_eq!(body["error"], "EquipmentHasActiveRequests");
}

#[tokio::test]
async fn quantity_updates_keep_loaned_units_out() {
    let app = spawn_app();
    app.login("patricia.johnson@school.edu", "admin").await;

    // Camera: 5 owned, 3 available, so 2 units are out
    let updated = read_json(app.put("/equipment/1", json!({ "quantity": 7 })).await).await;
    assert_eq!(updated["quantity"], 7);
    assert_eq!(updated["available"], 5);

    // Shrinking below the loaned count clamps available at zero
    let updated = read_json(app.put("/equipment/1", json!({ "quantity": 1 })).await).await;
    assert_eq!(updated["quantity"], 1);
    assert_eq!(updated["available"], 0);
}

#[tokio::test]
async fn stats_reflect_the_catalog_and_requests() {
    let app = spawn_app();
    app.login("patricia.johnson@school.edu", "admin").await;

    let body = read_json(app.get("/stats").await).await;
    assert_eq!(body["equipment_items"], 10);
    assert_eq!(body["total_units"], 75);
    assert_eq!(body["available_units"], 54);
    assert_eq!(body["users"], 6);
    assert_eq!(body["requests"]["pending"], 1);
    assert_eq!(body["requests"]["waitlist"], 1);
    assert_eq!(body["requests"]["returned"], 1);
    assert_eq!(body["requests"]["approved"], 1);
    // Both seeded issued loans are past their end dates by now
    assert_eq!(body["requests"]["overdue"], 2);
    assert_eq!(body["requests"]["issued"], 0);
}

#[tokio::test]
async fn user_request_listing_checks_the_user_exists() {
    let app = spawn_app();
    app.login("sarah.williams@school.edu", "staff").await;

    let response = app.get("/users/999/requests").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = read_json(app.get("/users/1/requests").await).await;
    let requests = body.as_array().unwrap();
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|r| r["user_id"] == 1));
}
