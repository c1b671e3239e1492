//! Request lifecycle, conflict detection and fine tests

use axum::http::StatusCode;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use crate::common::{read_json, spawn_app, TestApp};

fn fine_of(body: &Value) -> Decimal {
    body["fine"].as_str().expect("fine missing").parse().expect("fine not a decimal")
}

async fn available(app: &TestApp, equipment_id: i32) -> u64 {
    let body = read_json(app.get(&format!("/equipment/{}", equipment_id)).await).await;
    body["available"].as_u64().unwrap()
}

#[tokio::test]
async fn creating_a_request_reserves_a_unit() {
    let app = spawn_app();
    app.login("emma.thompson@school.edu", "student").await;

    assert_eq!(available(&app, 1).await, 3);

    let response = app
        .post(
            "/requests",
            json!({
                "equipment_id": 1,
                "user_id": 1,
                "start_date": "2030-03-01",
                "end_date": "2030-03-05",
                "reason": "Yearbook photos",
                "pickup_location": "Equipment Room A"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let request = read_json(response).await;
    assert_eq!(request["status"], "Pending");
    assert!(request["request_date"].is_string());
    assert!(request["approved_by"].is_null());

    assert_eq!(available(&app, 1).await, 2);
}

#[tokio::test]
async fn invalid_date_ranges_are_rejected() {
    let app = spawn_app();
    app.login("emma.thompson@school.edu", "student").await;

    let response = app
        .post(
            "/requests",
            json!({
                "equipment_id": 1,
                "user_id": 1,
                "start_date": "2030-03-05",
                "end_date": "2030-03-01",
                "reason": "Yearbook photos",
                "pickup_location": "Equipment Room A"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(available(&app, 1).await, 3);
}

#[tokio::test]
async fn exhausted_inventory_routes_to_waitlist_behind_a_conflict() {
    let app = spawn_app();
    app.login("michael.chen@school.edu", "student").await;

    // Piano: one unit left, one issued loan over 2025-10-15..22
    let response = app
        .post(
            "/requests",
            json!({
                "equipment_id": 8,
                "user_id": 2,
                "start_date": "2025-10-18",
                "end_date": "2025-10-30",
                "reason": "Jazz band rehearsal",
                "pickup_location": "Music Room"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(read_json(response).await["status"], "Pending");
    assert_eq!(available(&app, 8).await, 0);

    // Pool is empty and the range collides with the issued loan: waitlist,
    // holding no unit
    let response = app
        .post(
            "/requests",
            json!({
                "equipment_id": 8,
                "user_id": 2,
                "start_date": "2025-10-20",
                "end_date": "2025-10-25",
                "reason": "Choir accompaniment",
                "pickup_location": "Music Room"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(read_json(response).await["status"], "Waitlist");
    assert_eq!(available(&app, 8).await, 0);

    // Pool is empty with nothing to wait behind: refused outright
    let response = app
        .post(
            "/requests",
            json!({
                "equipment_id": 8,
                "user_id": 2,
                "start_date": "2031-01-01",
                "end_date": "2031-01-05",
                "reason": "Recording session",
                "pickup_location": "Music Room"
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = read_json(response).await;
    assert_eq!(body["error"], "InsufficientInventory");
    assert_eq!(available(&app, 8).await, 0);
}

#[tokio::test]
async fn conflict_check_uses_inclusive_boundaries() {
    let app = spawn_app();
    app.login("emma.thompson@school.edu", "student").await;

    // Camera has an approved booking over 2025-10-25..2025-11-01
    let truthy = [
        ("2025-11-01", "2025-11-05"), // shared boundary day
        ("2025-10-20", "2025-10-25"), // shared boundary day
        ("2025-10-26", "2025-10-28"), // contained
        ("2025-10-27", "2025-10-27"), // zero-length inside
    ];
    for (start, end) in truthy {
        let body = read_json(
            app.get(&format!("/equipment/1/conflicts?start_date={}&end_date={}", start, end))
                .await,
        )
        .await;
        assert_eq!(body["conflict"], true, "{}..{}", start, end);
    }

    let falsy = [("2025-10-20", "2025-10-24"), ("2025-11-02", "2025-11-05")];
    for (start, end) in falsy {
        let body = read_json(
            app.get(&format!("/equipment/1/conflicts?start_date={}&end_date={}", start, end))
                .await,
        )
        .await;
        assert_eq!(body["conflict"], false, "{}..{}", start, end);
    }

    // Pending and returned requests never block bookings
    let body = read_json(
        app.get("/equipment/2/conflicts?start_date=2025-10-28&end_date=2025-11-05")
            .await,
    )
    .await;
    assert_eq!(body["conflict"], false);
}

#[tokio::test]
async fn students_cannot_review_requests() {
    let app = spawn_app();
    app.login("emma.thompson@school.edu", "student").await;

    for action in ["approve", "reject", "issue"] {
        let response = app
            .post("/requests/2/status", json!({ "action": action }))
            .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN, "{}", action);
        let body = read_json(response).await;
        assert_eq!(body["error"], "NotAuthorized");
    }

    let response = app
        .post("/requests/4/return", json!({ "condition": "Good" }))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn full_lifecycle_from_request_to_return() {
    let app = spawn_app();
    app.login("emma.thompson@school.edu", "student").await;

    let request = read_json(
        app.post(
            "/requests",
            json!({
                "equipment_id": 3,
                "user_id": 1,
                "start_date": "2030-05-01",
                "end_date": "2030-05-03",
                "reason": "Intramural tournament",
                "pickup_location": "Gym Storage"
            }),
        )
        .await,
    )
    .await;
    let id = request["id"].as_i64().unwrap();
    assert_eq!(available(&app, 3).await, 7);

    let staff = app.login("david.martinez@school.edu", "staff").await;

    let approved = read_json(
        app.post(
            &format!("/requests/{}/status", id),
            json!({ "action": "approve", "notes": "Have fun" }),
        )
        .await,
    )
    .await;
    assert_eq!(approved["status"], "Approved");
    assert_eq!(approved["approved_by"], staff["id"]);
    assert_eq!(approved["notes"], "Have fun");
    // Approval holds the reservation, it does not take another unit
    assert_eq!(available(&app, 3).await, 7);

    let issued = read_json(
        app.post(&format!("/requests/{}/status", id), json!({ "action": "issue" }))
            .await,
    )
    .await;
    assert_eq!(issued["status"], "Issued");
    assert_eq!(available(&app, 3).await, 7);

    let response = app
        .post(
            &format!("/requests/{}/return", id),
            json!({ "condition": "Fair", "notes": "Scuffed ball" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let returned = read_json(response).await;
    assert_eq!(returned["status"], "Returned");
    assert_eq!(returned["return_condition"], "Fair");
    assert!(returned["return_date"].is_string());
    // Due date is in the future, so the computed default is zero
    assert_eq!(fine_of(&returned), dec!(0));
    assert_eq!(available(&app, 3).await, 8);
}

#[tokio::test]
async fn terminal_states_reject_further_transitions() {
    let app = spawn_app();
    app.login("david.martinez@school.edu", "staff").await;

    // Request 3 is returned
    for action in ["approve", "reject", "issue"] {
        let response = app
            .post("/requests/3/status", json!({ "action": action }))
            .await;
        assert_eq!(response.status(), StatusCode::CONFLICT, "{}", action);
        let body = read_json(response).await;
        assert_eq!(body["error"], "InvalidTransition");
    }

    let response = app
        .post("/requests/3/return", json!({ "condition": "Good" }))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn approval_must_precede_issue() {
    let app = spawn_app();
    app.login("david.martinez@school.edu", "staff").await;

    // Request 2 is pending; issuing it outright skips approval
    let response = app.post("/requests/2/status", json!({ "action": "issue" })).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Returning it is just as invalid
    let response = app
        .post("/requests/2/return", json!({ "condition": "Good" }))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn rejection_is_terminal_and_keeps_the_reservation() {
    let app = spawn_app();
    app.login("david.martinez@school.edu", "staff").await;

    assert_eq!(available(&app, 2).await, 7);

    let rejected = read_json(
        app.post(
            "/requests/2/status",
            json!({ "action": "reject", "notes": "Lab is closed that week" }),
        )
        .await,
    )
    .await;
    assert_eq!(rejected["status"], "Rejected");
    // The unit reserved at creation is not released on rejection
    assert_eq!(available(&app, 2).await, 7);

    let response = app.post("/requests/2/status", json!({ "action": "approve" })).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn overdue_is_a_derived_view_over_issued() {
    let app = spawn_app();
    app.login("sarah.williams@school.edu", "staff").await;

    // Request 4 is stored as Issued with an end date long past
    let request = read_json(app.get("/requests/4").await).await;
    assert_eq!(request["status"], "Overdue");
}

#[tokio::test]
async fn overdue_returns_compute_a_fine_by_default() {
    let app = spawn_app();
    app.login("sarah.williams@school.edu", "staff").await;

    let returned = read_json(
        app.post("/requests/4/return", json!({ "condition": "Good" })).await,
    )
    .await;
    assert_eq!(returned["status"], "Returned");
    // Due 2025-10-22, so by now the default late fee is well past zero
    assert!(fine_of(&returned) > dec!(0));
    assert_eq!(available(&app, 8).await, 2);
}

#[tokio::test]
async fn staff_overrides_win_over_the_computed_fine() {
    let app = spawn_app();
    app.login("sarah.williams@school.edu", "staff").await;

    let returned = read_json(
        app.post(
            "/requests/4/return",
            json!({ "condition": "Damaged", "notes": "Broken key", "fine": "12.00" }),
        )
        .await,
    )
    .await;
    assert_eq!(fine_of(&returned), dec!(12.00));
    assert_eq!(returned["return_condition"], "Damaged");
}

#[tokio::test]
async fn negative_fine_overrides_are_rejected() {
    let app = spawn_app();
    app.login("sarah.williams@school.edu", "staff").await;

    let response = app
        .post(
            "/requests/4/return",
            json!({ "condition": "Good", "fine": "-1.00" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn waitlist_promotion_consumes_a_unit_when_one_is_free() {
    let app = spawn_app();
    app.login("sarah.williams@school.edu", "staff").await;

    // Request 6 sits on the waitlist for the video camera (2 available)
    let approved = read_json(
        app.post("/requests/6/status", json!({ "action": "approve" })).await,
    )
    .await;
    assert_eq!(approved["status"], "Approved");
    assert_eq!(available(&app, 9).await, 1);
}

#[tokio::test]
async fn waitlist_promotion_fails_without_inventory() {
    let app = spawn_app();
    app.login("michael.chen@school.edu", "student").await;

    // Drain the video camera pool
    for _ in 0..2 {
        let response = app
            .post(
                "/requests",
                json!({
                    "equipment_id": 9,
                    "user_id": 2,
                    "start_date": "2030-06-01",
                    "end_date": "2030-06-03",
                    "reason": "Film club",
                    "pickup_location": "Equipment Room A"
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }
    assert_eq!(available(&app, 9).await, 0);

    app.login("sarah.williams@school.edu", "staff").await;
    let response = app.post("/requests/6/status", json!({ "action": "approve" })).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = read_json(response).await;
    assert_eq!(body["error"], "InsufficientInventory");

    // Rejecting it releases nothing since nothing was held
    let rejected = read_json(
        app.post("/requests/6/status", json!({ "action": "reject" })).await,
    )
    .await;
    assert_eq!(rejected["status"], "Rejected");
    assert_eq!(available(&app, 9).await, 0);
}

#[tokio::test]
async fn annotation_leaves_the_state_alone() {
    let app = spawn_app();
    let staff = app.login("sarah.williams@school.edu", "staff").await;

    let annotated = read_json(
        app.post(
            "/requests/2/status",
            json!({ "action": "annotate", "notes": "Waiting on lab schedule" }),
        )
        .await,
    )
    .await;
    assert_eq!(annotated["status"], "Pending");
    assert_eq!(annotated["notes"], "Waiting on lab schedule");
    assert_eq!(annotated["approved_by"], staff["id"]);
}
