mod common;

use common::TestApp;
use demandflow_server::db::repository::{demand, hotel_settings};
use demandflow_server::seed;
use http::StatusCode;
use serde_json::json;
use shared::ErrorCode;

fn assert_staff_required(res: &common::TestResponse, notice: &str, redirect: &str) {
    assert_eq!(res.status, StatusCode::FORBIDDEN, "{}", res.text());
    let body = res.json();
    assert_eq!(body["code"], ErrorCode::StaffRequired.code());
    assert_eq!(body["message"], notice);
    assert_eq!(body["details"]["redirect"], redirect);
}

#[tokio::test]
async fn test_login_required_for_pages() {
    let app = TestApp::new().await;

    for uri in ["/", "/completed/", "/settings/"] {
        let res = app.get(uri, None).await;
        assert_eq!(res.status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(res.json()["code"], ErrorCode::NotAuthenticated.code());
    }

    let res = app.get("/", Some("not-a-jwt")).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.json()["code"], ErrorCode::TokenInvalid.code());

    assert_eq!(app.get("/health", None).await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_and_logout() {
    let app = TestApp::new().await;

    let res = app
        .post("/login/", None, json!({"username": "admin", "password": "admin12345"}))
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.text());
    let body = res.json();
    assert_eq!(body["data"]["user"]["username"], "admin");
    assert_eq!(body["data"]["user"]["is_staff"], true);
    let token = body["data"]["token"].as_str().unwrap().to_string();

    assert_eq!(app.get("/", Some(&token)).await.status, StatusCode::OK);

    let res = app.post_empty("/logout/", Some(&token)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["message"], "Logged out.");
}

#[tokio::test]
async fn test_bad_credentials_look_the_same() {
    let app = TestApp::new().await;

    let wrong_password = app
        .post("/login/", None, json!({"username": "admin", "password": "nope"}))
        .await;
    let unknown_user = app
        .post("/login/", None, json!({"username": "ghost", "password": "nope"}))
        .await;

    for res in [wrong_password, unknown_user] {
        assert_eq!(res.status, StatusCode::UNAUTHORIZED);
        assert_eq!(res.json()["code"], ErrorCode::InvalidCredentials.code());
    }
}

#[tokio::test]
async fn test_viewer_can_read_but_not_act() {
    let app = TestApp::new().await;
    let viewer = app.viewer().await;

    assert_eq!(app.get("/", Some(&viewer)).await.status, StatusCode::OK);
    assert_eq!(app.get("/completed/", Some(&viewer)).await.status, StatusCode::OK);

    let res = app
        .post(
            "/add/",
            Some(&viewer),
            json!({"demand_type": "Food", "food_item": "Pizza", "quantity": 2, "room_or_table": "Table 3"}),
        )
        .await;
    assert_staff_required(&res, "Only staff can add demands.", "/");
    assert!(demand::find_open(&app.state.pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_viewer_cannot_transition_demands() {
    let app = TestApp::new().await;
    let viewer = app.viewer().await;
    let id = app
        .create_demand(json!({"demand_type": "Cleaning", "description": "Spill", "room_or_table": "Table 8"}))
        .await;

    for path in ["in-progress", "complete"] {
        let res = app.post_empty(&format!("/{id}/{path}/"), Some(&viewer)).await;
        assert_staff_required(&res, "Only staff can update demand status.", "/");
    }

    let stored = demand::find_by_id(&app.state.pool, id).await.unwrap().unwrap();
    assert_eq!(stored.status.as_str(), "Pending");
    assert_eq!(stored.fulfilled_by, None);
}

#[tokio::test]
async fn test_viewer_cannot_touch_settings_export_or_clear() {
    let app = TestApp::new().await;
    let viewer = app.viewer().await;

    let res = app.get("/settings/", Some(&viewer)).await;
    assert_staff_required(&res, "Settings are for staff only.", "/");

    let res = app
        .post("/settings/", Some(&viewer), json!({"action": "update_counts", "num_tables": 1}))
        .await;
    assert_staff_required(&res, "Settings are for staff only.", "/");

    let res = app.get("/completed/export/", Some(&viewer)).await;
    assert_staff_required(&res, "Only staff can export data.", "/completed/");

    let res = app.get("/completed/clear/", Some(&viewer)).await;
    assert_staff_required(&res, "Only staff can clear data.", "/completed/");

    let res = app.post_empty("/completed/clear/", Some(&viewer)).await;
    assert_staff_required(&res, "Only staff can clear data.", "/completed/");

    let admin = app.admin().await;
    let page = app.get("/settings/", Some(&admin)).await.json();
    assert_eq!(page["data"]["settings"]["num_tables"], 10);
}

#[tokio::test]
async fn test_debug_endpoints_disabled_by_default() {
    let app = TestApp::new().await;

    for uri in ["/debug/reset-viewer/", "/debug/whoami/", "/debug/check-viewer/"] {
        let res = app.get(uri, None).await;
        assert_eq!(res.status, StatusCode::FORBIDDEN, "{uri}");
        assert_eq!(res.json()["message"], "Disabled");
    }
}

#[tokio::test]
async fn test_debug_endpoints_when_enabled() {
    let app = TestApp::with_debug().await;
    let admin = app.admin().await;

    assert_eq!(app.get("/debug/whoami/", None).await.text(), "anonymous");
    assert_eq!(
        app.get("/debug/whoami/", Some(&admin)).await.text(),
        "authenticated as: admin"
    );

    let res = app.get("/debug/check-viewer/", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.text(),
        "viewer exists; is_active=true; is_staff=false\nauthenticate(viewer, provided pwd) -> OK"
    );

    let res = app.get("/debug/check-viewer/?pwd=wrong", None).await;
    assert!(res.text().ends_with("-> FAILED"));

    let res = app.get("/debug/reset-viewer/", None).await;
    assert_eq!(res.text(), "viewer updated with password viewer12345");
}

#[tokio::test]
async fn test_debug_viewer_lifecycle_on_empty_database() {
    let app = TestApp::unseeded_debug().await;

    let res = app.get("/debug/check-viewer/", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json()["message"], "viewer does not exist");

    let res = app.get("/debug/reset-viewer/", None).await;
    assert_eq!(res.text(), "viewer created with password viewer12345");

    let res = app
        .post("/login/", None, json!({"username": "viewer", "password": "viewer12345"}))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["data"]["user"]["is_staff"], false);
}

async fn login(app: &TestApp, username: &str, password: &str) -> String {
    let res = app
        .post("/login/", None, json!({"username": username, "password": password}))
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.text());
    res.json()["data"]["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_demoted_staff_loses_access_with_existing_token() {
    let app = TestApp::new().await;
    seed::ensure_account(&app.state.pool, "viewer", "viewer12345", true)
        .await
        .unwrap();
    let token = login(&app, "viewer", "viewer12345").await;

    let res = app
        .post("/settings/", Some(&token), json!({"action": "update_counts", "num_tables": 8}))
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.text());

    seed::ensure_account(&app.state.pool, "viewer", "viewer12345", false)
        .await
        .unwrap();

    let res = app
        .post("/settings/", Some(&token), json!({"action": "update_counts", "num_tables": 1}))
        .await;
    assert_staff_required(&res, "Settings are for staff only.", "/");

    let res = app.post_empty("/completed/clear/", Some(&token)).await;
    assert_staff_required(&res, "Only staff can clear data.", "/completed/");

    let res = app.get("/completed/export/", Some(&token)).await;
    assert_staff_required(&res, "Only staff can export data.", "/completed/");

    let settings = hotel_settings::get(&app.state.pool).await.unwrap();
    assert_eq!(settings.num_tables, 8);
}

#[tokio::test]
async fn test_disabled_account_is_locked_out() {
    let app = TestApp::new().await;
    let token = app.admin().await;

    sqlx::query("UPDATE users SET is_active = 0 WHERE username = 'admin'")
        .execute(&app.state.pool)
        .await
        .unwrap();

    let res = app.get("/", Some(&token)).await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
    assert_eq!(res.json()["code"], ErrorCode::AccountDisabled.code());

    let res = app
        .post("/login/", None, json!({"username": "admin", "password": "admin12345"}))
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.json()["code"], ErrorCode::InvalidCredentials.code());
}

#[tokio::test]
async fn test_deleted_account_token_is_rejected() {
    let app = TestApp::new().await;
    seed::ensure_account(&app.state.pool, "nightshift", "nightshift123", true)
        .await
        .unwrap();
    let token = app.token_for("nightshift").await;

    sqlx::query("DELETE FROM users WHERE username = 'nightshift'")
        .execute(&app.state.pool)
        .await
        .unwrap();

    let res = app
        .post(
            "/add/",
            Some(&token),
            json!({"demand_type": "Cleaning", "description": "Towels", "room_or_table": "Room 101"}),
        )
        .await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.json()["code"], ErrorCode::TokenInvalid.code());
}
