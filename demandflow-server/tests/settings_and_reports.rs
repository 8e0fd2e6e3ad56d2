mod common;

use common::TestApp;
use demandflow_server::db::repository::demand;
use demandflow_server::reports::XLSX_CONTENT_TYPE;
use http::{StatusCode, header};
use serde_json::{Value, json};
use shared::ErrorCode;

fn names(list: &Value) -> Vec<String> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_table_count_change_regenerates_locations() {
    let app = TestApp::new().await;
    let admin = app.admin().await;

    let res = app
        .post("/settings/", Some(&admin), json!({"action": "update_counts", "num_tables": 5}))
        .await;
    assert_eq!(res.status, StatusCode::OK, "{}", res.text());
    let body = res.json();
    assert_eq!(body["message"], "Counts updated.");
    assert_eq!(body["data"]["settings"]["num_tables"], 5);
    assert_eq!(body["data"]["settings"]["num_rooms"], 10);

    let dashboard = app.get("/", Some(&admin)).await.json();
    let locations: Vec<String> = dashboard["data"]["form"]["locations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l.as_str().unwrap().to_string())
        .collect();
    let expected: Vec<String> = (1..=5)
        .map(|i| format!("Table {i}"))
        .chain((101..=110).map(|i| format!("Room {i}")))
        .collect();
    assert_eq!(locations, expected);

    let res = app
        .post(
            "/add/",
            Some(&admin),
            json!({"demand_type": "Food", "food_item": "Juice", "room_or_table": "Table 6"}),
        )
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.json()["details"]["errors"]["room_or_table"].is_string());
}

#[tokio::test]
async fn test_update_counts_validation() {
    let app = TestApp::new().await;
    let admin = app.admin().await;

    let res = app
        .post("/settings/", Some(&admin), json!({"action": "update_counts", "num_rooms": -3}))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);

    let res = app
        .post("/settings/", Some(&admin), json!({"action": "rename_hotel"}))
        .await;
    assert!(res.status.is_client_error());
}

#[tokio::test]
async fn test_roles_and_staff_management() {
    let app = TestApp::new().await;
    let admin = app.admin().await;

    let res = app
        .post("/settings/", Some(&admin), json!({"action": "add_role", "role_name": "   "}))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json()["message"], "Role name required.");

    for _ in 0..2 {
        let res = app
            .post("/settings/", Some(&admin), json!({"action": "add_role", "role_name": " Concierge "}))
            .await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.json()["message"], "Role added.");
    }
    let page = app.get("/settings/", Some(&admin)).await.json();
    let roles = names(&page["data"]["roles"]);
    assert_eq!(roles.iter().filter(|r| *r == "Concierge").count(), 1);
    assert_eq!(roles.len(), 6);

    let res = app
        .post("/settings/", Some(&admin), json!({"action": "add_staff", "staff_name": "Priya"}))
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.json()["message"], "Staff name and role required.");

    let res = app
        .post(
            "/settings/",
            Some(&admin),
            json!({"action": "add_staff", "staff_name": "Priya", "staff_role_id": 4242}),
        )
        .await;
    assert_eq!(res.json()["message"], "Invalid role.");
    assert_eq!(res.json()["code"], ErrorCode::StaffRoleNotFound.code());

    let concierge = app.role_id("Concierge").await;
    let res = app
        .post(
            "/settings/",
            Some(&admin),
            json!({"action": "add_staff", "staff_name": "Priya", "staff_role_id": concierge}),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["message"], "Staff added.");
    assert!(names(&res.json()["data"]["staff"]).contains(&"Priya".to_string()));

    let priya = app.staff_id("Priya").await;
    let res = app
        .post("/settings/", Some(&admin), json!({"action": "delete_staff", "staff_id": priya}))
        .await;
    assert_eq!(res.json()["message"], "Staff deleted.");
    assert!(!names(&res.json()["data"]["staff"]).contains(&"Priya".to_string()));

    let res = app
        .post("/settings/", Some(&admin), json!({"action": "delete_staff", "staff_id": priya}))
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = app
        .post("/settings/", Some(&admin), json!({"action": "delete_role", "role_id": 4242}))
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleting_role_cascades_to_members() {
    let app = TestApp::new().await;
    let admin = app.admin().await;
    let sita = app.staff_id("Sita").await;
    let id = app
        .create_demand(json!({
            "demand_type": "Cleaning",
            "description": "Wipe table",
            "room_or_table": "Table 1",
            "assigned_to": sita
        }))
        .await;

    let cleaner = app.role_id("Cleaner").await;
    let res = app
        .post("/settings/", Some(&admin), json!({"action": "delete_role", "role_id": cleaner}))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    let body = res.json();
    assert_eq!(body["message"], "Role deleted.");
    assert!(!names(&body["data"]["roles"]).contains(&"Cleaner".to_string()));
    assert!(!names(&body["data"]["staff"]).contains(&"Sita".to_string()));

    // The demand survives without an assignee
    let stored = demand::find_by_id(&app.state.pool, id).await.unwrap().unwrap();
    assert_eq!(stored.assigned_to, None);
}

#[tokio::test]
async fn test_export_completed_demands() {
    let app = TestApp::new().await;
    let admin = app.admin().await;

    let id = app
        .create_demand(json!({"demand_type": "Food", "food_item": "Salad", "quantity": 3, "room_or_table": "Room 102"}))
        .await;
    app.post_empty(&format!("/{id}/complete/"), Some(&admin)).await;

    let res = app.get("/completed/export/", Some(&admin)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.headers[header::CONTENT_TYPE], XLSX_CONTENT_TYPE);
    let disposition = res.headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment; filename=\"completed_tasks_"));
    assert!(disposition.ends_with(".xlsx\""));
    assert!(res.body.starts_with(b"PK"));
}

#[tokio::test]
async fn test_export_with_no_completed_demands() {
    let app = TestApp::new().await;
    let admin = app.admin().await;

    let res = app.get("/completed/export/", Some(&admin)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.starts_with(b"PK"));
}

#[tokio::test]
async fn test_clear_completed_requires_confirmation() {
    let app = TestApp::new().await;
    let admin = app.admin().await;

    let done = app
        .create_demand(json!({"demand_type": "Billing", "description": "Bill", "room_or_table": "Table 9"}))
        .await;
    let open = app
        .create_demand(json!({"demand_type": "Maintenance", "description": "Lamp", "room_or_table": "Room 109"}))
        .await;
    app.post_empty(&format!("/{done}/complete/"), Some(&admin)).await;

    let res = app.get("/completed/clear/", Some(&admin)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["data"]["count"], 1);
    assert_eq!(demand::count_completed(&app.state.pool).await.unwrap(), 1);

    let res = app.post_empty("/completed/clear/", Some(&admin)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json()["message"], "Successfully cleared 1 completed tasks.");

    let completed = app.get("/completed/", Some(&admin)).await.json();
    assert!(completed["data"].as_array().unwrap().is_empty());
    assert!(demand::find_by_id(&app.state.pool, open).await.unwrap().is_some());
}

#[tokio::test]
async fn test_completed_list_is_newest_first() {
    let app = TestApp::new().await;
    let admin = app.admin().await;

    let first = app
        .create_demand(json!({"demand_type": "Billing", "description": "A", "room_or_table": "Table 1"}))
        .await;
    let second = app
        .create_demand(json!({"demand_type": "Billing", "description": "B", "room_or_table": "Table 2"}))
        .await;
    app.post_empty(&format!("/{first}/complete/"), Some(&admin)).await;
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    app.post_empty(&format!("/{second}/complete/"), Some(&admin)).await;

    let completed = app.get("/completed/", Some(&admin)).await.json();
    let ids: Vec<i64> = completed["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![second, first]);
}
