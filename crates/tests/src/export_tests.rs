use serde_json::Value;

use hostelhub_store::models::{LeaveStatus, Role};

use crate::fixtures::test_app::TestApp;

async fn export(app: &TestApp, format: &str, status: &str) -> (u16, Value) {
    let resp = app
        .role_post("/api/leave/export", Role::Admin)
        .json(&serde_json::json!({ "format": format, "status": status }))
        .send()
        .await
        .unwrap();
    let status_code = resp.status().as_u16();
    let json: Value = resp.json().await.unwrap();
    (status_code, json)
}

#[tokio::test]
async fn json_export_round_trips_the_full_collection() {
    let app = TestApp::spawn().await;
    app.seed_leave_direct("L1", "S1", "A", LeaveStatus::Pending);
    app.seed_leave_direct("L2", "S2", "B", LeaveStatus::Approved);
    app.seed_leave_direct("L3", "S3", "C", LeaveStatus::Rejected);

    let (status, json) = export(&app, "json", "all").await;

    assert_eq!(status, 200);
    assert_eq!(json["success"], true);
    assert_eq!(json["format"], "json");
    let envelope = &json["export"];
    assert_eq!(envelope["total_applications"], 3);
    assert!(envelope["export_date"].is_string());
    assert_eq!(envelope["applications"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn status_filter_keeps_only_matching_rows() {
    let app = TestApp::spawn().await;
    app.seed_leave_direct("L1", "S1", "A", LeaveStatus::Pending);
    app.seed_leave_direct("L2", "S2", "B", LeaveStatus::Approved);
    app.seed_leave_direct("L3", "S3", "C", LeaveStatus::Approved);

    let (status, json) = export(&app, "json", "approved").await;

    assert_eq!(status, 200);
    let applications = json["export"]["applications"].as_array().unwrap();
    assert_eq!(applications.len(), 2);
    for row in applications {
        assert_eq!(row["status"], "approved");
    }
}

#[tokio::test]
async fn optional_fields_flatten_to_empty_strings() {
    let app = TestApp::spawn().await;
    app.seed_leave_direct("L1", "S1", "A", LeaveStatus::Pending);

    let (_, json) = export(&app, "json", "all").await;

    let row = &json["export"]["applications"][0];
    assert_eq!(row["joint_warden_remarks"], "");
    assert_eq!(row["warden_remarks"], "");
    assert_eq!(row["reviewed_at"], "");
    assert_eq!(row["reviewed_by"], "");
}

#[tokio::test]
async fn csv_export_carries_header_and_rows() {
    let app = TestApp::spawn().await;
    app.seed_leave_direct("L1", "S1", "A", LeaveStatus::Pending);
    app.seed_leave_direct("L2", "S2", "B", LeaveStatus::Approved);

    let (status, json) = export(&app, "csv", "all").await;

    assert_eq!(status, 200);
    assert_eq!(json["format"], "csv");
    assert_eq!(json["content_type"], "text/csv");

    let content = json["content"].as_str().unwrap();
    let mut lines = content.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("id,student_id,student_name"));
    assert_eq!(lines.count(), 2);
}

#[tokio::test]
async fn csv_quotes_fields_containing_commas() {
    let app = TestApp::spawn().await;
    app.seed_leave_direct("L1", "S1", "A", LeaveStatus::Pending);
    app.store
        .update::<hostelhub_store::models::LeaveApplication>("L1", |l| {
            l.reason = "fever, cough and cold".to_string()
        })
        .unwrap();

    let (_, json) = export(&app, "csv", "all").await;

    let content = json["content"].as_str().unwrap();
    assert!(content.contains("\"fever, cough and cold\""));
    // The quoted comma must not add a column.
    let data_line = content.lines().nth(1).unwrap();
    assert!(data_line.contains("\"fever, cough and cold\""));
}

#[tokio::test]
async fn unknown_format_is_rejected() {
    let app = TestApp::spawn().await;

    let (status, json) = export(&app, "xlsx", "all").await;

    assert_eq!(status, 400);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn unknown_status_filter_is_rejected() {
    let app = TestApp::spawn().await;

    let (status, json) = export(&app, "json", "archived").await;

    assert_eq!(status, 400);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn students_cannot_export() {
    let app = TestApp::spawn().await;

    let resp = app
        .role_post("/api/leave/export", Role::Student)
        .json(&serde_json::json!({ "format": "json", "status": "all" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 403);
}
