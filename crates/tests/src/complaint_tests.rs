use serde_json::Value;

use hostelhub_store::models::{Complaint, ComplaintStatus, Notification, NotificationType, Role};

use crate::fixtures::test_app::TestApp;

async fn file_complaint(app: &TestApp, student_id: &str) -> String {
    let resp = app
        .role_post("/api/complaint", Role::Student)
        .json(&serde_json::json!({
            "student_id": student_id,
            "category": "plumbing",
            "description": "Leaking tap in the washroom",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["success"], true);
    json["complaint"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn filing_notifies_the_wardens() {
    let app = TestApp::spawn().await;
    let student = app.seed_student("Rohan Gupta", "rohan@hostelhub.test").await;

    file_complaint(&app, &student.id).await;

    let notifications = app.store.all::<Notification>();
    assert_eq!(notifications.len(), 1);
    assert!(notifications[0].target_roles.contains(&Role::Warden));
    assert!(notifications[0].target_student_id.is_none());
}

#[tokio::test]
async fn resolution_notifies_the_student() {
    let app = TestApp::spawn().await;
    let student = app.seed_student("Rohan Gupta", "rohan@hostelhub.test").await;
    let complaint_id = file_complaint(&app, &student.id).await;

    let resp = app
        .role_put(&format!("/api/complaint/{complaint_id}/status"), Role::Warden)
        .json(&serde_json::json!({ "status": "in_progress" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let resp = app
        .role_put(&format!("/api/complaint/{complaint_id}/status"), Role::Warden)
        .json(&serde_json::json!({ "status": "resolved", "notes": "Tap replaced" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let complaint = app.store.get::<Complaint>(&complaint_id).unwrap();
    assert_eq!(complaint.status, ComplaintStatus::Resolved);
    assert_eq!(complaint.resolution_notes.as_deref(), Some("Tap replaced"));
    assert!(complaint.resolved_at.is_some());

    let student_notifications: Vec<Notification> = app
        .store
        .all::<Notification>()
        .into_iter()
        .filter(|n| n.target_student_id.as_deref() == Some(student.id.as_str()))
        .collect();
    assert_eq!(student_notifications.len(), 1);
    assert_eq!(
        student_notifications[0].notification_type,
        NotificationType::ComplaintUpdate
    );
}

#[tokio::test]
async fn resolved_complaint_is_terminal() {
    let app = TestApp::spawn().await;
    let student = app.seed_student("Rohan Gupta", "rohan@hostelhub.test").await;
    let complaint_id = file_complaint(&app, &student.id).await;

    app.role_put(&format!("/api/complaint/{complaint_id}/status"), Role::Warden)
        .json(&serde_json::json!({ "status": "resolved", "notes": "done" }))
        .send()
        .await
        .unwrap();

    let resp = app
        .role_put(&format!("/api/complaint/{complaint_id}/status"), Role::Warden)
        .json(&serde_json::json!({ "status": "in_progress" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 409);
    let complaint = app.store.get::<Complaint>(&complaint_id).unwrap();
    assert_eq!(complaint.status, ComplaintStatus::Resolved);
}

#[tokio::test]
async fn students_cannot_move_a_complaint() {
    let app = TestApp::spawn().await;
    let student = app.seed_student("Rohan Gupta", "rohan@hostelhub.test").await;
    let complaint_id = file_complaint(&app, &student.id).await;

    let resp = app
        .role_put(&format!("/api/complaint/{complaint_id}/status"), Role::Student)
        .json(&serde_json::json!({ "status": "resolved" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 422);
}

#[tokio::test]
async fn list_filters_by_status_and_student() {
    let app = TestApp::spawn().await;
    let first = app.seed_student("Rohan Gupta", "rohan@hostelhub.test").await;
    let second = app.seed_student("Isha Reddy", "isha@hostelhub.test").await;
    let complaint_id = file_complaint(&app, &first.id).await;
    file_complaint(&app, &second.id).await;

    app.role_put(&format!("/api/complaint/{complaint_id}/status"), Role::Warden)
        .json(&serde_json::json!({ "status": "resolved", "notes": "done" }))
        .send()
        .await
        .unwrap();

    let resp = app
        .role_get("/api/complaint?status=open", Role::Warden)
        .send()
        .await
        .unwrap();
    let open: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(open.len(), 1);

    let resp = app
        .role_get(
            &format!("/api/complaint?student_id={}", first.id),
            Role::Student,
        )
        .send()
        .await
        .unwrap();
    let own: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(own.len(), 1);
    assert_eq!(own[0]["status"], "resolved");
}

#[tokio::test]
async fn empty_description_is_rejected() {
    let app = TestApp::spawn().await;
    let student = app.seed_student("Rohan Gupta", "rohan@hostelhub.test").await;

    let resp = app
        .role_post("/api/complaint", Role::Student)
        .json(&serde_json::json!({
            "student_id": student.id,
            "category": "other",
            "description": "   ",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 422);
    assert!(app.store.all::<Complaint>().is_empty());
}
