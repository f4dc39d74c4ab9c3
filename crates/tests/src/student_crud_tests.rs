use serde_json::Value;

use hostelhub_store::models::Role;

use crate::fixtures::test_app::TestApp;

#[tokio::test]
async fn create_get_update_delete_round_trip() {
    let app = TestApp::spawn().await;
    let student = app.seed_student("Aarav Sharma", "aarav@hostelhub.test").await;

    let resp = app
        .role_get(&format!("/api/student/{}", student.id), Role::Warden)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["name"], "Aarav Sharma");
    assert!(json["room_number"].is_null());

    let resp = app
        .role_put(&format!("/api/student/{}", student.id), Role::Admin)
        .json(&serde_json::json!({ "phone": "9876543210" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["phone"], "9876543210");
    assert_eq!(json["name"], "Aarav Sharma");

    let resp = app
        .role_delete(&format!("/api/student/{}", student.id), Role::Admin)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let resp = app
        .role_get(&format!("/api/student/{}", student.id), Role::Warden)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn invalid_email_is_rejected() {
    let app = TestApp::spawn().await;

    let resp = app
        .role_post("/api/student", Role::Admin)
        .json(&serde_json::json!({
            "name": "Aarav Sharma",
            "email": "not-an-email",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 422);
}

#[tokio::test]
async fn students_cannot_manage_the_roster() {
    let app = TestApp::spawn().await;

    let resp = app
        .role_post("/api/student", Role::Student)
        .json(&serde_json::json!({
            "name": "Self Service",
            "email": "self@hostelhub.test",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 403);

    let resp = app.role_get("/api/student", Role::Student).send().await.unwrap();
    assert_eq!(resp.status().as_u16(), 403);
}

#[tokio::test]
async fn missing_role_header_is_unauthorized() {
    let app = TestApp::spawn().await;

    let resp = app
        .client
        .get(app.url("/api/student"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 401);

    let resp = app
        .client
        .get(app.url("/api/student"))
        .header("x-user-role", "superuser")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 401);
}
