use serde_json::Value;

use hostelhub_store::models::{Role, Room, Student};

use crate::fixtures::test_app::TestApp;

#[tokio::test]
async fn allocate_fills_both_sides_of_the_assignment() {
    let app = TestApp::spawn().await;
    let student = app.seed_student("Aarav Sharma", "aarav@hostelhub.test").await;
    let room_id = app.seed_room("101", 2).await;

    let resp = app
        .role_post(&format!("/api/room/{room_id}/allocate"), Role::Warden)
        .json(&serde_json::json!({ "student_id": student.id }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    let room: Value = resp.json().await.unwrap();
    assert_eq!(room["occupant_ids"].as_array().unwrap().len(), 1);

    let stored = app.store.get::<Student>(&student.id).unwrap();
    assert_eq!(stored.room_number.as_deref(), Some("101"));
}

#[tokio::test]
async fn allocation_refused_when_room_is_full() {
    let app = TestApp::spawn().await;
    let first = app.seed_student("Aarav Sharma", "aarav@hostelhub.test").await;
    let second = app.seed_student("Diya Patel", "diya@hostelhub.test").await;
    let room_id = app.seed_room("101", 1).await;

    let resp = app
        .role_post(&format!("/api/room/{room_id}/allocate"), Role::Warden)
        .json(&serde_json::json!({ "student_id": first.id }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let resp = app
        .role_post(&format!("/api/room/{room_id}/allocate"), Role::Warden)
        .json(&serde_json::json!({ "student_id": second.id }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);

    let stored = app.store.get::<Student>(&second.id).unwrap();
    assert!(stored.room_number.is_none());
}

#[tokio::test]
async fn student_cannot_hold_two_rooms() {
    let app = TestApp::spawn().await;
    let student = app.seed_student("Aarav Sharma", "aarav@hostelhub.test").await;
    let first_room = app.seed_room("101", 2).await;
    let second_room = app.seed_room("102", 2).await;

    let resp = app
        .role_post(&format!("/api/room/{first_room}/allocate"), Role::Warden)
        .json(&serde_json::json!({ "student_id": student.id }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let resp = app
        .role_post(&format!("/api/room/{second_room}/allocate"), Role::Warden)
        .json(&serde_json::json!({ "student_id": student.id }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);
}

#[tokio::test]
async fn vacate_reopens_a_full_room() {
    let app = TestApp::spawn().await;
    let student = app.seed_student("Aarav Sharma", "aarav@hostelhub.test").await;
    let room_id = app.seed_room("101", 1).await;

    app.role_post(&format!("/api/room/{room_id}/allocate"), Role::Warden)
        .json(&serde_json::json!({ "student_id": student.id }))
        .send()
        .await
        .unwrap();

    let room = app.store.get::<Room>(&room_id).unwrap();
    assert!(room.is_full());

    let resp = app
        .role_post("/api/room/vacate", Role::Warden)
        .json(&serde_json::json!({ "student_id": student.id }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let room = app.store.get::<Room>(&room_id).unwrap();
    assert!(room.occupant_ids.is_empty());
    let stored = app.store.get::<Student>(&student.id).unwrap();
    assert!(stored.room_number.is_none());
}

#[tokio::test]
async fn deleting_a_student_vacates_their_room() {
    let app = TestApp::spawn().await;
    let student = app.seed_student("Aarav Sharma", "aarav@hostelhub.test").await;
    let room_id = app.seed_room("101", 2).await;

    app.role_post(&format!("/api/room/{room_id}/allocate"), Role::Warden)
        .json(&serde_json::json!({ "student_id": student.id }))
        .send()
        .await
        .unwrap();

    let resp = app
        .role_delete(&format!("/api/student/{}", student.id), Role::Admin)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);

    let room = app.store.get::<Room>(&room_id).unwrap();
    assert!(room.occupant_ids.is_empty());
    assert!(app.store.find::<Student>(&student.id).is_none());
}

#[tokio::test]
async fn occupied_room_cannot_be_deleted() {
    let app = TestApp::spawn().await;
    let student = app.seed_student("Aarav Sharma", "aarav@hostelhub.test").await;
    let room_id = app.seed_room("101", 2).await;

    app.role_post(&format!("/api/room/{room_id}/allocate"), Role::Warden)
        .json(&serde_json::json!({ "student_id": student.id }))
        .send()
        .await
        .unwrap();

    let resp = app
        .role_delete(&format!("/api/room/{room_id}"), Role::Admin)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 409);
    assert!(app.store.find::<Room>(&room_id).is_some());
}

#[tokio::test]
async fn duplicate_room_number_is_a_conflict() {
    let app = TestApp::spawn().await;
    app.seed_room("101", 2).await;

    let resp = app
        .role_post("/api/room", Role::Admin)
        .json(&serde_json::json!({ "number": "101", "floor": 1, "capacity": 2 }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 409);
}
