use chrono::{NaiveDate, Utc};
use serde_json::Value;

use hostelhub_store::models::{LeaveApplication, LeaveStatus, LeaveType, Role};

use super::test_app::TestApp;

pub struct SeededStudent {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl TestApp {
    /// Register a student through the API as the admin.
    pub async fn seed_student(&self, name: &str, email: &str) -> SeededStudent {
        let resp = self
            .role_post("/api/student", Role::Admin)
            .json(&serde_json::json!({
                "name": name,
                "email": email,
                "phone": "9800000000",
                "guardian_name": format!("Guardian of {name}"),
                "guardian_phone": "9810000000",
            }))
            .send()
            .await
            .expect("Create student request failed");

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        assert_eq!(status.as_u16(), 200, "Create student failed: {body}");

        let student: Value = serde_json::from_str(&body).expect("Failed to parse student response");

        SeededStudent {
            id: student["id"].as_str().unwrap().to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    /// Create a room through the API and return its id.
    pub async fn seed_room(&self, number: &str, capacity: u32) -> String {
        let resp = self
            .role_post("/api/room", Role::Admin)
            .json(&serde_json::json!({
                "number": number,
                "floor": 1,
                "capacity": capacity,
            }))
            .send()
            .await
            .expect("Create room request failed");

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        assert_eq!(status.as_u16(), 200, "Create room failed: {body}");

        let json: Value = serde_json::from_str(&body).expect("Failed to parse room response");
        json["id"].as_str().unwrap().to_string()
    }

    /// Submit a leave application through the API and return it.
    pub async fn submit_leave(&self, student_id: &str, reason: &str) -> Value {
        let resp = self
            .role_post("/api/leave", Role::Student)
            .json(&serde_json::json!({
                "student_id": student_id,
                "start_date": "2026-09-01",
                "end_date": "2026-09-03",
                "reason": reason,
                "leave_type": "personal",
            }))
            .send()
            .await
            .expect("Submit leave request failed");

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        assert_eq!(status.as_u16(), 200, "Submit leave failed: {body}");

        let json: Value = serde_json::from_str(&body).expect("Failed to parse leave response");
        assert_eq!(json["success"], true);
        json["application"].clone()
    }

    /// Plant a leave application straight into the store, bypassing the
    /// API, for scenarios that need a fixed id or status.
    pub fn seed_leave_direct(
        &self,
        id: &str,
        student_id: &str,
        student_name: &str,
        status: LeaveStatus,
    ) -> LeaveApplication {
        let leave = LeaveApplication {
            id: id.to_string(),
            student_id: student_id.to_string(),
            student_name: student_name.to_string(),
            room_number: "101".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            reason: "Family function".to_string(),
            leave_type: LeaveType::Personal,
            status,
            joint_warden_remarks: None,
            warden_remarks: None,
            admin_remarks: None,
            submitted_at: Utc::now(),
            reviewed_at: None,
            reviewed_by: None,
        };
        self.store.add(leave.clone()).expect("Failed to seed leave");
        leave
    }
}
