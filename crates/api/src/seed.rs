use anyhow::Result;
use chrono::{Duration, Utc};
use tracing::info;

use hostelhub_services::complaint::FileComplaint;
use hostelhub_services::fee::CreateFee;
use hostelhub_services::leave::SubmitLeave;
use hostelhub_services::student::RegisterStudent;
use hostelhub_store::models::{
    ComplaintCategory, LeaveType, Role, Room, RoomStatus, Shift, StaffDesignation, StaffMember,
};
use hostelhub_store::new_id;

use crate::state::AppState;

/// Demo dataset the dashboards start from. Everything is in-memory, so a
/// restart reseeds from scratch.
pub fn seed_demo_data(state: &AppState) -> Result<()> {
    let now = Utc::now();
    let today = now.date_naive();

    let mut room_ids = Vec::new();
    for (number, floor, capacity) in [("101", 1u32, 2u32), ("102", 1, 3), ("201", 2, 2), ("202", 2, 2)]
    {
        let room = Room {
            id: new_id(),
            number: number.to_string(),
            floor,
            capacity,
            occupant_ids: Vec::new(),
            status: RoomStatus::Available,
            created_at: now,
            updated_at: now,
        };
        room_ids.push(room.id.clone());
        state.store.add(room)?;
    }

    let roster = [
        ("Aarav Sharma", "aarav.sharma@hostelhub.test", "9810000001"),
        ("Diya Patel", "diya.patel@hostelhub.test", "9810000002"),
        ("Rohan Gupta", "rohan.gupta@hostelhub.test", "9810000003"),
        ("Isha Reddy", "isha.reddy@hostelhub.test", "9810000004"),
    ];
    let mut student_ids = Vec::new();
    for (name, email, phone) in roster {
        let student = state.students.register(RegisterStudent {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            guardian_name: format!("Guardian of {name}"),
            guardian_phone: "9820000000".to_string(),
        })?;
        student_ids.push(student.id);
    }

    state.rooms.allocate(&room_ids[0], &student_ids[0])?;
    state.rooms.allocate(&room_ids[0], &student_ids[1])?;
    state.rooms.allocate(&room_ids[1], &student_ids[2])?;

    for (name, email, designation) in [
        ("Meera Nair", "meera.nair@hostelhub.test", StaffDesignation::Warden),
        ("Vikram Singh", "vikram.singh@hostelhub.test", StaffDesignation::JointWarden),
        ("Sunil Kumar", "sunil.kumar@hostelhub.test", StaffDesignation::Cook),
    ] {
        let member = StaffMember {
            id: new_id(),
            name: name.to_string(),
            email: email.to_string(),
            phone: "9830000000".to_string(),
            designation,
            shift: Shift::Morning,
            joined_on: today - Duration::days(365),
            created_at: now,
            updated_at: now,
        };
        state.store.add(member)?;
    }

    state.leaves.submit(SubmitLeave {
        student_id: student_ids[0].clone(),
        start_date: today + Duration::days(3),
        end_date: today + Duration::days(5),
        reason: "Cousin's wedding".to_string(),
        leave_type: LeaveType::Personal,
    })?;
    let medical = state.leaves.submit(SubmitLeave {
        student_id: student_ids[1].clone(),
        start_date: today + Duration::days(1),
        end_date: today + Duration::days(2),
        reason: "Fever, advised rest at home".to_string(),
        leave_type: LeaveType::Medical,
    })?;
    state
        .leaves
        .recommend(&medical.id, "Medical certificate attached", Role::JointWarden)?;

    state.complaints.file(FileComplaint {
        student_id: student_ids[2].clone(),
        category: ComplaintCategory::Plumbing,
        description: "Leaking tap in the second-floor washroom".to_string(),
    })?;

    for student_id in &student_ids {
        state.fees.create(CreateFee {
            student_id: student_id.clone(),
            term: "2025-26 Term 1".to_string(),
            amount_due: 45_000,
            due_date: today + Duration::days(30),
        })?;
    }

    info!(
        students = student_ids.len(),
        rooms = room_ids.len(),
        "demo data seeded"
    );
    Ok(())
}
