use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use hostelhub_store::models::{Room, RoomStatus, Student};
use hostelhub_store::{Store, Txn};

use crate::error::{WorkflowError, WorkflowResult};

/// Room allocation. A room's occupant list and each occupant's
/// `room_number` are two views of the same fact; every change to one
/// updates the other under a single store write.
pub struct RoomService {
    store: Arc<Store>,
}

impl RoomService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn allocate(&self, room_id: &str, student_id: &str) -> WorkflowResult<Room> {
        self.store.with(|tx| {
            let student = tx.find::<Student>(student_id).ok_or(
                WorkflowError::NotFound {
                    entity: "Student",
                },
            )?;
            if student.room_number.is_some() {
                return Err(WorkflowError::Validation(format!(
                    "{} already has a room allocated",
                    student.name
                )));
            }
            let room = tx.find::<Room>(room_id).ok_or(WorkflowError::NotFound {
                entity: "Room",
            })?;
            if room.status == RoomStatus::Maintenance {
                return Err(WorkflowError::Validation(format!(
                    "Room {} is under maintenance",
                    room.number
                )));
            }
            if room.is_full() {
                return Err(WorkflowError::Validation(format!(
                    "Room {} is at capacity",
                    room.number
                )));
            }
            let number = room.number.clone();
            let now = Utc::now();
            let updated = tx
                .update::<Room>(room_id, |room| {
                    room.occupant_ids.push(student_id.to_string());
                    if room.is_full() {
                        room.status = RoomStatus::Full;
                    }
                    room.updated_at = now;
                })
                .map_err(|e| WorkflowError::store("Room", e))?;
            tx.update::<Student>(student_id, |student| {
                student.room_number = Some(number.clone());
                student.updated_at = now;
            })
            .map_err(|e| WorkflowError::store("Student", e))?;
            info!(room_id, student_id, "room allocated");
            Ok(updated)
        })
    }

    pub fn vacate(&self, student_id: &str) -> WorkflowResult<Student> {
        self.store.with(|tx| {
            let student = tx
                .find::<Student>(student_id)
                .ok_or(WorkflowError::NotFound {
                    entity: "Student",
                })?
                .clone();
            if student.room_number.is_none() {
                return Err(WorkflowError::Validation(format!(
                    "{} has no room allocated",
                    student.name
                )));
            }
            clear_allocation(tx, &student)?;
            info!(student_id, "room vacated");
            tx.get::<Student>(student_id)
                .map(|s| s.clone())
                .map_err(|e| WorkflowError::store("Student", e))
        })
    }
}

/// Drops a student's room assignment from both sides. No-op when the
/// student has no room.
pub(crate) fn clear_allocation(tx: &mut Txn<'_>, student: &Student) -> WorkflowResult<()> {
    let Some(number) = &student.room_number else {
        return Ok(());
    };
    let room_id = tx
        .all::<Room>()
        .into_iter()
        .find(|r| &r.number == number)
        .map(|r| r.id);
    let now = Utc::now();
    if let Some(room_id) = room_id {
        tx.update::<Room>(&room_id, |room| {
            room.occupant_ids.retain(|id| id != &student.id);
            if room.status == RoomStatus::Full {
                room.status = RoomStatus::Available;
            }
            room.updated_at = now;
        })
        .map_err(|e| WorkflowError::store("Room", e))?;
    }
    tx.update::<Student>(&student.id, |s| {
        s.room_number = None;
        s.updated_at = now;
    })
    .map_err(|e| WorkflowError::store("Student", e))?;
    Ok(())
}
