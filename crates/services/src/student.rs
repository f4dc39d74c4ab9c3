use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use hostelhub_store::models::Student;
use hostelhub_store::{Store, new_id};

use crate::error::{WorkflowError, WorkflowResult, non_empty};
use crate::room;

pub struct StudentService {
    store: Arc<Store>,
}

#[derive(Debug)]
pub struct RegisterStudent {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guardian_name: String,
    pub guardian_phone: String,
}

impl StudentService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn register(&self, req: RegisterStudent) -> WorkflowResult<Student> {
        let name = non_empty(&req.name, "Name is required")?;
        let email = non_empty(&req.email, "Email is required")?;
        let now = Utc::now();
        let student = Student {
            id: new_id(),
            name,
            email,
            phone: req.phone,
            room_number: None,
            guardian_name: req.guardian_name,
            guardian_phone: req.guardian_phone,
            created_at: now,
            updated_at: now,
        };
        self.store
            .add(student.clone())
            .map_err(|e| WorkflowError::store("Student", e))?;
        info!(student_id = %student.id, "student registered");
        Ok(student)
    }

    /// Removal vacates the student's room before dropping the record, so
    /// the occupancy views stay consistent.
    pub fn remove(&self, student_id: &str) -> WorkflowResult<()> {
        self.store.with(|tx| {
            let student = tx
                .find::<Student>(student_id)
                .ok_or(WorkflowError::NotFound {
                    entity: "Student",
                })?
                .clone();
            room::clear_allocation(tx, &student)?;
            tx.remove::<Student>(student_id)
                .map_err(|e| WorkflowError::store("Student", e))?;
            info!(student_id, "student removed");
            Ok(())
        })
    }
}
