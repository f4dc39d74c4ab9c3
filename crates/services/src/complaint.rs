use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use hostelhub_store::models::{Complaint, ComplaintCategory, ComplaintStatus, Role, Student};
use hostelhub_store::{Store, new_id};

use crate::error::{WorkflowError, WorkflowResult, non_empty};
use crate::notification;

/// Complaint intake and the open -> in_progress -> resolved chain.
/// Resolution notifies the student, atomically with the status change.
pub struct ComplaintService {
    store: Arc<Store>,
}

#[derive(Debug)]
pub struct FileComplaint {
    pub student_id: String,
    pub category: ComplaintCategory,
    pub description: String,
}

impl ComplaintService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn file(&self, req: FileComplaint) -> WorkflowResult<Complaint> {
        let description = non_empty(&req.description, "Description is required")?;
        self.store.with(|tx| {
            let student = tx.find::<Student>(&req.student_id).ok_or(
                WorkflowError::NotFound {
                    entity: "Student",
                },
            )?;
            let complaint = Complaint {
                id: new_id(),
                student_id: student.id.clone(),
                student_name: student.name.clone(),
                room_number: student.room_number.clone().unwrap_or_default(),
                category: req.category,
                description,
                status: ComplaintStatus::Open,
                resolution_notes: None,
                submitted_at: Utc::now(),
                resolved_at: None,
            };
            tx.add(complaint.clone())
                .map_err(|e| WorkflowError::store("Complaint", e))?;
            tx.add(notification::complaint_filed(&complaint))
                .map_err(|e| WorkflowError::store("Notification", e))?;
            info!(complaint_id = %complaint.id, "complaint filed");
            Ok(complaint)
        })
    }

    pub fn update_status(
        &self,
        complaint_id: &str,
        next: ComplaintStatus,
        notes: Option<String>,
        reviewer: Role,
    ) -> WorkflowResult<Complaint> {
        if !reviewer.is_staff() {
            return Err(WorkflowError::Validation(
                "Only staff can update a complaint".to_string(),
            ));
        }
        self.store.with(|tx| {
            let current = tx.find::<Complaint>(complaint_id).ok_or(
                WorkflowError::NotFound {
                    entity: "Complaint",
                },
            )?;
            if !current.status.can_move_to(next) {
                return Err(WorkflowError::InvalidTransition(format!(
                    "complaint cannot move from {} to {}",
                    current.status.as_str(),
                    next.as_str()
                )));
            }
            let now = Utc::now();
            let updated = tx
                .update::<Complaint>(complaint_id, |complaint| {
                    complaint.status = next;
                    if next == ComplaintStatus::Resolved {
                        complaint.resolved_at = Some(now);
                        complaint.resolution_notes = notes.clone();
                    }
                })
                .map_err(|e| WorkflowError::store("Complaint", e))?;
            if next == ComplaintStatus::Resolved {
                tx.add(notification::complaint_resolved(&updated))
                    .map_err(|e| WorkflowError::store("Notification", e))?;
            }
            info!(complaint_id, status = next.as_str(), "complaint updated");
            Ok(updated)
        })
    }

    pub fn list(&self, status: Option<ComplaintStatus>) -> Vec<Complaint> {
        self.store
            .all::<Complaint>()
            .into_iter()
            .filter(|c| status.map_or(true, |s| c.status == s))
            .collect()
    }

    pub fn for_student(&self, student_id: &str) -> Vec<Complaint> {
        self.store
            .all::<Complaint>()
            .into_iter()
            .filter(|c| c.student_id == student_id)
            .collect()
    }
}
