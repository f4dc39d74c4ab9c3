use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::info;

use hostelhub_store::models::{LeaveApplication, LeaveStatus, LeaveType, Role, Student};
use hostelhub_store::{Store, new_id};

use crate::error::{WorkflowError, WorkflowResult, non_empty};
use crate::export::LeaveExportRow;
use crate::notification;

/// How many recently submitted applications the statistics carry.
const RECENT_LIMIT: usize = 5;

/// The leave approval chain. A pending request is recommended by the joint
/// warden and decided by the warden or admin; a reviewer may also decide
/// directly from pending. Decisions are terminal and each one appends
/// exactly one notification for the student, committed atomically with the
/// status change.
pub struct LeaveService {
    store: Arc<Store>,
}

#[derive(Debug)]
pub struct SubmitLeave {
    pub student_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub leave_type: LeaveType,
}

impl LeaveService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Student files a new request; it enters the chain as pending.
    pub fn submit(&self, req: SubmitLeave) -> WorkflowResult<LeaveApplication> {
        let reason = non_empty(&req.reason, "Reason is required")?;
        if req.end_date < req.start_date {
            return Err(WorkflowError::Validation(
                "End date precedes start date".to_string(),
            ));
        }
        self.store.with(|tx| {
            let student = tx.find::<Student>(&req.student_id).ok_or(
                WorkflowError::NotFound {
                    entity: "Student",
                },
            )?;
            let application = LeaveApplication {
                id: new_id(),
                student_id: student.id.clone(),
                student_name: student.name.clone(),
                room_number: student.room_number.clone().unwrap_or_default(),
                start_date: req.start_date,
                end_date: req.end_date,
                reason,
                leave_type: req.leave_type,
                status: LeaveStatus::Pending,
                joint_warden_remarks: None,
                warden_remarks: None,
                admin_remarks: None,
                submitted_at: Utc::now(),
                reviewed_at: None,
                reviewed_by: None,
            };
            tx.add(application.clone())
                .map_err(|e| WorkflowError::store("Leave application", e))?;
            info!(leave_id = %application.id, student_id = %application.student_id, "leave submitted");
            Ok(application)
        })
    }

    /// Joint warden moves a pending request to recommended.
    pub fn recommend(
        &self,
        leave_id: &str,
        remarks: &str,
        reviewer: Role,
    ) -> WorkflowResult<LeaveApplication> {
        let remarks = non_empty(remarks, "Remarks are required")?;
        if reviewer != Role::JointWarden {
            return Err(WorkflowError::Validation(
                "Only the joint warden can recommend a leave application".to_string(),
            ));
        }
        self.store.with(|tx| {
            let current = tx.find::<LeaveApplication>(leave_id).ok_or(
                WorkflowError::NotFound {
                    entity: "Leave application",
                },
            )?;
            if current.status != LeaveStatus::Pending {
                return Err(WorkflowError::InvalidTransition(format!(
                    "leave application is already {}",
                    current.status.as_str()
                )));
            }
            let updated = tx
                .update::<LeaveApplication>(leave_id, |leave| {
                    leave.status = LeaveStatus::Recommended;
                    leave.joint_warden_remarks = Some(remarks.clone());
                })
                .map_err(|e| WorkflowError::store("Leave application", e))?;
            info!(leave_id, "leave recommended");
            Ok(updated)
        })
    }

    pub fn approve(
        &self,
        leave_id: &str,
        remarks: &str,
        reviewer: Role,
    ) -> WorkflowResult<LeaveApplication> {
        self.decide(leave_id, remarks, reviewer, LeaveStatus::Approved)
    }

    pub fn reject(
        &self,
        leave_id: &str,
        remarks: &str,
        reviewer: Role,
    ) -> WorkflowResult<LeaveApplication> {
        self.decide(leave_id, remarks, reviewer, LeaveStatus::Rejected)
    }

    fn decide(
        &self,
        leave_id: &str,
        remarks: &str,
        reviewer: Role,
        verdict: LeaveStatus,
    ) -> WorkflowResult<LeaveApplication> {
        let remarks = non_empty(remarks, "Remarks are required")?;
        match (verdict, reviewer) {
            (LeaveStatus::Approved, Role::Warden | Role::Admin) => {}
            (LeaveStatus::Rejected, Role::JointWarden | Role::Warden | Role::Admin) => {}
            _ => {
                return Err(WorkflowError::Validation(format!(
                    "{} cannot {} a leave application",
                    reviewer.label(),
                    if verdict == LeaveStatus::Approved {
                        "approve"
                    } else {
                        "reject"
                    },
                )));
            }
        }
        self.store.with(|tx| {
            let current = tx.find::<LeaveApplication>(leave_id).ok_or(
                WorkflowError::NotFound {
                    entity: "Leave application",
                },
            )?;
            if current.status.is_terminal() {
                return Err(WorkflowError::InvalidTransition(format!(
                    "leave application is already {}",
                    current.status.as_str()
                )));
            }
            let now = Utc::now();
            let updated = tx
                .update::<LeaveApplication>(leave_id, |leave| {
                    leave.status = verdict;
                    match reviewer {
                        Role::JointWarden => leave.joint_warden_remarks = Some(remarks.clone()),
                        Role::Warden => leave.warden_remarks = Some(remarks.clone()),
                        Role::Admin => leave.admin_remarks = Some(remarks.clone()),
                        Role::Student => {}
                    }
                    leave.reviewed_at = Some(now);
                    leave.reviewed_by = Some(reviewer.label().to_string());
                })
                .map_err(|e| WorkflowError::store("Leave application", e))?;
            // Verdict and notification commit under the same write.
            tx.add(notification::leave_decision(&updated, &remarks))
                .map_err(|e| WorkflowError::store("Notification", e))?;
            info!(leave_id, status = updated.status.as_str(), reviewer = reviewer.as_str(), "leave decided");
            Ok(updated)
        })
    }

    pub fn list(&self, filter: Option<LeaveStatus>) -> Vec<LeaveApplication> {
        self.store
            .all::<LeaveApplication>()
            .into_iter()
            .filter(|l| filter.map_or(true, |s| l.status == s))
            .collect()
    }

    pub fn for_student(&self, student_id: &str) -> Vec<LeaveApplication> {
        self.store
            .all::<LeaveApplication>()
            .into_iter()
            .filter(|l| l.student_id == student_id)
            .collect()
    }

    /// Filters by status (None passes everything through) and flattens to
    /// the export row shape.
    pub fn export_rows(&self, filter: Option<LeaveStatus>) -> Vec<LeaveExportRow> {
        self.store
            .all::<LeaveApplication>()
            .iter()
            .filter(|l| filter.map_or(true, |s| l.status == s))
            .map(LeaveExportRow::from)
            .collect()
    }

    /// Recomputed from the full collection on every call.
    pub fn statistics(&self) -> LeaveStatistics {
        let applications = self.store.all::<LeaveApplication>();
        let mut by_status = StatusCounts::default();
        let mut by_type = TypeCounts::default();
        for leave in &applications {
            match leave.status {
                LeaveStatus::Pending => by_status.pending += 1,
                LeaveStatus::Recommended => by_status.recommended += 1,
                LeaveStatus::Approved => by_status.approved += 1,
                LeaveStatus::Rejected => by_status.rejected += 1,
            }
            match leave.leave_type {
                LeaveType::Medical => by_type.medical += 1,
                LeaveType::Personal => by_type.personal += 1,
                LeaveType::Emergency => by_type.emergency += 1,
                LeaveType::Academic => by_type.academic += 1,
            }
        }
        let total = applications.len();
        let mut recent = applications;
        recent.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        recent.truncate(RECENT_LIMIT);
        LeaveStatistics {
            total,
            by_status,
            by_type,
            recent,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LeaveStatistics {
    pub total: usize,
    pub by_status: StatusCounts,
    pub by_type: TypeCounts,
    pub recent: Vec<LeaveApplication>,
}

#[derive(Debug, Default, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub recommended: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[derive(Debug, Default, Serialize)]
pub struct TypeCounts {
    pub medical: usize,
    pub personal: usize,
    pub emergency: usize,
    pub academic: usize,
}
