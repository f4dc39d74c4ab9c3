use std::sync::Arc;

use chrono::Utc;
use hostelhub_store::models::{
    Complaint, FeeRecord, LeaveApplication, LeaveStatus, Notification, NotificationPriority,
    NotificationType, Role,
};
use hostelhub_store::{Store, new_id};

use crate::error::{WorkflowError, WorkflowResult, non_empty};

pub struct NotificationService {
    store: Arc<Store>,
}

impl NotificationService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Notifications visible to one student: targeted directly, or
    /// broadcast to the student role at large.
    pub fn for_student(&self, student_id: &str) -> Vec<Notification> {
        self.store
            .all::<Notification>()
            .into_iter()
            .filter(|n| {
                n.target_student_id.as_deref() == Some(student_id)
                    || (n.target_student_id.is_none() && n.target_roles.contains(&Role::Student))
            })
            .collect()
    }

    pub fn for_role(&self, role: Role) -> Vec<Notification> {
        self.store
            .all::<Notification>()
            .into_iter()
            .filter(|n| n.target_roles.contains(&role))
            .collect()
    }

    /// Admin broadcast to one or more roles.
    pub fn announce(
        &self,
        title: &str,
        message: &str,
        priority: NotificationPriority,
        target_roles: Vec<Role>,
    ) -> WorkflowResult<Notification> {
        let title = non_empty(title, "Title is required")?;
        let message = non_empty(message, "Message is required")?;
        if target_roles.is_empty() {
            return Err(WorkflowError::Validation(
                "At least one target role is required".to_string(),
            ));
        }
        let notification = Notification {
            id: new_id(),
            title,
            message,
            notification_type: NotificationType::Announcement,
            priority,
            is_read: false,
            target_roles,
            target_student_id: None,
            created_at: Utc::now(),
        };
        self.store
            .add(notification.clone())
            .map_err(|e| WorkflowError::store("Notification", e))?;
        Ok(notification)
    }

    pub fn mark_read(&self, id: &str) -> WorkflowResult<Notification> {
        self.store
            .update::<Notification>(id, |n| n.is_read = true)
            .map_err(|e| WorkflowError::store("Notification", e))
    }

    /// Student dismiss: the one deletion path notifications have.
    pub fn dismiss(&self, id: &str) -> WorkflowResult<()> {
        self.store
            .remove::<Notification>(id)
            .map_err(|e| WorkflowError::store("Notification", e))
    }
}

/// Built inside the decision transaction so the verdict and its
/// notification commit together.
pub(crate) fn leave_decision(leave: &LeaveApplication, remarks: &str) -> Notification {
    let approved = leave.status == LeaveStatus::Approved;
    Notification {
        id: new_id(),
        title: if approved {
            "Leave Application Approved"
        } else {
            "Leave Application Rejected"
        }
        .to_string(),
        message: format!(
            "Your {} leave from {} to {} was {}. Remarks: {}",
            leave.leave_type.as_str(),
            leave.start_date,
            leave.end_date,
            if approved { "approved" } else { "rejected" },
            remarks,
        ),
        notification_type: if approved {
            NotificationType::LeaveApproved
        } else {
            NotificationType::LeaveRejected
        },
        priority: if approved {
            NotificationPriority::Normal
        } else {
            NotificationPriority::High
        },
        is_read: false,
        target_roles: vec![Role::Student],
        target_student_id: Some(leave.student_id.clone()),
        created_at: Utc::now(),
    }
}

pub(crate) fn complaint_filed(complaint: &Complaint) -> Notification {
    Notification {
        id: new_id(),
        title: "New Complaint Filed".to_string(),
        message: format!(
            "{} (room {}) reported: {}",
            complaint.student_name, complaint.room_number, complaint.description,
        ),
        notification_type: NotificationType::ComplaintUpdate,
        priority: NotificationPriority::Normal,
        is_read: false,
        target_roles: vec![Role::JointWarden, Role::Warden],
        target_student_id: None,
        created_at: Utc::now(),
    }
}

pub(crate) fn complaint_resolved(complaint: &Complaint) -> Notification {
    Notification {
        id: new_id(),
        title: "Complaint Resolved".to_string(),
        message: format!(
            "Your complaint about {} has been resolved.{}",
            complaint.description,
            complaint
                .resolution_notes
                .as_deref()
                .map(|n| format!(" Notes: {n}"))
                .unwrap_or_default(),
        ),
        notification_type: NotificationType::ComplaintUpdate,
        priority: NotificationPriority::Normal,
        is_read: false,
        target_roles: vec![Role::Student],
        target_student_id: Some(complaint.student_id.clone()),
        created_at: Utc::now(),
    }
}

pub(crate) fn fee_overdue(fee: &FeeRecord) -> Notification {
    Notification {
        id: new_id(),
        title: "Fee Payment Overdue".to_string(),
        message: format!(
            "Your {} fee of {} was due on {}. Outstanding balance: {}.",
            fee.term,
            fee.amount_due,
            fee.due_date,
            fee.outstanding(),
        ),
        notification_type: NotificationType::FeeReminder,
        priority: NotificationPriority::Urgent,
        is_read: false,
        target_roles: vec![Role::Student],
        target_student_id: Some(fee.student_id.clone()),
        created_at: Utc::now(),
    }
}
