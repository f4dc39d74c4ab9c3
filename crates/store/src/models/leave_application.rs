use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One leave request and its position in the approval chain.
///
/// Remark fields fill in as reviewers act; the audit trail
/// (`reviewed_at`/`reviewed_by`) is written on the terminal transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveApplication {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub room_number: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub leave_type: LeaveType,
    #[serde(default)]
    pub status: LeaveStatus,
    pub joint_warden_remarks: Option<String>,
    pub warden_remarks: Option<String>,
    pub admin_remarks: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub reviewed_by: Option<String>,
}

/// Approval chain: Pending -> Recommended -> Approved | Rejected.
/// A reviewer may also decide directly from Pending. Approved and Rejected
/// admit no further transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Recommended,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, LeaveStatus::Approved | LeaveStatus::Rejected)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(LeaveStatus::Pending),
            "recommended" => Some(LeaveStatus::Recommended),
            "approved" => Some(LeaveStatus::Approved),
            "rejected" => Some(LeaveStatus::Rejected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Recommended => "recommended",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Medical,
    Personal,
    Emergency,
    Academic,
}

impl LeaveType {
    pub fn as_str(self) -> &'static str {
        match self {
            LeaveType::Medical => "medical",
            LeaveType::Personal => "personal",
            LeaveType::Emergency => "emergency",
            LeaveType::Academic => "academic",
        }
    }
}
