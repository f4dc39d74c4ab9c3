use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub room_number: String,
    pub category: ComplaintCategory,
    pub description: String,
    #[serde(default)]
    pub status: ComplaintStatus,
    pub resolution_notes: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintCategory {
    Maintenance,
    Electrical,
    Plumbing,
    Cleanliness,
    Food,
    Other,
}

/// Open -> InProgress -> Resolved, forward-only; Resolved is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
}

impl ComplaintStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, ComplaintStatus::Resolved)
    }

    fn rank(self) -> u8 {
        match self {
            ComplaintStatus::Open => 0,
            ComplaintStatus::InProgress => 1,
            ComplaintStatus::Resolved => 2,
        }
    }

    pub fn can_move_to(self, next: ComplaintStatus) -> bool {
        !self.is_terminal() && next.rank() > self.rank()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ComplaintStatus::Open => "open",
            ComplaintStatus::InProgress => "in_progress",
            ComplaintStatus::Resolved => "resolved",
        }
    }
}
