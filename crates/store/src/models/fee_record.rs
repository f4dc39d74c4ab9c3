use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One billing entry per student per term. Amounts are whole currency
/// units; `status` is derived from the paid/due balance and the due date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeRecord {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub term: String,
    pub amount_due: u64,
    #[serde(default)]
    pub amount_paid: u64,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub status: FeeStatus,
    pub created_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FeeStatus {
    #[default]
    Pending,
    Partial,
    Paid,
    Overdue,
}

impl FeeRecord {
    pub fn outstanding(&self) -> u64 {
        self.amount_due.saturating_sub(self.amount_paid)
    }
}
