use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::info;

use hostelhub_store::models::{FeeRecord, FeeStatus, Student};
use hostelhub_store::{Store, new_id};

use crate::error::{WorkflowError, WorkflowResult, non_empty};
use crate::notification;

pub struct FeeService {
    store: Arc<Store>,
}

#[derive(Debug)]
pub struct CreateFee {
    pub student_id: String,
    pub term: String,
    pub amount_due: u64,
    pub due_date: NaiveDate,
}

impl FeeService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn create(&self, req: CreateFee) -> WorkflowResult<FeeRecord> {
        let term = non_empty(&req.term, "Term is required")?;
        if req.amount_due == 0 {
            return Err(WorkflowError::Validation(
                "Amount due must be positive".to_string(),
            ));
        }
        self.store.with(|tx| {
            let student = tx.find::<Student>(&req.student_id).ok_or(
                WorkflowError::NotFound {
                    entity: "Student",
                },
            )?;
            let record = FeeRecord {
                id: new_id(),
                student_id: student.id.clone(),
                student_name: student.name.clone(),
                term,
                amount_due: req.amount_due,
                amount_paid: 0,
                due_date: req.due_date,
                status: FeeStatus::Pending,
                created_at: Utc::now(),
                paid_at: None,
            };
            tx.add(record.clone())
                .map_err(|e| WorkflowError::store("Fee record", e))?;
            Ok(record)
        })
    }

    /// Accumulates a payment and derives the record's status from the
    /// resulting balance.
    pub fn record_payment(&self, fee_id: &str, amount: u64) -> WorkflowResult<FeeRecord> {
        if amount == 0 {
            return Err(WorkflowError::Validation(
                "Payment amount must be positive".to_string(),
            ));
        }
        self.store.with(|tx| {
            let current = tx.find::<FeeRecord>(fee_id).ok_or(WorkflowError::NotFound {
                entity: "Fee record",
            })?;
            if current.status == FeeStatus::Paid {
                return Err(WorkflowError::InvalidTransition(
                    "fee record is already paid".to_string(),
                ));
            }
            if amount > current.outstanding() {
                return Err(WorkflowError::Validation(format!(
                    "Payment exceeds outstanding balance of {}",
                    current.outstanding()
                )));
            }
            let now = Utc::now();
            let updated = tx
                .update::<FeeRecord>(fee_id, |fee| {
                    fee.amount_paid += amount;
                    if fee.outstanding() == 0 {
                        fee.status = FeeStatus::Paid;
                        fee.paid_at = Some(now);
                    } else {
                        fee.status = FeeStatus::Partial;
                    }
                })
                .map_err(|e| WorkflowError::store("Fee record", e))?;
            info!(fee_id, amount, status = ?updated.status, "payment recorded");
            Ok(updated)
        })
    }

    /// Flags unpaid records past their due date and reminds each student.
    /// Already-flagged records are left alone, so repeat sweeps do not
    /// pile up reminders.
    pub fn mark_overdue(&self, today: NaiveDate) -> usize {
        self.store.with(|tx| {
            let due: Vec<String> = tx
                .all::<FeeRecord>()
                .into_iter()
                .filter(|f| {
                    !matches!(f.status, FeeStatus::Paid | FeeStatus::Overdue) && f.due_date < today
                })
                .map(|f| f.id)
                .collect();
            for id in &due {
                let Ok(updated) = tx.update::<FeeRecord>(id, |fee| {
                    fee.status = FeeStatus::Overdue;
                }) else {
                    continue;
                };
                let _ = tx.add(notification::fee_overdue(&updated));
            }
            due.len()
        })
    }

    pub fn list(&self) -> Vec<FeeRecord> {
        self.store.all::<FeeRecord>()
    }

    pub fn for_student(&self, student_id: &str) -> Vec<FeeRecord> {
        self.store
            .all::<FeeRecord>()
            .into_iter()
            .filter(|f| f.student_id == student_id)
            .collect()
    }
}
