use chrono::{DateTime, Utc};
use serde::Serialize;

use hostelhub_store::models::LeaveApplication;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

/// Flat export shape. Optional fields flatten to empty strings so every
/// row carries the full column set.
#[derive(Debug, Serialize)]
pub struct LeaveExportRow {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub room_number: String,
    pub leave_type: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub joint_warden_remarks: String,
    pub warden_remarks: String,
    pub admin_remarks: String,
    pub submitted_at: String,
    pub reviewed_at: String,
    pub reviewed_by: String,
}

impl From<&LeaveApplication> for LeaveExportRow {
    fn from(leave: &LeaveApplication) -> Self {
        Self {
            id: leave.id.clone(),
            student_id: leave.student_id.clone(),
            student_name: leave.student_name.clone(),
            room_number: leave.room_number.clone(),
            leave_type: leave.leave_type.as_str().to_string(),
            status: leave.status.as_str().to_string(),
            start_date: leave.start_date.to_string(),
            end_date: leave.end_date.to_string(),
            reason: leave.reason.clone(),
            joint_warden_remarks: leave.joint_warden_remarks.clone().unwrap_or_default(),
            warden_remarks: leave.warden_remarks.clone().unwrap_or_default(),
            admin_remarks: leave.admin_remarks.clone().unwrap_or_default(),
            submitted_at: leave.submitted_at.to_rfc3339(),
            reviewed_at: leave
                .reviewed_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            reviewed_by: leave.reviewed_by.clone().unwrap_or_default(),
        }
    }
}

const CSV_HEADER: [&str; 15] = [
    "id",
    "student_id",
    "student_name",
    "room_number",
    "leave_type",
    "status",
    "start_date",
    "end_date",
    "reason",
    "joint_warden_remarks",
    "warden_remarks",
    "admin_remarks",
    "submitted_at",
    "reviewed_at",
    "reviewed_by",
];

pub fn to_csv(rows: &[LeaveExportRow]) -> String {
    let mut out = String::new();
    out.push_str(&CSV_HEADER.join(","));
    out.push('\n');
    for row in rows {
        let fields = [
            &row.id,
            &row.student_id,
            &row.student_name,
            &row.room_number,
            &row.leave_type,
            &row.status,
            &row.start_date,
            &row.end_date,
            &row.reason,
            &row.joint_warden_remarks,
            &row.warden_remarks,
            &row.admin_remarks,
            &row.submitted_at,
            &row.reviewed_at,
            &row.reviewed_by,
        ];
        let line = fields
            .iter()
            .map(|f| escape_csv(f.as_str()))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Quotes fields containing commas, quotes or line breaks.
fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// JSON envelope around the row set.
pub fn to_json(rows: &[LeaveExportRow], exported_at: DateTime<Utc>) -> serde_json::Value {
    serde_json::json!({
        "export_date": exported_at.to_rfc3339(),
        "total_applications": rows.len(),
        "applications": rows,
    })
}
