use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record per student, edited in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthRecord {
    pub id: String,
    pub student_id: String,
    pub blood_group: String,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
    pub emergency_contact: String,
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}
