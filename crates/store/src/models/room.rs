use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub number: String,
    pub floor: u32,
    pub capacity: u32,
    /// Student ids currently assigned here. Kept consistent with each
    /// student's `room_number` under one store write.
    #[serde(default)]
    pub occupant_ids: Vec<String>,
    #[serde(default)]
    pub status: RoomStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    #[default]
    Available,
    Full,
    Maintenance,
}

impl Room {
    pub fn is_full(&self) -> bool {
        self.occupant_ids.len() as u32 >= self.capacity
    }
}
