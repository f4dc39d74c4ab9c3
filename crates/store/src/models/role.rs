use serde::{Deserialize, Serialize};
use std::fmt;

/// The four dashboard roles. Students submit; the other three review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    JointWarden,
    Warden,
    Admin,
}

impl Role {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "student" => Some(Role::Student),
            "joint_warden" => Some(Role::JointWarden),
            "warden" => Some(Role::Warden),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::JointWarden => "joint_warden",
            Role::Warden => "warden",
            Role::Admin => "admin",
        }
    }

    /// Human-readable label used in audit fields and notification bodies.
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::JointWarden => "Joint Warden",
            Role::Warden => "Warden",
            Role::Admin => "Admin",
        }
    }

    pub fn is_staff(self) -> bool {
        matches!(self, Role::JointWarden | Role::Warden | Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
