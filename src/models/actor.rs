use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const NAMESPACE_EMPLOYEE: &str = "attendance_emp";
pub const NAMESPACE_HR: &str = "attendance_hr";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Hr,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Hr => "hr",
            Role::Admin => "admin",
        }
    }

    /// Convert CLI input → enum (case-insensitive, a few aliases)
    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "employee" | "emp" | "e" => Ok(Role::Employee),
            "hr" | "h" => Ok(Role::Hr),
            "admin" | "a" => Ok(Role::Admin),
            other => Err(AppError::InvalidRole(other.to_string())),
        }
    }

    /// Attendance dataset a role clocks into when no namespace is configured.
    pub fn default_namespace(&self) -> &'static str {
        match self {
            Role::Employee => NAMESPACE_EMPLOYEE,
            Role::Hr | Role::Admin => NAMESPACE_HR,
        }
    }
}

/// The identity a session belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl Actor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }
}
