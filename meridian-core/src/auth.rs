//! Auth DTOs shared between client and views
//!
//! Request/response types for the auth endpoints and the role model used
//! by the role-specific dashboards.

use serde::{Deserialize, Serialize};

/// Staff and guest roles
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Cashier,
    Waiter,
    #[default]
    Customer,
}

impl Role {
    pub fn is_manager(&self) -> bool {
        matches!(self, Role::Manager)
    }

    pub fn is_cashier(&self) -> bool {
        matches!(self, Role::Cashier)
    }

    pub fn is_waiter(&self) -> bool {
        matches!(self, Role::Waiter)
    }

    /// Whether this role may process payments
    pub fn can_process_payments(&self) -> bool {
        matches!(self, Role::Manager | Role::Cashier)
    }
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Role,
}
