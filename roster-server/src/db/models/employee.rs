//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{validate_phone, validate_username_charset};

/// Employee model matching the persisted document shape (camelCase fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

/// Create employee payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    #[validate(length(min = 2, max = 100, message = "Full name must be 2-100 characters"))]
    pub full_name: String,

    #[validate(
        length(min = 3, max = 30, message = "Username must be 3-30 characters"),
        custom(function = validate_username_charset)
    )]
    pub username: String,

    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,

    #[validate(custom(function = validate_phone))]
    pub phone: String,

    #[validate(length(min = 2, max = 100, message = "Position must be 2-100 characters"))]
    pub position: String,

    #[validate(length(min = 2, max = 100, message = "Department must be 2-100 characters"))]
    pub department: String,

    #[serde(default)]
    #[validate(url(message = "Avatar URL must be a valid URL"))]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Update employee payload; absent fields retain their prior values
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[validate(length(min = 2, max = 100, message = "Full name must be 2-100 characters"))]
    pub full_name: Option<String>,

    #[validate(
        length(min = 3, max = 30, message = "Username must be 3-30 characters"),
        custom(function = validate_username_charset)
    )]
    pub username: Option<String>,

    #[validate(email(message = "Email must be a valid email address"))]
    pub email: Option<String>,

    #[validate(custom(function = validate_phone))]
    pub phone: Option<String>,

    #[validate(length(min = 2, max = 100, message = "Position must be 2-100 characters"))]
    pub position: Option<String>,

    #[validate(length(min = 2, max = 100, message = "Department must be 2-100 characters"))]
    pub department: Option<String>,

    #[validate(url(message = "Avatar URL must be a valid URL"))]
    pub avatar_url: Option<String>,

    pub is_active: Option<bool>,
}
