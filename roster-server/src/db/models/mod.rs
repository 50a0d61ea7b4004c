//! Data Models
//!
//! Persisted record shapes plus their create/update payloads. Field names
//! are camelCase on disk and on the wire.

pub mod employee;
pub mod user;

pub use employee::{Employee, EmployeeCreate, EmployeeUpdate};
pub use user::{Role, User, UserCreate, UserInfo, UserUpdate};
