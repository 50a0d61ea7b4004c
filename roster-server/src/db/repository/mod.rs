//! Repository Module
//!
//! Typed CRUD operations over record stores. Every operation is one full
//! load-mutate-save cycle against the backing collection; repositories
//! never cache state between calls.

pub mod employee;
pub mod user;

pub use employee::{EmployeeQuery, EmployeeRepository, StatusFilter};
pub use user::UserRepository;

use serde::Serialize;
use thiserror::Error;

use crate::db::store::StoreError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for RepoError {
    fn from(err: StoreError) -> Self {
        RepoError::Storage(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Pagination block returned alongside list data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// One page of a filtered collection
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}
