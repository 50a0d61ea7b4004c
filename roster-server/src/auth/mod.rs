//! Authentication and Authorization
//!
//! JWT + argon2 auth stack:
//!
//! - [`jwt`]: token configuration, issuance, and validation
//! - [`service`]: login / register / profile operations
//! - [`middleware`]: the request-level access-control gate
//! - [`extractor`]: `CurrentUser` as an axum extractor

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod service;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{optional_auth, require_admin, require_auth};
pub use service::{AuthService, LoginData, LoginRequest, RegisterRequest};
