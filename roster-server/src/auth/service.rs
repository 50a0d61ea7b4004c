//! Authentication Service
//!
//! Credential verification, registration, and profile access over the user
//! repository. Password hashes never leave this layer: every user returned
//! to a caller is the sanitized [`UserInfo`] shape.

use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use tracing::warn;
use validator::Validate;

use crate::auth::jwt::{Claims, JwtService};
use crate::db::models::{Role, User, UserCreate, UserInfo};
use crate::db::repository::UserRepository;
use crate::utils::validation::{validate_role, validate_username_charset};
use crate::utils::{AppError, AppResult};

/// Login request
#[derive(Debug, Clone, serde::Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Register request
#[derive(Debug, Clone, serde::Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(
        length(min = 3, max = 30, message = "Username must be 3-30 characters"),
        custom(function = validate_username_charset)
    )]
    pub username: String,

    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(length(min = 2, max = 100, message = "Full name must be 2-100 characters"))]
    pub full_name: String,

    /// Defaults to `user` when absent
    #[serde(default)]
    #[validate(custom(function = validate_role))]
    pub role: Option<String>,
}

/// Login response data
#[derive(Debug, Clone, Serialize)]
pub struct LoginData {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    jwt: Arc<JwtService>,
}

impl AuthService {
    pub fn new(users: UserRepository, jwt: Arc<JwtService>) -> Self {
        Self { users, jwt }
    }

    /// Authenticate credentials and issue a token
    ///
    /// Unknown username and wrong password fail identically so the response
    /// never reveals which check failed.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<LoginData> {
        let user = match self.users.find_by_username(username).await? {
            Some(user) => user,
            None => {
                warn!(username = %username, "Login failed - user not found");
                return Err(AppError::InvalidCredentials);
            }
        };

        let password_valid = user
            .verify_password(password)
            .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

        if !password_valid {
            warn!(username = %username, "Login failed - invalid credentials");
            return Err(AppError::InvalidCredentials);
        }

        let token = self.jwt.generate_token(&user)?;

        Ok(LoginData {
            token,
            user: user.into(),
        })
    }

    /// Register a new user
    ///
    /// Hashes the plaintext password before delegating to the repository;
    /// uniqueness conflicts propagate unchanged.
    pub async fn register(&self, req: RegisterRequest) -> AppResult<UserInfo> {
        let role = match req.role.as_deref() {
            Some(role) => Role::from_str(role)
                .map_err(|_| AppError::validation("Role must be either admin or user"))?,
            None => Role::User,
        };

        let password_hash = User::hash_password(&req.password)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        let user = self
            .users
            .create(UserCreate {
                username: req.username,
                email: req.email,
                password_hash,
                full_name: req.full_name,
                role,
            })
            .await?;

        Ok(user.into())
    }

    /// Fetch a user profile by id
    pub async fn get_profile(&self, user_id: &str) -> AppResult<UserInfo> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(UserInfo::from)
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Validate a token and return its claims
    pub fn verify_token(&self, token: &str) -> AppResult<Claims> {
        Ok(self.jwt.validate_token(token)?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::auth::JwtConfig;
    use crate::db::MemoryStore;

    fn service() -> AuthService {
        let users = UserRepository::new(Arc::new(MemoryStore::new()));
        let jwt = Arc::new(JwtService::with_config(JwtConfig {
            secret: "service-test-secret-key-0123456789-012".to_string(),
            expiration_minutes: 60,
            issuer: "roster-server".to_string(),
            audience: "roster-clients".to_string(),
        }));
        AuthService::new(users, jwt)
    }

    fn register_request(username: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: "secret123".to_string(),
            full_name: "Test User".to_string(),
            role: None,
        }
    }

    #[tokio::test]
    async fn login_roundtrips_claims() {
        let service = service();
        let registered = service
            .register(register_request("john"))
            .await
            .expect("register");

        let data = service.login("john", "secret123").await.expect("login");
        assert_eq!(data.user.id, registered.id);

        let claims = service.verify_token(&data.token).expect("verify");
        assert_eq!(claims.sub, registered.id);
        assert_eq!(claims.username, "john");
        assert_eq!(claims.email, "john@example.com");
        assert_eq!(claims.role, Role::User);
    }

    #[tokio::test]
    async fn bad_password_and_unknown_user_fail_identically() {
        let service = service();
        service
            .register(register_request("john"))
            .await
            .expect("register");

        let wrong_password = service
            .login("john", "wrong")
            .await
            .expect_err("should fail");
        let unknown_user = service
            .login("nobody", "secret123")
            .await
            .expect_err("should fail");

        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_user, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn register_hashes_and_strips_the_password() {
        let service = service();
        let info = service
            .register(register_request("john"))
            .await
            .expect("register");

        // The sanitized shape has no password field at all
        let json = serde_json::to_value(&info).expect("serialize");
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password").is_none());

        // The stored hash verifies but is not the plaintext
        let stored = service
            .users
            .find_by_id(&info.id)
            .await
            .expect("find")
            .expect("present");
        assert_ne!(stored.password_hash, "secret123");
        assert!(stored.verify_password("secret123").expect("verify"));
    }

    #[tokio::test]
    async fn duplicate_registration_conflicts() {
        let service = service();
        service
            .register(register_request("john"))
            .await
            .expect("register");

        let err = service
            .register(register_request("john"))
            .await
            .expect_err("duplicate");
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn register_accepts_explicit_admin_role() {
        let service = service();
        let info = service
            .register(RegisterRequest {
                role: Some("admin".to_string()),
                ..register_request("boss")
            })
            .await
            .expect("register");
        assert_eq!(info.role, Role::Admin);

        let err = service
            .register(RegisterRequest {
                role: Some("root".to_string()),
                ..register_request("other")
            })
            .await
            .expect_err("bad role");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn profile_of_missing_user_is_not_found() {
        let service = service();
        let err = service.get_profile("missing").await.expect_err("not found");
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
