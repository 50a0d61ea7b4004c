//! Server state
//!
//! [`ServerState`] wires the whole dependency graph explicitly: stores are
//! constructed once, handed to repositories, and everything downstream
//! receives its collaborators rather than reaching for globals. Cloning is
//! cheap: repositories and services share `Arc` handles.

use std::sync::Arc;

use anyhow::Context;

use crate::auth::{AuthService, JwtService};
use crate::core::Config;
use crate::db::models::{Employee, User};
use crate::db::repository::{EmployeeRepository, UserRepository};
use crate::db::store::{JsonStore, StoreHandle};

#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// JWT token service
    pub jwt: Arc<JwtService>,
    /// Authentication service
    pub auth: AuthService,
    /// User repository
    pub users: UserRepository,
    /// Employee repository
    pub employees: EmployeeRepository,
}

impl ServerState {
    /// Initialize state with file-backed stores under `config.data_dir`
    ///
    /// Primes both collections so first-run documents exist (the user
    /// collection seeds the two default users) before the server accepts
    /// requests.
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let seed = User::seed_defaults()
            .map_err(|e| anyhow::anyhow!("Failed to hash seed passwords: {e}"))?;

        let user_store: StoreHandle<User> =
            Arc::new(JsonStore::with_seed(&config.data_dir, "users", seed));
        let employee_store: StoreHandle<Employee> =
            Arc::new(JsonStore::new(&config.data_dir, "employees"));

        user_store
            .load()
            .await
            .context("Failed to initialize user collection")?;
        employee_store
            .load()
            .await
            .context("Failed to initialize employee collection")?;

        tracing::info!(data_dir = %config.data_dir.display(), "Collections ready");

        Ok(Self::with_stores(config.clone(), user_store, employee_store))
    }

    /// Build state over explicit store handles
    ///
    /// The injection seam: production passes [`JsonStore`]s, tests pass
    /// in-memory stores.
    pub fn with_stores(
        config: Config,
        user_store: StoreHandle<User>,
        employee_store: StoreHandle<Employee>,
    ) -> Self {
        let jwt = Arc::new(JwtService::with_config(config.jwt.clone()));
        let users = UserRepository::new(user_store);
        let employees = EmployeeRepository::new(employee_store);
        let auth = AuthService::new(users.clone(), jwt.clone());

        Self {
            config,
            jwt,
            auth,
            users,
            employees,
        }
    }
}
