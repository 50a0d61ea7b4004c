//! User Repository

use chrono::Utc;
use uuid::Uuid;

use super::{RepoError, RepoResult};
use crate::db::models::{User, UserCreate, UserUpdate};
use crate::db::store::StoreHandle;

#[derive(Clone)]
pub struct UserRepository {
    store: StoreHandle<User>,
}

impl UserRepository {
    pub fn new(store: StoreHandle<User>) -> Self {
        Self { store }
    }

    /// All users in insertion order
    pub async fn find_all(&self) -> RepoResult<Vec<User>> {
        Ok(self.store.load().await?)
    }

    /// Find user by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let users = self.store.load().await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    /// Find user by username (case-sensitive exact match)
    pub async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let users = self.store.load().await?;
        Ok(users.into_iter().find(|u| u.username == username))
    }

    /// Find user by email (case-sensitive exact match)
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let users = self.store.load().await?;
        Ok(users.into_iter().find(|u| u.email == email))
    }

    /// Create a new user
    pub async fn create(&self, data: UserCreate) -> RepoResult<User> {
        let mut users = self.store.load().await?;

        if users.iter().any(|u| u.username == data.username) {
            return Err(RepoError::Duplicate("Username already exists".to_string()));
        }
        if users.iter().any(|u| u.email == data.email) {
            return Err(RepoError::Duplicate("Email already exists".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4().to_string(),
            username: data.username,
            email: data.email,
            password_hash: data.password_hash,
            full_name: data.full_name,
            role: data.role,
            created_at: now,
            updated_at: now,
        };

        users.push(user.clone());
        self.store.save(&users).await?;
        Ok(user)
    }

    /// Update a user with merge semantics; absent fields stay untouched
    pub async fn update(&self, id: &str, data: UserUpdate) -> RepoResult<User> {
        let mut users = self.store.load().await?;

        let index = users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))?;

        // Uniqueness checks exclude the record being updated
        if let Some(ref username) = data.username
            && users.iter().any(|u| u.id != id && &u.username == username)
        {
            return Err(RepoError::Duplicate("Username already exists".to_string()));
        }
        if let Some(ref email) = data.email
            && users.iter().any(|u| u.id != id && &u.email == email)
        {
            return Err(RepoError::Duplicate("Email already exists".to_string()));
        }

        let user = &mut users[index];
        if let Some(username) = data.username {
            user.username = username;
        }
        if let Some(email) = data.email {
            user.email = email;
        }
        if let Some(password_hash) = data.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(full_name) = data.full_name {
            user.full_name = full_name;
        }
        if let Some(role) = data.role {
            user.role = role;
        }
        user.updated_at = Utc::now();

        let updated = user.clone();
        self.store.save(&users).await?;
        Ok(updated)
    }

    /// Hard delete a user
    pub async fn delete(&self, id: &str) -> RepoResult<()> {
        let mut users = self.store.load().await?;
        let before = users.len();
        users.retain(|u| u.id != id);

        if users.len() == before {
            return Err(RepoError::NotFound(format!("User {id} not found")));
        }

        self.store.save(&users).await?;
        Ok(())
    }

    /// Size of the full collection
    pub async fn count(&self) -> RepoResult<usize> {
        Ok(self.store.load().await?.len())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::db::models::Role;
    use crate::db::store::MemoryStore;

    fn sample(name: &str) -> UserCreate {
        UserCreate {
            username: name.to_string(),
            email: format!("{name}@example.com"),
            password_hash: "$argon2$fake".to_string(),
            full_name: format!("{name} full"),
            role: Role::User,
        }
    }

    fn repo() -> UserRepository {
        UserRepository::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn create_and_lookup() {
        let repo = repo();
        let created = repo.create(sample("john")).await.expect("create");

        let by_id = repo.find_by_id(&created.id).await.expect("find");
        assert!(by_id.is_some());

        let by_username = repo.find_by_username("john").await.expect("find");
        assert_eq!(by_username.expect("present").id, created.id);

        let by_email = repo.find_by_email("john@example.com").await.expect("find");
        assert_eq!(by_email.expect("present").id, created.id);

        // Lookups are case-sensitive exact matches
        assert!(repo.find_by_username("John").await.expect("find").is_none());
    }

    #[tokio::test]
    async fn uniqueness_is_enforced_on_create_and_update() {
        let repo = repo();
        repo.create(sample("john")).await.expect("create");
        let jane = repo.create(sample("jane")).await.expect("create");

        let err = repo.create(sample("john")).await.expect_err("duplicate");
        assert!(matches!(err, RepoError::Duplicate(_)));

        let err = repo
            .update(
                &jane.id,
                UserUpdate {
                    email: Some("john@example.com".to_string()),
                    ..UserUpdate::default()
                },
            )
            .await
            .expect_err("duplicate email");
        assert!(matches!(err, RepoError::Duplicate(ref msg) if msg.contains("Email")));

        // Updating a record with its own values is fine
        let ok = repo
            .update(
                &jane.id,
                UserUpdate {
                    username: Some("jane".to_string()),
                    ..UserUpdate::default()
                },
            )
            .await;
        assert!(ok.is_ok());
    }

    #[tokio::test]
    async fn update_merges_and_delete_removes() {
        let repo = repo();
        let created = repo.create(sample("john")).await.expect("create");

        let updated = repo
            .update(
                &created.id,
                UserUpdate {
                    role: Some(Role::Admin),
                    ..UserUpdate::default()
                },
            )
            .await
            .expect("update");
        assert_eq!(updated.role, Role::Admin);
        assert_eq!(updated.username, "john");

        repo.delete(&created.id).await.expect("delete");
        assert!(matches!(
            repo.delete(&created.id).await,
            Err(RepoError::NotFound(_))
        ));
        assert_eq!(repo.count().await.expect("count"), 0);
    }
}
