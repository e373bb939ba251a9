//! In-memory repository for tests

use chrono::Utc;
use kernel::id::UserId;
use kernel::page::Page;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::domain::entity::user::{NewUser, User, UserCredentials};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};
use crate::error::{UserError, UserResult};

struct StoredUser {
    user: User,
    password_hash: String,
}

#[derive(Default)]
struct State {
    next_id: i64,
    rows: BTreeMap<i64, StoredUser>,
}

/// Keeps the hash in its encoded form so tests can corrupt it, and enforces
/// the same unique constraints as the `users` table.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<Mutex<State>>,
}

impl InMemoryUserRepository {
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }

    pub fn stored_hash(&self, id: UserId) -> Option<String> {
        let state = self.state.lock().unwrap();
        state.rows.get(&id.get()).map(|row| row.password_hash.clone())
    }

    pub fn overwrite_hash(&self, username: &str, encoded: &str) {
        let mut state = self.state.lock().unwrap();
        for row in state.rows.values_mut() {
            if row.user.username.as_str() == username {
                row.password_hash = encoded.to_string();
            }
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> UserResult<User> {
        let mut state = self.state.lock().unwrap();
        let taken = state
            .rows
            .values()
            .any(|row| row.user.username == user.username || row.user.email == user.email);
        if taken {
            return Err(UserError::AlreadyExists);
        }

        state.next_id += 1;
        let id = state.next_id;
        let created = User {
            id: UserId::from_i64(id),
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: Utc::now(),
        };
        state.rows.insert(
            id,
            StoredUser {
                user: created.clone(),
                password_hash: user.password_hash.as_str().to_string(),
            },
        );
        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.get(&id.get()).map(|row| row.user.clone()))
    }

    async fn list(&self, page: Page) -> UserResult<Vec<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .rows
            .values()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .map(|row| row.user.clone())
            .collect())
    }

    async fn delete(&self, id: UserId) -> UserResult<bool> {
        Ok(self.state.lock().unwrap().rows.remove(&id.get()).is_some())
    }

    async fn update_password_hash(
        &self,
        id: UserId,
        password_hash: &UserPassword,
    ) -> UserResult<()> {
        let mut state = self.state.lock().unwrap();
        let row = state.rows.get_mut(&id.get()).ok_or(UserError::NotFound)?;
        row.password_hash = password_hash.as_str().to_string();
        Ok(())
    }

    async fn find_credentials(&self, username: &UserName) -> UserResult<Option<UserCredentials>> {
        let state = self.state.lock().unwrap();
        let Some(row) = state.rows.values().find(|row| &row.user.username == username) else {
            return Ok(None);
        };

        let password_hash = UserPassword::from_db(&row.password_hash)
            .map_err(|_| UserError::CorruptCredential(row.user.id))?;
        Ok(Some(UserCredentials {
            user: row.user.clone(),
            password_hash,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{email::Email, user_password::RawPassword};

    fn new_user(name: &str, hash: &UserPassword) -> NewUser {
        NewUser {
            username: UserName::new(name).unwrap(),
            email: Email::new(format!("{name}@example.com")).unwrap(),
            password_hash: hash.clone(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryUserRepository::default();
        let hash = RawPassword::new("pw".to_string()).unwrap().hash();

        let first = repo.create(&new_user("alice", &hash)).await.unwrap();
        let second = repo.create(&new_user("bob", &hash)).await.unwrap();

        assert_eq!(first.id.get(), 1);
        assert_eq!(second.id.get(), 2);
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.stored_hash(second.id).as_deref(), Some(hash.as_str()));
    }

    #[tokio::test]
    async fn test_update_password_hash_unknown_user() {
        let repo = InMemoryUserRepository::default();
        let hash = RawPassword::new("pw".to_string()).unwrap().hash();

        let err = repo
            .update_password_hash(UserId::from_i64(7), &hash)
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::NotFound));
    }
}
