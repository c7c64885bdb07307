use std::collections::HashMap;
use std::sync::Arc;

use secrecy::Secret;
use sirreg_core::{
    NewUser, Password, Principal, UniqueField, User, UserId, UserStore, UserStoreError, Username,
};
use tokio::sync::RwLock;

use super::password::{compute_password_hash, verify_password_hash};

struct StoredUser {
    user: User,
    password_hash: Secret<String>,
}

#[derive(Default)]
struct Users {
    by_username: HashMap<Username, StoredUser>,
    last_id: i64,
}

impl Users {
    fn conflict(&self, candidate: &NewUser) -> Option<UniqueField> {
        if self.by_username.contains_key(candidate.username()) {
            return Some(UniqueField::Username);
        }

        let existing = || self.by_username.values().map(|stored| &stored.user);
        if existing().any(|user| user.email() == candidate.email()) {
            return Some(UniqueField::Email);
        }
        if existing().any(|user| user.phone() == candidate.phone()) {
            return Some(UniqueField::Phone);
        }

        None
    }
}

/// In-memory user store, used when no database is configured.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<Users>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    #[tracing::instrument(name = "Adding user to HashMap", skip_all)]
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        if let Some(field) = self.users.read().await.conflict(&user) {
            return Err(UserStoreError::AlreadyExists(field));
        }

        let password_hash = compute_password_hash(user.password().clone())
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        // Re-check under the write lock, a concurrent insert may have won.
        let mut users = self.users.write().await;
        if let Some(field) = users.conflict(&user) {
            return Err(UserStoreError::AlreadyExists(field));
        }

        users.last_id += 1;
        let user = user.into_user(UserId::new(users.last_id));
        users.by_username.insert(
            user.username().clone(),
            StoredUser {
                user: user.clone(),
                password_hash,
            },
        );

        Ok(user)
    }

    #[tracing::instrument(name = "Validating user credentials in HashMap", skip_all)]
    async fn authenticate_user(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<Principal, UserStoreError> {
        let (user, password_hash) = {
            let users = self.users.read().await;
            let stored = users
                .by_username
                .get(username)
                .ok_or(UserStoreError::UserNotFound)?;
            (stored.user.clone(), stored.password_hash.clone())
        };

        verify_password_hash(password_hash, password.clone())
            .await
            .map_err(|_| UserStoreError::IncorrectPassword)?;

        Ok(Principal::new(
            user.username().as_ref(),
            vec![user.role().clone()],
        ))
    }
}
