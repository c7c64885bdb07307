//! Helpers shared by the use case tests.

use std::{
    collections::HashMap,
    io,
    sync::{
        Arc, Mutex,
        atomic::{AtomicI64, AtomicUsize, Ordering},
    },
};

use secrecy::ExposeSecret;
use sirreg_core::{
    NewUser, Password, Principal, UniqueField, User, UserId, UserStore, UserStoreError, Username,
};
use tokio::sync::RwLock;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// Captures formatted log output for assertions.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Route the current thread's logs into a fresh buffer until the guard drops.
    pub fn capture() -> (Self, DefaultGuard) {
        let buffer = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (buffer, guard)
    }

    pub fn contents(&self) -> String {
        let bytes = self.0.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

// Mock user store for testing
#[derive(Clone, Default)]
pub struct MockUserStore {
    users: Arc<RwLock<HashMap<String, (User, String)>>>,
    next_id: Arc<AtomicI64>,
    add_calls: Arc<AtomicUsize>,
}

impl MockUserStore {
    pub fn add_calls(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        let mut users = self.users.write().await;

        for (existing, _) in users.values() {
            if existing.username() == user.username() {
                return Err(UserStoreError::AlreadyExists(UniqueField::Username));
            }
            if existing.email() == user.email() {
                return Err(UserStoreError::AlreadyExists(UniqueField::Email));
            }
            if existing.phone() == user.phone() {
                return Err(UserStoreError::AlreadyExists(UniqueField::Phone));
            }
        }

        let password = user.password().as_ref().expose_secret().clone();
        let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let user = user.into_user(id);
        users.insert(user.username().to_string(), (user.clone(), password));
        Ok(user)
    }

    async fn authenticate_user(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<Principal, UserStoreError> {
        let users = self.users.read().await;
        let (user, stored) = users
            .get(username.as_ref())
            .ok_or(UserStoreError::UserNotFound)?;

        if stored != password.as_ref().expose_secret() {
            return Err(UserStoreError::IncorrectPassword);
        }

        Ok(Principal::new(
            user.username().as_ref(),
            vec![user.role().clone()],
        ))
    }
}

/// Store whose every call fails, for error path tests.
#[derive(Clone, Default)]
pub struct FailingUserStore;

#[async_trait::async_trait]
impl UserStore for FailingUserStore {
    async fn add_user(&self, _user: NewUser) -> Result<User, UserStoreError> {
        Err(UserStoreError::UnexpectedError(
            "connection refused".to_string(),
        ))
    }

    async fn authenticate_user(
        &self,
        _username: &Username,
        _password: &Password,
    ) -> Result<Principal, UserStoreError> {
        Err(UserStoreError::UnexpectedError(
            "connection refused".to_string(),
        ))
    }
}
