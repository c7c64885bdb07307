use secrecy::Secret;
use sirreg_core::{Password, Principal, UserStore, UserStoreError, Username};

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

impl From<UserStoreError> for LoginError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserNotFound | UserStoreError::IncorrectPassword => {
                LoginError::InvalidCredentials
            }
            other => LoginError::UserStoreError(other),
        }
    }
}

/// Login use case - checks form credentials and yields the principal
pub struct LoginUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> LoginUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    /// Execute the login use case
    ///
    /// Credentials that could never have been registered are rejected without
    /// asking the store.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: String,
        password: Secret<String>,
    ) -> Result<Principal, LoginError> {
        let username = Username::try_from(username).map_err(|_| LoginError::InvalidCredentials)?;
        let password = Password::try_from(password).map_err(|_| LoginError::InvalidCredentials)?;

        let principal = self
            .user_store
            .authenticate_user(&username, &password)
            .await?;

        Ok(principal)
    }
}
