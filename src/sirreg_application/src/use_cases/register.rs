use sirreg_core::{RegistrationForm, User, UserStore, UserStoreError, ValidationErrors};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("{0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Register use case - validates a registration form and stores the user
pub struct RegisterUseCase<U>
where
    U: UserStore,
{
    user_store: U,
}

impl<U> RegisterUseCase<U>
where
    U: UserStore,
{
    pub fn new(user_store: U) -> Self {
        Self { user_store }
    }

    /// Execute the register use case
    ///
    /// Every field is validated before the store is touched. A form with any
    /// validation error never reaches the store.
    ///
    /// # Returns
    /// The stored user, or the validation errors / store failure
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(&self, form: &RegistrationForm) -> Result<User, RegisterError> {
        tracing::info!(username = %form.username, "Registration attempt");

        let new_user = form.validate().inspect_err(|errors| {
            tracing::error!(errors = %errors, "Validation errors");
        })?;

        let user = self.user_store.add_user(new_user).await.inspect_err(|e| {
            tracing::error!(reason = %e, "Registration failed");
        })?;

        tracing::info!(
            username = %user.username(),
            email = %user.email(),
            phone = %user.phone(),
            gender = %user.gender(),
            "Registration successful"
        );

        Ok(user)
    }
}
