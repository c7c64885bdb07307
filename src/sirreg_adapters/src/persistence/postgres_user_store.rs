use chrono::NaiveDate;
use secrecy::{ExposeSecret, Secret};
use sirreg_core::{
    Email, Gender, NewUser, Password, Phone, Principal, Role, UniqueField, User, UserId,
    UserStore, UserStoreError, Username,
};
use sqlx::{PgPool, migrate::MigrateError};

use super::password::{compute_password_hash, verify_password_hash};

/// Apply the bundled schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    dob: NaiveDate,
    phone: String,
    gender: String,
    role: String,
}

impl UserRow {
    fn into_user(self) -> Result<User, UserStoreError> {
        let unexpected = |e: sirreg_core::UserError| UserStoreError::UnexpectedError(e.to_string());

        Ok(User::new(
            UserId::new(self.id),
            Username::try_from(self.username).map_err(unexpected)?,
            Email::try_from(self.email).map_err(unexpected)?,
            self.dob,
            Phone::try_from(self.phone).map_err(unexpected)?,
            self.gender.parse::<Gender>().map_err(unexpected)?,
            Role::new(self.role),
        ))
    }
}

fn conflicting_field(constraint: &str) -> Option<UniqueField> {
    match constraint {
        "users_username_key" => Some(UniqueField::Username),
        "users_email_key" => Some(UniqueField::Email),
        "users_phone_key" => Some(UniqueField::Phone),
        _ => None,
    }
}

fn map_insert_error(e: sqlx::Error) -> UserStoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            if let Some(field) = db_err.constraint().and_then(conflicting_field) {
                return UserStoreError::AlreadyExists(field);
            }
        }
    }
    UserStoreError::UnexpectedError(e.to_string())
}

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }

    async fn fetch_row(&self, username: &Username) -> Result<UserRow, UserStoreError> {
        sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, email, password_hash, dob, phone, gender, role
                FROM users
                WHERE username = $1
            "#,
        )
        .bind(username.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?
        .ok_or(UserStoreError::UserNotFound)
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError> {
        let password_hash = compute_password_hash(user.password().clone())
            .await
            .map_err(UserStoreError::UnexpectedError)?;

        let id: i64 = sqlx::query_scalar(
            r#"
                INSERT INTO users (username, email, password_hash, dob, phone, gender, role)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id
            "#,
        )
        .bind(user.username().as_ref())
        .bind(user.email().as_ref())
        .bind(password_hash.expose_secret())
        .bind(user.dob())
        .bind(user.phone().as_ref())
        .bind(user.gender().as_str())
        .bind(user.role().as_ref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(user.into_user(UserId::new(id)))
    }

    #[tracing::instrument(name = "Validating user credentials in PostgreSQL", skip_all)]
    async fn authenticate_user(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<Principal, UserStoreError> {
        let row = self.fetch_row(username).await?;

        verify_password_hash(Secret::new(row.password_hash.clone()), password.clone())
            .await
            .map_err(|_| UserStoreError::IncorrectPassword)?;

        let user = row.into_user()?;
        Ok(Principal::new(
            user.username().as_ref(),
            vec![user.role().clone()],
        ))
    }
}
