use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    password::Password,
    principal::Principal,
    user::{NewUser, User},
    username::Username,
};

/// Columns that must be unique across all users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Username,
    Email,
    Phone,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UniqueField::Username => "Username",
            UniqueField::Email => "Email",
            UniqueField::Phone => "Phone number",
        };
        f.write_str(name)
    }
}

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("{0} already exists")]
    AlreadyExists(UniqueField),
    #[error("User not found")]
    UserNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::AlreadyExists(a), Self::AlreadyExists(b)) => a == b,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::IncorrectPassword, Self::IncorrectPassword) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a validated user. Username, email and phone must be unused.
    async fn add_user(&self, user: NewUser) -> Result<User, UserStoreError>;
    async fn authenticate_user(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<Principal, UserStoreError>;
}
