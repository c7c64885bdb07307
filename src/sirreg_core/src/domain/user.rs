use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use super::{
    email::Email, gender::Gender, password::Password, phone::Phone, role::Role,
    username::Username,
};

/// A single field-level validation failure on a registration candidate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("Username is required")]
    MissingUsername,
    #[error("Username must be between 3 and 50 characters")]
    InvalidUsernameLength,
    #[error("Email is required")]
    MissingEmail,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Password is required")]
    MissingPassword,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Date of Birth is required")]
    MissingDateOfBirth,
    #[error("Date of Birth must be a valid date (YYYY-MM-DD)")]
    InvalidDateOfBirth,
    #[error("Phone number is required")]
    MissingPhone,
    #[error("Phone number must be exactly 10 digits")]
    InvalidPhone,
    #[error("Gender is required")]
    MissingGender,
    #[error("Gender must be Male, Female, or Other")]
    InvalidGender,
}

impl UserError {
    /// Name of the form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingUsername | Self::InvalidUsernameLength => "username",
            Self::MissingEmail | Self::InvalidEmail => "email",
            Self::MissingPassword | Self::PasswordTooShort => "password",
            Self::MissingDateOfBirth | Self::InvalidDateOfBirth => "dob",
            Self::MissingPhone | Self::InvalidPhone => "phone",
            Self::MissingGender | Self::InvalidGender => "gender",
        }
    }
}

/// Identifier assigned by the user store when a user is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registration candidate that passed validation and is ready to be stored.
#[derive(Debug, Clone)]
pub struct NewUser {
    username: Username,
    email: Email,
    password: Password,
    dob: NaiveDate,
    phone: Phone,
    gender: Gender,
    role: Role,
}

impl NewUser {
    pub fn new(
        username: Username,
        email: Email,
        password: Password,
        dob: NaiveDate,
        phone: Phone,
        gender: Gender,
    ) -> Self {
        Self {
            username,
            email,
            password,
            dob,
            phone,
            gender,
            role: Role::default(),
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn dob(&self) -> NaiveDate {
        self.dob
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Attach the identifier handed out by the store. The password stays behind.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            email: self.email,
            dob: self.dob,
            phone: self.phone,
            gender: self.gender,
            role: self.role,
        }
    }
}

/// A stored user. Credentials never leave the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: Username,
    email: Email,
    dob: NaiveDate,
    phone: Phone,
    gender: Gender,
    role: Role,
}

impl User {
    pub fn new(
        id: UserId,
        username: Username,
        email: Email,
        dob: NaiveDate,
        phone: Phone,
        gender: Gender,
        role: Role,
    ) -> Self {
        Self {
            id,
            username,
            email,
            dob,
            phone,
            gender,
            role,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn dob(&self) -> NaiveDate {
        self.dob
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn role(&self) -> &Role {
        &self.role
    }
}
