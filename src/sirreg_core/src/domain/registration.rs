use chrono::NaiveDate;
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use super::{
    email::Email,
    gender::Gender,
    password::Password,
    phone::Phone,
    user::{NewUser, UserError},
    username::Username,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw registration form as submitted by the browser.
///
/// Every field is optional on the wire so that a missing input surfaces as a
/// "required" validation error instead of a rejected request.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "empty_secret")]
    pub password: Secret<String>,
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub gender: String,
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: empty_secret(),
            dob: String::new(),
            phone: String::new(),
            gender: String::new(),
        }
    }
}

impl RegistrationForm {
    /// Check every field and collect all failures in field order.
    pub fn validate(&self) -> Result<NewUser, ValidationErrors> {
        let username = Username::try_from(self.username.clone());
        let email = Email::try_from(self.email.clone());
        let password = Password::try_from(self.password.clone());
        let dob = parse_date_of_birth(&self.dob);
        let phone = Phone::try_from(self.phone.clone());
        let gender = self.gender.parse::<Gender>();

        match (username, email, password, dob, phone, gender) {
            (Ok(username), Ok(email), Ok(password), Ok(dob), Ok(phone), Ok(gender)) => {
                Ok(NewUser::new(username, email, password, dob, phone, gender))
            }
            (username, email, password, dob, phone, gender) => {
                let errors = [
                    username.err(),
                    email.err(),
                    password.err(),
                    dob.err(),
                    phone.err(),
                    gender.err(),
                ]
                .into_iter()
                .flatten()
                .collect();

                Err(ValidationErrors(errors))
            }
        }
    }
}

fn join_messages(errors: &[UserError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn parse_date_of_birth(value: &str) -> Result<NaiveDate, UserError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(UserError::MissingDateOfBirth);
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| UserError::InvalidDateOfBirth)
}

/// All field-level failures of one registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.0))]
pub struct ValidationErrors(Vec<UserError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[UserError] {
        &self.0
    }

    pub fn for_field(&self, field: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|error| error.field() == field)
            .map(ToString::to_string)
            .collect()
    }
}
