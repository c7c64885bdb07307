use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

const MIN_LENGTH: usize = 6;

#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let exposed = value.expose_secret();
        if exposed.trim().is_empty() {
            return Err(UserError::MissingPassword);
        }

        if exposed.chars().count() < MIN_LENGTH {
            return Err(UserError::PasswordTooShort);
        }

        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}
