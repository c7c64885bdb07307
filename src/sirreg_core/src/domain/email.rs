use std::{fmt, sync::LazyLock};

use regex::Regex;

use super::user::UserError;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+'\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*$")
        .expect("email pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl TryFrom<String> for Email {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(UserError::MissingEmail);
        }

        if !EMAIL_REGEX.is_match(&value) {
            return Err(UserError::InvalidEmail);
        }

        Ok(Self(value))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
