use std::{fmt, sync::LazyLock};

use regex::Regex;

use super::user::UserError;

// ASCII digits only, `\d` would also admit other Unicode decimal digits.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl TryFrom<String> for Phone {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(UserError::MissingPhone);
        }

        if !PHONE_REGEX.is_match(&value) {
            return Err(UserError::InvalidPhone);
        }

        Ok(Self(value))
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
