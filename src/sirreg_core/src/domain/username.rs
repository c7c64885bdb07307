use std::fmt;

use super::user::UserError;

const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl TryFrom<String> for Username {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(UserError::MissingUsername);
        }

        let length = value.chars().count();
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(UserError::InvalidUsernameLength);
        }

        Ok(Self(value))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
