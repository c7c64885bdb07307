use std::fmt;

const DEFAULT_ROLE: &str = "USER";

/// Granted authority. Every registrant starts out as `USER`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Role(String);

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl Default for Role {
    fn default() -> Self {
        Self(DEFAULT_ROLE.to_string())
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
