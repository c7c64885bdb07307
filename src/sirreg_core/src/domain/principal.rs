use super::role::Role;

/// The authenticated identity attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    username: String,
    roles: Vec<Role>,
}

impl Principal {
    pub fn new(username: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            username: username.into(),
            roles,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Role set rendered as `[USER, ADMIN]` for log lines.
    pub fn roles_display(&self) -> String {
        let roles: Vec<&str> = self.roles.iter().map(AsRef::as_ref).collect();
        format!("[{}]", roles.join(", "))
    }
}

/// Authentication state of a request, handed explicitly to whoever needs it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthContext {
    Authenticated(Principal),
    #[default]
    Anonymous,
}

impl AuthContext {
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            AuthContext::Authenticated(principal) => Some(principal),
            AuthContext::Anonymous => None,
        }
    }
}
