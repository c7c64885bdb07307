use std::net::SocketAddr;

use sirreg_core::{AuthContext, ClientAddress};

/// Login audit use case - records who logged in and from where.
///
/// Runs after the session layer already let the request through. It performs
/// no access control and cannot fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginAuditUseCase;

impl LoginAuditUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Execute the login audit use case
    ///
    /// # Arguments
    /// * `context` - Authentication state of the request
    /// * `forwarded_for` - Raw `X-Forwarded-For` header value, if any
    /// * `peer` - Transport level peer address, if known
    #[tracing::instrument(name = "LoginAuditUseCase::execute", skip_all)]
    pub fn execute(
        &self,
        context: &AuthContext,
        forwarded_for: Option<&str>,
        peer: Option<SocketAddr>,
    ) {
        let Some(principal) = context.principal() else {
            tracing::warn!("Login attempt failed: no valid authentication detected");
            return;
        };

        let address = ClientAddress::resolve(forwarded_for, peer);

        tracing::info!(
            username = %principal.username(),
            ip_address = %address,
            roles = %principal.roles_display(),
            "Successful login"
        );
    }
}
