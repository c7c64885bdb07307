use axum::{extract::State, response::Redirect};
use axum_extra::extract::CookieJar;

use super::{LOGGED_OUT, login_redirect};
use crate::authentication::{SessionConfig, create_removal_cookie};

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout(State(session): State<SessionConfig>, jar: CookieJar) -> (CookieJar, Redirect) {
    tracing::info!("Session ended");

    (
        jar.add(create_removal_cookie(&session)),
        login_redirect("logout", LOGGED_OUT),
    )
}
