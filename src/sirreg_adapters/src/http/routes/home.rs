use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use sirreg_core::AuthContext;

use super::{LOGIN_PATH, error::WebError};
use crate::{
    authentication::{SessionConfig, auth_context},
    http::views::{HomeView, render},
};

#[tracing::instrument(name = "Home", skip_all)]
pub async fn home(
    State(session): State<SessionConfig>,
    jar: CookieJar,
) -> Result<Response, WebError> {
    match auth_context(&jar, &session) {
        AuthContext::Authenticated(principal) => {
            Ok(render(&HomeView::from(&principal))?.into_response())
        }
        AuthContext::Anonymous => Ok(Redirect::to(LOGIN_PATH).into_response()),
    }
}
