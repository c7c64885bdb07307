use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    response::Redirect,
};
use axum_extra::extract::CookieJar;
use sirreg_application::LoginAuditUseCase;

use super::HOME_PATH;
use crate::authentication::{SessionConfig, auth_context};

const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Audit hook run after a form login. Never blocks the request.
#[tracing::instrument(name = "Login success", skip_all)]
pub async fn login_success(State(session): State<SessionConfig>, request: Request) -> Redirect {
    let jar = CookieJar::from_headers(request.headers());
    let context = auth_context(&jar, &session);

    let forwarded_for = request
        .headers()
        .get(X_FORWARDED_FOR)
        .and_then(|value| value.to_str().ok());
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);

    LoginAuditUseCase::new().execute(&context, forwarded_for, peer);

    Redirect::to(HOME_PATH)
}
