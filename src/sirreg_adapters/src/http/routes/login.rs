use axum::{
    Form,
    extract::{Query, State},
    response::{Html, Redirect},
};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::Deserialize;
use sirreg_application::{LoginError, LoginUseCase};
use sirreg_core::UserStore;

use super::{INVALID_CREDENTIALS, LOGIN_SUCCESS_PATH, error::WebError, login_redirect};
use crate::{
    authentication::{SessionConfig, generate_session_cookie},
    http::views::{LoginView, render},
};

/// Notices the login page can display.
#[derive(Debug, Default, Deserialize)]
pub struct LoginPageQuery {
    pub success: Option<String>,
    pub error: Option<String>,
    pub logout: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default = "empty_secret")]
    pub password: Secret<String>,
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

#[tracing::instrument(name = "Login page", skip_all)]
pub async fn login_page(Query(query): Query<LoginPageQuery>) -> Result<Html<String>, WebError> {
    tracing::info!("Accessing login page");

    render(&LoginView {
        success: query.success,
        error: query.error,
        logout: query.logout,
    })
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<U>(
    State((user_store, session)): State<(U, SessionConfig)>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<(CookieJar, Redirect), WebError>
where
    U: UserStore + Clone + 'static,
{
    let use_case = LoginUseCase::new(user_store);

    match use_case.execute(form.username, form.password).await {
        Ok(principal) => {
            let cookie = generate_session_cookie(&principal, &session)?;
            Ok((jar.add(cookie), Redirect::to(LOGIN_SUCCESS_PATH)))
        }
        Err(e) => {
            match &e {
                LoginError::InvalidCredentials => tracing::warn!(reason = %e, "Login rejected"),
                LoginError::UserStoreError(_) => tracing::error!(reason = %e, "Login failed"),
            }
            Ok((jar, login_redirect("error", INVALID_CREDENTIALS)))
        }
    }
}
