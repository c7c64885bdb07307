use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use sirreg_application::{RegisterError, RegisterUseCase};
use sirreg_core::{RegistrationForm, UserStore, UserStoreError};

use super::{REGISTRATION_SUCCESS, error::WebError, login_redirect};
use crate::http::views::{RegisterView, render};

const REGISTRATION_UNAVAILABLE: &str = "Registration failed. Please try again later.";

#[tracing::instrument(name = "Register page", skip_all)]
pub async fn register_page() -> Result<Html<String>, WebError> {
    tracing::info!("Accessing registration page");

    render(&RegisterView::empty())
}

/// Invalid input re-renders the form with `422`, a taken username, email or
/// phone with `409`, and any other store failure with `500`.
#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<U>(
    State(user_store): State<U>,
    Form(form): Form<RegistrationForm>,
) -> Result<Response, WebError>
where
    U: UserStore + Clone + 'static,
{
    let use_case = RegisterUseCase::new(user_store);

    let (status, view) = match use_case.execute(&form).await {
        Ok(_) => return Ok(login_redirect("success", REGISTRATION_SUCCESS).into_response()),
        Err(RegisterError::Validation(errors)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            RegisterView::from_form(&form).with_field_errors(&errors),
        ),
        Err(RegisterError::UserStoreError(e @ UserStoreError::AlreadyExists(_))) => (
            StatusCode::CONFLICT,
            RegisterView::from_form(&form).with_error(e.to_string()),
        ),
        Err(RegisterError::UserStoreError(_)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            RegisterView::from_form(&form).with_error(REGISTRATION_UNAVAILABLE),
        ),
    };

    Ok((status, render(&view)?).into_response())
}
