//! Server-rendered pages.
//!
//! Views carry plain, precomputed data so templates only branch and loop.

use askama::Template;
use axum::response::Html;
use sirreg_core::{Gender, Principal, RegistrationForm, ValidationErrors};

use super::routes::error::WebError;

pub fn render<T: Template>(view: &T) -> Result<Html<String>, WebError> {
    Ok(Html(view.render()?))
}

#[derive(Template, Debug, Default)]
#[template(path = "login.html")]
pub struct LoginView {
    pub success: Option<String>,
    pub error: Option<String>,
    pub logout: Option<String>,
}

/// Submitted values echoed back into the registration form. The password is
/// never echoed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegisterFormValues {
    pub username: String,
    pub email: String,
    pub dob: String,
    pub phone: String,
}

impl From<&RegistrationForm> for RegisterFormValues {
    fn from(form: &RegistrationForm) -> Self {
        Self {
            username: form.username.clone(),
            email: form.email.clone(),
            dob: form.dob.clone(),
            phone: form.phone.clone(),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Vec<String>,
    pub email: Vec<String>,
    pub password: Vec<String>,
    pub dob: Vec<String>,
    pub phone: Vec<String>,
    pub gender: Vec<String>,
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            username: errors.for_field("username"),
            email: errors.for_field("email"),
            password: errors.for_field("password"),
            dob: errors.for_field("dob"),
            phone: errors.for_field("phone"),
            gender: errors.for_field("gender"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderOption {
    pub value: &'static str,
    pub selected: bool,
}

fn gender_options(selected: &str) -> Vec<GenderOption> {
    Gender::ALL
        .iter()
        .map(|gender| GenderOption {
            value: gender.as_str(),
            selected: gender.as_str() == selected,
        })
        .collect()
}

#[derive(Template, Debug)]
#[template(path = "register.html")]
pub struct RegisterView {
    pub form: RegisterFormValues,
    pub genders: Vec<GenderOption>,
    pub errors: FieldErrors,
    pub error: Option<String>,
}

impl RegisterView {
    /// Blank form for a first visit.
    pub fn empty() -> Self {
        Self::from_form(&RegistrationForm::default())
    }

    pub fn from_form(form: &RegistrationForm) -> Self {
        Self {
            form: RegisterFormValues::from(form),
            genders: gender_options(&form.gender),
            errors: FieldErrors::default(),
            error: None,
        }
    }

    pub fn with_field_errors(mut self, errors: &ValidationErrors) -> Self {
        self.errors = FieldErrors::from(errors);
        self
    }

    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

#[derive(Template, Debug)]
#[template(path = "home.html")]
pub struct HomeView {
    pub username: String,
    pub roles: String,
}

impl From<&Principal> for HomeView {
    fn from(principal: &Principal) -> Self {
        Self {
            username: principal.username().to_string(),
            roles: principal.roles_display(),
        }
    }
}
