pub mod error;
pub mod home;
pub mod login;
pub mod login_success;
pub mod logout;
pub mod register;

use axum::response::Redirect;

pub use error::WebError;
pub use home::home;
pub use login::{LoginForm, LoginPageQuery, login, login_page};
pub use login_success::login_success;
pub use logout::logout;
pub use register::{register, register_page};

pub const LOGIN_PATH: &str = "/login";
pub const LOGIN_SUCCESS_PATH: &str = "/login-success";
pub const HOME_PATH: &str = "/home";

pub const REGISTRATION_SUCCESS: &str = "Registration successful! Please login.";
pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";
pub const LOGGED_OUT: &str = "You have been logged out.";

/// Redirect to the login page with a single notice in the query string.
pub fn login_redirect(key: &str, message: &str) -> Redirect {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(key, message)
        .finish();
    Redirect::to(&format!("{LOGIN_PATH}?{query}"))
}
