pub mod session;

pub use session::{
    Claims, SessionConfig, SessionError, auth_context, create_removal_cookie,
    create_session_cookie, generate_session_cookie, generate_session_token,
    validate_session_token,
};
