pub mod login;
pub mod login_audit;
pub mod register;
