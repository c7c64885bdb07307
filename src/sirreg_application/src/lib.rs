pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use use_cases::{
    login::{LoginError, LoginUseCase},
    login_audit::LoginAuditUseCase,
    register::{RegisterError, RegisterUseCase},
};
