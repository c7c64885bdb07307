pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    client_address::ClientAddress,
    email::Email,
    gender::Gender,
    password::Password,
    phone::Phone,
    principal::{AuthContext, Principal},
    registration::{RegistrationForm, ValidationErrors},
    role::Role,
    user::{NewUser, User, UserError, UserId},
    username::Username,
};

pub use ports::repositories::{UniqueField, UserStore, UserStoreError};
