//! # SirReg - user registration and login web application
//!
//! Facade crate re-exporting the public API of the workspace crates.
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Email`, `RegistrationForm`, `User`, etc.
//! - **Repository traits**: `UserStore`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `LoginAuditUseCase`
//! - **Adapters**: `HashMapUserStore`, `PostgresUserStore`, session cookies, routes
//! - **Service**: `SirRegService` - the router and standalone server

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use sirreg_core::*;
}

pub use sirreg_core::{
    AuthContext, ClientAddress, Email, Gender, NewUser, Password, Phone, Principal,
    RegistrationForm, Role, User, UserError, UserId, Username, ValidationErrors,
};

// ============================================================================
// Repository Traits (Ports)
// ============================================================================

pub use sirreg_core::{UniqueField, UserStore, UserStoreError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use sirreg_application::*;
}

pub use sirreg_application::{
    LoginAuditUseCase, LoginError, LoginUseCase, RegisterError, RegisterUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers and views
    pub mod http {
        pub use sirreg_adapters::http::*;
    }

    /// User store implementations and password hashing
    pub mod persistence {
        pub use sirreg_adapters::persistence::*;
    }

    /// Session cookie handling
    pub mod authentication {
        pub use sirreg_adapters::authentication::*;
    }

    /// Configuration
    pub mod config {
        pub use sirreg_adapters::config::*;
    }
}

pub use sirreg_adapters::{
    authentication::SessionConfig,
    config::SirRegSettings,
    persistence::{HashMapUserStore, PostgresUserStore},
};

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

pub use sirreg_service::{SirRegService, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing repository traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
