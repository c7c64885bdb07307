pub mod helpers;
pub mod sirreg_service;
pub mod tracing;

pub use helpers::{configure_postgresql, get_postgres_pool};
pub use sirreg_service::SirRegService;
