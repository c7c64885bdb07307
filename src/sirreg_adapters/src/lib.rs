pub mod authentication;
pub mod config;
pub mod http;
pub mod persistence;
