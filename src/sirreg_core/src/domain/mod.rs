pub mod client_address;
pub mod email;
pub mod gender;
pub mod password;
pub mod phone;
pub mod principal;
pub mod registration;
pub mod role;
pub mod user;
pub mod username;
