pub mod auth;
pub mod car;
pub mod order;
pub mod user;
