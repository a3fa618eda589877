pub mod auth;
pub mod cookie;
pub mod json;
