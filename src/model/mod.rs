//! Wire DTOs exchanged with API clients.
//!
//! These types only describe the JSON shape of requests and responses. Domain
//! models in `server::model` convert into them at the controller boundary.

pub mod api;
pub mod auth;
pub mod car;
pub mod order;
pub mod user;
