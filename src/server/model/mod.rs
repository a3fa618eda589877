//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Stored enumerations (roles, order
//! statuses) are parsed here so services only ever see valid values.

pub mod car;
pub mod order;
pub mod user;
