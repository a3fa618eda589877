//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They resolve
//! references, enforce booking rules, open transactions around multi-step writes and
//! work with domain models rather than DTOs or entity models.

pub mod auth;
pub mod car;
pub mod order;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
