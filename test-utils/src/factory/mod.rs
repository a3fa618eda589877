//! Factories inserting test rows with sensible defaults.
//!
//! Each factory exposes a builder for customizing fields plus shorthand
//! functions for the common case. Unique values (emails, ids) come from a shared
//! counter so factories can be called repeatedly inside one test.

pub mod car;
pub mod helpers;
pub mod rental_order;
pub mod user;
