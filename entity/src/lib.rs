//! SeaORM entity definitions for the rental database.
//!
//! Each module maps one table. Entities are plain data; conversion into domain
//! models happens in the server's data layer.

pub mod prelude;

pub mod car;
pub mod rental_order;
pub mod user;
