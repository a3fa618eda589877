//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one table each and return domain models from
//! `server::model`. They are generic over `ConnectionTrait` so services can run the same
//! queries on the pooled connection or inside a `DatabaseTransaction`.

pub mod car;
pub mod order;
pub mod user;

#[cfg(test)]
mod test;
