//! Port traits for infrastructure boundaries.
//!
//! Shop storage lives behind a port so listings can come from any backing
//! store. Item matching has its own port in [`crate::matching`].

mod error;
mod repos;

pub use error::RepoError;
pub use repos::ShopRepo;

#[cfg(test)]
pub use repos::MockShopRepo;
