//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod item_files;
pub mod memory_shops;
pub mod ports;
