//! Product inventory: the `Product` entity, its patches and the typed store.

mod dtos;
pub mod entity;
pub mod error;
pub mod store;

pub use error::*;
pub use store::*;
