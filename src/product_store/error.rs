use thiserror::Error;

use crate::store_framework::StoreError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),
    #[error("Product rejected: {0}")]
    Rejected(String),
}

impl From<StoreError> for ProductError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ProductError::NotFound(id),
            StoreError::Rejected(reason) => ProductError::Rejected(reason),
        }
    }
}
