// DTOs for Product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPatch {
    pub quantity: Option<u32>,
    pub price: Option<f64>,
}

impl ProductPatch {
    /// Patch replacing both stock-level fields, as an inventory update does.
    pub fn stock(quantity: u32, price: f64) -> Self {
        Self {
            quantity: Some(quantity),
            price: Some(price),
        }
    }
}
