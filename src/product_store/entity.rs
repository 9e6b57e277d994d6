use crate::store_framework::Entity;
use crate::domain::Product;
use super::dtos::ProductPatch;

impl Entity for Product {
    type Id = String;
    type Patch = ProductPatch;

    fn id(&self) -> &String { &self.id }

    /// Updates the product's quantity and/or price.
    ///
    /// # Fields Updated
    /// - `quantity`: Available stock quantity
    /// - `price`: Unit price
    ///
    /// The identifier and display name never change here.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_update_only_touches_given_fields() {
        let mut product = Product::new("P002", "Monitor", 15, 12000.0);
        product.on_update(ProductPatch { quantity: Some(20), price: None }).unwrap();
        assert_eq!(product, Product::new("P002", "Monitor", 20, 12000.0));

        product.on_update(ProductPatch::stock(5, 11500.0)).unwrap();
        assert_eq!(product, Product::new("P002", "Monitor", 5, 11500.0));
    }

    #[test]
    fn test_any_identifier_is_accepted_on_insert() {
        assert!(Product::new("", "Nameless", 1, 1.0).on_insert().is_ok());
        assert!(Product::new("P001", "Laptop", 1, 1.0).on_insert().is_ok());
    }
}
