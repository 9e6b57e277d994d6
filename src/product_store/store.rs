use tracing::{debug, instrument};
use crate::domain::Product;
use crate::store_framework::{InsertOutcome, Listing, ResourceStore};
use super::dtos::ProductPatch;
use super::error::ProductError;

/// In-memory product inventory keyed by product identifier.
///
/// Every operation reports its outcome to the caller; nothing is printed here.
/// Missing identifiers come back as [`ProductError::NotFound`] and leave the
/// inventory untouched.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    inner: ResourceStore<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self { inner: ResourceStore::new() }
    }

    /// Adds a product under its identifier, silently replacing any product
    /// already stored under that identifier.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add(&mut self, product: Product) -> Result<InsertOutcome<Product>, ProductError> {
        debug!("Adding product");
        ensure_valid_price(product.price)?;
        Ok(self.inner.insert(product)?)
    }

    /// Replaces quantity and price of an existing product.
    #[instrument(skip(self))]
    pub fn update(&mut self, id: &str, quantity: u32, price: f64) -> Result<&Product, ProductError> {
        debug!("Updating product");
        ensure_valid_price(price)?;
        Ok(self.inner.update(&id.to_string(), ProductPatch::stock(quantity, price))?)
    }

    /// Removes a product and hands it back.
    #[instrument(skip(self))]
    pub fn delete(&mut self, id: &str) -> Result<Product, ProductError> {
        debug!("Deleting product");
        Ok(self.inner.delete(&id.to_string())?)
    }

    #[instrument(skip(self))]
    pub fn list_all(&self) -> Listing<Product> {
        debug!(count = self.len(), "Listing products");
        self.inner.list()
    }

    #[allow(dead_code)]
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.inner.get(&id.to_string())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

fn ensure_valid_price(price: f64) -> Result<(), ProductError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(ProductError::InvalidPrice(price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        Product::new("P001", "Laptop", 10, 75000.0)
    }

    #[test]
    fn test_add_then_list_contains_product_once() {
        let mut store = ProductStore::new();
        assert_eq!(store.add(laptop()), Ok(InsertOutcome::Inserted));

        let listing = store.list_all();
        let matches = listing.items().iter().filter(|p| p.id == "P001").count();
        assert_eq!(matches, 1);
    }

    #[test]
    fn test_add_existing_id_overwrites_all_fields() {
        let mut store = ProductStore::new();
        store.add(laptop()).unwrap();

        let outcome = store.add(Product::new("P001", "Gaming Laptop", 3, 99000.0)).unwrap();
        assert_eq!(outcome, InsertOutcome::Replaced(laptop()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("P001"), Some(&Product::new("P001", "Gaming Laptop", 3, 99000.0)));
    }

    #[test]
    fn test_update_replaces_quantity_and_price() {
        let mut store = ProductStore::new();
        store.add(laptop()).unwrap();

        let updated = store.update("P001", 20, 11500.0).unwrap();
        assert_eq!(updated, &Product::new("P001", "Laptop", 20, 11500.0));
    }

    #[test]
    fn test_update_missing_reports_not_found() {
        let mut store = ProductStore::new();
        store.add(laptop()).unwrap();

        assert_eq!(store.update("P404", 1, 1.0), Err(ProductError::NotFound("P404".into())));
        assert_eq!(store.list_all(), Listing::Items(vec![laptop()]));
    }

    #[test]
    fn test_delete_existing_and_missing() {
        let mut store = ProductStore::new();
        store.add(laptop()).unwrap();

        assert_eq!(store.delete("P404"), Err(ProductError::NotFound("P404".into())));
        assert_eq!(store.len(), 1);

        assert_eq!(store.delete("P001"), Ok(laptop()));
        assert!(store.get("P001").is_none());
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn test_empty_store_lists_empty() {
        let store = ProductStore::new();
        assert!(store.is_empty());
        assert_eq!(store.list_all(), Listing::Empty);
    }

    #[test]
    fn test_invalid_prices_are_rejected() {
        let mut store = ProductStore::new();
        assert_eq!(
            store.add(Product::new("P001", "Laptop", 1, -1.0)),
            Err(ProductError::InvalidPrice(-1.0))
        );
        assert!(store.is_empty());

        store.add(laptop()).unwrap();
        assert!(matches!(store.update("P001", 5, f64::NAN), Err(ProductError::InvalidPrice(_))));
        assert_eq!(store.get("P001"), Some(&laptop()));
    }

    #[test]
    fn test_blank_id_is_an_ordinary_key() {
        let mut store = ProductStore::new();
        let nameless = Product::new("", "Nameless", 1, 1.0);
        assert_eq!(store.add(nameless.clone()), Ok(InsertOutcome::Inserted));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list_all(), Listing::Items(vec![nameless]));

        assert_eq!(store.update("", 4, 2.0).unwrap().quantity, 4);
        assert!(store.delete("").is_ok());
        assert!(store.is_empty());
    }
}
