use tracing::{debug, info, instrument, warn};
use crate::documents::{factory_for, DocumentKind};
use crate::domain::Product;
use crate::forecast::{forecast_series, future_value, ForecastError};
use crate::product_store::{ProductError, ProductStore};
use crate::store_framework::{InsertOutcome, Listing};
use super::config::DemoConfig;

/// The demo application: owns the product inventory and reports every
/// outcome through the log.
///
/// The store itself never prints; deciding how an outcome reads is done here.
#[derive(Debug, Default)]
pub struct InventorySystem {
    pub store: ProductStore,
}

impl InventorySystem {
    pub fn new() -> Self {
        Self { store: ProductStore::new() }
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_product(&mut self, product: Product) -> Result<InsertOutcome<Product>, ProductError> {
        let shown = product.to_string();
        let outcome = self.store.add(product);
        match &outcome {
            Ok(InsertOutcome::Inserted) => info!(product = %shown, "Product added"),
            Ok(InsertOutcome::Replaced(previous)) => {
                info!(product = %shown, previous = %previous, "Product replaced")
            }
            Err(e) => warn!(error = %e, "Product not added"),
        }
        outcome
    }

    #[instrument(skip(self))]
    pub fn update_product(&mut self, id: &str, quantity: u32, price: f64) -> Result<Product, ProductError> {
        let outcome = self.store.update(id, quantity, price).cloned();
        match &outcome {
            Ok(product) => info!(product = %product, "Product updated"),
            Err(ProductError::NotFound(_)) => warn!("Product not found for update"),
            Err(e) => warn!(error = %e, "Product not updated"),
        }
        outcome
    }

    #[instrument(skip(self))]
    pub fn delete_product(&mut self, id: &str) -> Result<Product, ProductError> {
        let outcome = self.store.delete(id);
        match &outcome {
            Ok(product) => info!(product = %product, "Product removed"),
            Err(ProductError::NotFound(_)) => warn!("Product not found for deletion"),
            Err(e) => warn!(error = %e, "Product not removed"),
        }
        outcome
    }

    pub fn list_products(&self) -> Listing<Product> {
        let listing = self.store.list_all();
        if listing.is_empty() {
            info!("Inventory is empty");
            return listing;
        }
        info!(count = listing.items().len(), "All products in inventory");
        for product in listing.items() {
            info!("  {product}");
        }
        listing
    }

    /// Runs the inventory walkthrough: seed three products, update one,
    /// delete another, list before and after.
    pub fn run_inventory_demo(&mut self) -> Result<(), ProductError> {
        self.add_product(Product::new("P001", "Laptop", 10, 75000.0))?;
        self.add_product(Product::new("P002", "Monitor", 15, 12000.0))?;
        self.add_product(Product::new("P003", "Keyboard", 50, 700.0))?;

        self.list_products();

        self.update_product("P002", 20, 11500.0)?;
        self.delete_product("P003")?;

        self.list_products();
        Ok(())
    }
}

/// Logs the configured compound-growth forecast year by year and returns the
/// final value.
#[instrument(skip(config))]
pub fn run_forecast_demo(config: &DemoConfig) -> Result<f64, ForecastError> {
    let series = forecast_series(config.present_value, config.growth_rate, config.forecast_years)?;
    for (year, value) in series.iter().enumerate() {
        let shown = format!("{value:.2}");
        debug!(year, value = %shown, "Projected value");
    }
    let value = future_value(config.present_value, config.growth_rate, config.forecast_years)?;
    let shown = format!("{value:.2}");
    info!(years = config.forecast_years, future_value = %shown, "Future value computed");
    Ok(value)
}

/// Creates and opens one document per kind through its factory.
pub fn run_document_demo() -> Vec<String> {
    DocumentKind::ALL
        .into_iter()
        .map(|kind| {
            let document = factory_for(kind).create_document();
            let message = document.open();
            info!(kind = %kind, "{message}");
            message
        })
        .collect()
}
