mod domain;
mod documents;
mod forecast;

mod app_system;


mod store_framework;
mod product_store;

use tracing::{info, info_span};
use crate::app_system::{
    run_document_demo, run_forecast_demo, setup_tracing, DemoConfig, InventorySystem,
};

fn main() -> Result<(), String> {
    let config = DemoConfig::from_env();

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!("Starting inventory demo");

    // The inventory is an explicit value owned here, not a global
    let mut system = InventorySystem::new();
    info_span!("inventory").in_scope(|| system.run_inventory_demo())
        .map_err(|e| e.to_string())?;

    info_span!("forecast").in_scope(|| run_forecast_demo(&config))
        .map_err(|e| e.to_string())?;

    info_span!("documents").in_scope(run_document_demo);

    info!("Demo completed successfully");
    Ok(())
}
