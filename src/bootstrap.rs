//! Startup seeding. Inserts fixture data into each collection, guarded by an
//! emptiness check so restarts do not duplicate the fixtures.

use crate::api::AppState;
use crate::error::StoreError;
use crate::models::{Category, Vendor};

/// Seed both collections if they are empty. Runs once at startup, before the
/// server starts accepting requests.
pub async fn seed_if_empty(state: &AppState) -> Result<(), StoreError> {
    tracing::info!("loading seed data");
    seed_categories(state).await?;
    seed_vendors(state).await?;
    Ok(())
}

async fn seed_categories(state: &AppState) -> Result<(), StoreError> {
    if state.categories.count().await? > 0 {
        tracing::debug!("categories already present, skipping seed");
        return Ok(());
    }
    state
        .categories
        .save_all(vec![
            Category::new("Fruits"),
            Category::new("Packages"),
            Category::new("Nuts"),
        ])
        .await?;
    tracing::info!("loaded categories: {}", state.categories.count().await?);
    Ok(())
}

async fn seed_vendors(state: &AppState) -> Result<(), StoreError> {
    if state.vendors.count().await? > 0 {
        tracing::debug!("vendors already present, skipping seed");
        return Ok(());
    }
    state
        .vendors
        .save_all(vec![
            Vendor::new("Michael", "Parker"),
            Vendor::new("John", "Smith"),
            Vendor::new("Michael", "Weston"),
        ])
        .await?;
    tracing::info!("loaded vendors: {}", state.vendors.count().await?);
    Ok(())
}
