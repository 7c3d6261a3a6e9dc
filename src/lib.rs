//! Fruit shop REST API — categories and vendors over a document store.
//!
//! The crate is a thin controller layer: axum handlers delegating to a
//! [`repository::DocumentRepository`] port, with an in-memory document store
//! behind it. The one real contract is the PATCH merge rule — a field is
//! written back only when it is supplied, non-empty, and actually different
//! from the stored value, and an unchanged record is never saved.

pub mod api;
pub mod bootstrap;
pub mod error;
pub mod models;
pub mod repository;
pub mod store;

pub use api::{build_router, AppState};
pub use error::{ApiError, StoreError};
pub use models::{Category, CategoryPatch, Vendor, VendorPatch};
pub use repository::DocumentRepository;
pub use store::{Document, InMemoryCollection};
