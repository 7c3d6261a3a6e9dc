//! Storage port for a single resource collection.
//!
//! Controllers depend only on this trait; the in-memory store implements it,
//! and tests substitute recording implementations. A real document-store
//! driver would slot in the same way.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::store::{Document, InMemoryCollection};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Typed access to one collection of the document store. Pure pass-through —
/// no business logic; store errors propagate unchanged.
#[async_trait]
pub trait DocumentRepository<T>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<T>>;
    async fn find_by_id(&self, id: &str) -> Result<Option<T>>;
    async fn save(&self, doc: T) -> Result<T>;
    async fn save_all(&self, docs: Vec<T>) -> Result<Vec<T>>;
    async fn count(&self) -> Result<u64>;
}

#[async_trait]
impl<T> DocumentRepository<T> for InMemoryCollection<T>
where
    T: Document + Clone + Send + Sync + 'static,
{
    async fn find_all(&self) -> Result<Vec<T>> {
        InMemoryCollection::find_all(self).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        InMemoryCollection::find_by_id(self, id).await
    }

    async fn save(&self, doc: T) -> Result<T> {
        InMemoryCollection::save(self, doc).await
    }

    async fn save_all(&self, docs: Vec<T>) -> Result<Vec<T>> {
        InMemoryCollection::save_all(self, docs).await
    }

    async fn count(&self) -> Result<u64> {
        InMemoryCollection::count(self).await
    }
}
