//! In-memory document store.
//!
//! One [`InMemoryCollection`] per named collection, keyed by string id. A
//! record saved without an id gets a fresh uuid-v4 id (insert); a record with
//! an id replaces whatever is stored under it (upsert). Iteration order of
//! `find_all` is undefined.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;

/// A record the store can address by id.
pub trait Document {
    fn id(&self) -> Option<&str>;
    fn assign_id(&mut self, id: String);
}

/// Async key-addressed collection of documents.
#[derive(Debug, Clone)]
pub struct InMemoryCollection<T> {
    name: &'static str,
    docs: Arc<RwLock<HashMap<String, T>>>,
}

impl<T> InMemoryCollection<T>
where
    T: Document + Clone + Send + Sync,
{
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            docs: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Collection name, as addressed by the store.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub async fn find_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.docs.read().await.values().cloned().collect())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<T>, StoreError> {
        Ok(self.docs.read().await.get(id).cloned())
    }

    pub async fn save(&self, mut doc: T) -> Result<T, StoreError> {
        let id = match doc.id() {
            Some(id) => id.to_string(),
            None => {
                let id = Uuid::new_v4().to_string();
                doc.assign_id(id.clone());
                id
            }
        };
        self.docs.write().await.insert(id, doc.clone());
        Ok(doc)
    }

    pub async fn save_all(&self, docs: Vec<T>) -> Result<Vec<T>, StoreError> {
        let mut saved = Vec::with_capacity(docs.len());
        for doc in docs {
            saved.push(self.save(doc).await?);
        }
        Ok(saved)
    }

    pub async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.docs.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[tokio::test]
    async fn save_assigns_id_and_roundtrips() {
        let store = InMemoryCollection::new("categories");
        let saved = store.save(Category::new("Fruits")).await.unwrap();
        let id = saved.id.clone().expect("id assigned on first save");

        let found = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found, saved);
        assert_eq!(found.description, "Fruits");
    }

    #[tokio::test]
    async fn save_with_id_replaces_existing() {
        let store = InMemoryCollection::new("categories");
        let saved = store.save(Category::new("Fruits")).await.unwrap();
        let id = saved.id.clone().unwrap();

        let mut replacement = saved.clone();
        replacement.description = "Dried".into();
        store.save(replacement).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        let found = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.description, "Dried");
    }

    #[tokio::test]
    async fn find_by_unknown_id_is_none() {
        let store: InMemoryCollection<Category> = InMemoryCollection::new("categories");
        assert!(store.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_all_persists_every_record() {
        let store = InMemoryCollection::new("categories");
        let saved = store
            .save_all(vec![
                Category::new("Fruits"),
                Category::new("Packages"),
                Category::new("Nuts"),
            ])
            .await
            .unwrap();

        assert_eq!(saved.len(), 3);
        assert!(saved.iter().all(|c| c.id.is_some()));
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn find_all_on_empty_collection_is_empty() {
        let store: InMemoryCollection<Category> = InMemoryCollection::new("categories");
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
