use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::models::Record;

/// In-memory collection of records keyed by id, in insertion order.
pub struct RecordStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Record + Clone> RecordStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: T) -> Result<T, StoreError> {
        let mut records = self.records.write().await;

        if records.iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::Duplicate {
                kind: T::KIND,
                id: record.id().to_string(),
            });
        }

        records.push(record.clone());
        tracing::debug!(kind = T::KIND, id = record.id(), "record stored");
        Ok(record)
    }

    pub async fn get(&self, id: &str) -> Result<T, StoreError> {
        let records = self.records.read().await;
        records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                kind: T::KIND,
                id: id.to_string(),
            })
    }

    pub async fn list(&self) -> Vec<T> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
