use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use filedrop_core::record::{PutAck, Record};
use filedrop_core::storage::{RecordRepository, Result};

/// Map-backed records table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordRepository {
    records: Arc<RwLock<HashMap<String, Record>>>,
}

impl InMemoryRecordRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn get_record(&self, id: &str) -> Result<Option<Record>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn scan_records(&self) -> Result<Vec<Record>> {
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn put_record(&self, record: &Record) -> Result<PutAck> {
        let mut records = self.records.write().await;
        records.insert(record.id.clone(), record.clone());
        Ok(PutAck::default())
    }

    async fn update_record(&self, id: &str, filename: &str, url: &str) -> Result<Record> {
        let mut records = self.records.write().await;
        let record = Record::new(id, filename, url);
        records.insert(id.to_string(), record.clone());
        Ok(record)
    }

    async fn delete_record(&self, id: &str) -> Result<()> {
        let mut records = self.records.write().await;
        records.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(id: &str) -> Record {
        Record::new(id, "a.png", "https://media.s3.amazonaws.com/a.png")
    }

    #[tokio::test]
    async fn test_put_and_get_record() {
        let repo = InMemoryRecordRepository::new();
        let record = sample_record("r1");

        repo.put_record(&record).await.unwrap();

        assert_eq!(repo.get_record("r1").await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn test_get_missing_record() {
        let repo = InMemoryRecordRepository::new();
        assert_eq!(repo.get_record("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_replaces_existing_record() {
        let repo = InMemoryRecordRepository::new();
        repo.put_record(&sample_record("r1")).await.unwrap();

        let replacement = Record::new("r1", "b.png", "https://media.s3.amazonaws.com/b.png");
        repo.put_record(&replacement).await.unwrap();

        assert_eq!(repo.len().await, 1);
        assert_eq!(repo.get_record("r1").await.unwrap(), Some(replacement));
    }

    #[tokio::test]
    async fn test_update_creates_missing_record() {
        let repo = InMemoryRecordRepository::new();

        let updated = repo.update_record("r9", "c.png", "u").await.unwrap();

        assert_eq!(updated, Record::new("r9", "c.png", "u"));
        assert_eq!(repo.get_record("r9").await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_delete_twice_succeeds() {
        let repo = InMemoryRecordRepository::new();
        repo.put_record(&sample_record("r1")).await.unwrap();

        repo.delete_record("r1").await.unwrap();
        repo.delete_record("r1").await.unwrap();

        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_scan_returns_every_record_once() {
        let repo = InMemoryRecordRepository::new();
        for id in ["r1", "r2", "r3"] {
            repo.put_record(&sample_record(id)).await.unwrap();
        }

        let mut ids: Vec<String> = repo
            .scan_records()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        ids.sort();

        assert_eq!(ids, vec!["r1", "r2", "r3"]);
    }

    #[tokio::test]
    async fn test_clones_share_data() {
        let repo = InMemoryRecordRepository::new();
        let clone = repo.clone();

        clone.put_record(&sample_record("r1")).await.unwrap();

        assert!(repo.get_record("r1").await.unwrap().is_some());
    }
}
