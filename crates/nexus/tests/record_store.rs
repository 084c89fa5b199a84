//! Persistence behavior of `RecordStore` on real and failing backends.

use async_trait::async_trait;
use nexus::domain::{IssueFilter, IssuePriority, IssueStatus, NewIssue};
use nexus::error::Error;
use nexus::service::IssueService;
use nexus::storage::{DEFAULT_SLOT_KEY, RecordStore};
use nexus_kv::{FileStore, KeyValueStore, MemoryStore};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tempfile::TempDir;

/// Memory store whose writes can be switched off.
#[derive(Debug, Default)]
struct FailingStore {
    inner: MemoryStore,
    fail_writes: AtomicBool,
}

impl FailingStore {
    fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, key: &str) -> nexus_kv::Result<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> nexus_kv::Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(io::Error::other("disk full").into());
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> nexus_kv::Result<()> {
        self.inner.remove(key).await
    }
}

#[tokio::test]
async fn failed_save_keeps_previous_collection() {
    let kv = Arc::new(FailingStore::default());
    let store = RecordStore::new(kv.clone());
    let seed = store.load().await.unwrap();

    kv.fail_writes();
    let result = store.save(&seed[..1]).await;

    assert!(matches!(result, Err(Error::Storage(_))));
    assert_eq!(store.load().await.unwrap(), seed);
}

#[tokio::test]
async fn failed_create_surfaces_error_and_changes_nothing() {
    let kv = Arc::new(FailingStore::default());
    let mut service = IssueService::new(RecordStore::new(kv.clone()));
    let before = service.list(&IssueFilter::default()).await.unwrap();

    kv.fail_writes();
    let result = service
        .create(NewIssue {
            title: "Unsaved".to_string(),
            description: "Never written".to_string(),
            priority: IssuePriority::Low,
            status: IssueStatus::Open,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(service.list(&IssueFilter::default()).await.unwrap(), before);
}

#[tokio::test]
async fn file_store_round_trips_across_handles() {
    let temp = TempDir::new().unwrap();

    let first = RecordStore::new(Arc::new(FileStore::open(temp.path()).await.unwrap()));
    let mut seed = first.load().await.unwrap();
    seed.reverse();
    first.save(&seed).await.unwrap();

    let second = RecordStore::new(Arc::new(FileStore::open(temp.path()).await.unwrap()));
    assert_eq!(second.load().await.unwrap(), seed);
}

#[tokio::test]
async fn malformed_slot_file_is_reported_not_repaired() {
    let temp = TempDir::new().unwrap();
    let slot = temp.path().join(format!("{DEFAULT_SLOT_KEY}.json"));
    tokio::fs::write(&slot, "{not json").await.unwrap();

    let store = RecordStore::new(Arc::new(FileStore::open(temp.path()).await.unwrap()));
    let err = store.load().await.unwrap_err();

    assert!(matches!(err, Error::Deserialization { ref key, .. } if key == DEFAULT_SLOT_KEY));
    assert_eq!(tokio::fs::read_to_string(&slot).await.unwrap(), "{not json");
}

#[tokio::test]
async fn hand_written_collection_is_readable() {
    let temp = TempDir::new().unwrap();
    let slot = temp.path().join(format!("{DEFAULT_SLOT_KEY}.json"));
    let blob = r#"[
        {
            "id": "abc",
            "title": "Imported",
            "description": "Written by another tool",
            "priority": "high",
            "status": "in-progress",
            "createdAt": "2024-03-01T10:00:00.000Z",
            "updatedAt": "2024-03-02T10:00:00.000Z"
        }
    ]"#;
    tokio::fs::write(&slot, blob).await.unwrap();

    let store = RecordStore::new(Arc::new(FileStore::open(temp.path()).await.unwrap()));
    let issues = store.load().await.unwrap();

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].id.as_str(), "abc");
    assert_eq!(issues[0].status, IssueStatus::InProgress);
    assert_eq!(issues[0].priority, IssuePriority::High);
    assert!(issues[0].updated_at > issues[0].created_at);
}

#[tokio::test]
async fn unknown_status_value_is_rejected() {
    let kv = Arc::new(MemoryStore::new());
    kv.set(
        DEFAULT_SLOT_KEY,
        r#"[{"id":"x","title":"t","description":"d","priority":"low","status":"blocked",
            "createdAt":"2024-03-01T10:00:00Z","updatedAt":"2024-03-01T10:00:00Z"}]"#,
    )
    .await
    .unwrap();

    let err = RecordStore::new(kv).load().await.unwrap_err();
    assert!(matches!(err, Error::Deserialization { .. }));
}
