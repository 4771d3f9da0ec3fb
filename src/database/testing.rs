//! Store doubles for unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::remote::{RecordClient, RemoteCardStore, RemoteRecord};
use super::{CardStore, MemoryCardStore};
use crate::clock::FixedClock;
use crate::error::{Result, StoreError};
use crate::models::ReviewCard;

pub(crate) const TEST_NOW: i64 = 1_700_000_000_000;

/// Remote row table held in memory, with a switch to simulate losing the network.
#[derive(Default)]
pub(crate) struct MemoryRecordClient {
    rows: Mutex<Vec<RemoteRecord>>,
    offline: AtomicBool,
    pub upserts: AtomicUsize,
}

impl MemoryRecordClient {
    pub(crate) fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Remote("connection refused".to_string()));
        }
        Ok(())
    }

    fn rows(&self) -> Result<MutexGuard<'_, Vec<RemoteRecord>>> {
        self.rows.lock().map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait]
impl RecordClient for MemoryRecordClient {
    async fn select_all(&self) -> Result<Vec<RemoteRecord>> {
        self.check_online()?;
        Ok(self.rows()?.clone())
    }

    async fn select(&self, word: &str) -> Result<Option<RemoteRecord>> {
        self.check_online()?;
        Ok(self.rows()?.iter().find(|r| r.word == word).cloned())
    }

    async fn upsert(&self, records: &[RemoteRecord]) -> Result<()> {
        self.check_online()?;
        self.upserts.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows()?;
        for record in records {
            match rows.iter_mut().find(|r| r.word == record.word) {
                Some(existing) => *existing = record.clone(),
                None => rows.push(record.clone()),
            }
        }
        Ok(())
    }

    async fn delete(&self, word: &str) -> Result<()> {
        self.check_online()?;
        self.rows()?.retain(|r| r.word != word);
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        self.check_online()?;
        self.rows()?.clear();
        Ok(())
    }
}

pub(crate) fn remote_store() -> RemoteCardStore<MemoryRecordClient> {
    RemoteCardStore::new(
        MemoryRecordClient::default(),
        Arc::new(FixedClock::new(TEST_NOW)),
    )
}

/// Memory store whose reads and writes can be made to fail.
#[derive(Default)]
pub(crate) struct FlakyStore {
    inner: MemoryCardStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FlakyStore {
    pub(crate) fn with_cards(cards: impl IntoIterator<Item = ReviewCard>) -> Self {
        Self {
            inner: MemoryCardStore::with_cards(cards),
            ..Self::default()
        }
    }

    pub(crate) fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_read(&self) -> Result<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Remote("read failed".to_string()));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Remote("write failed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CardStore for FlakyStore {
    async fn get(&self, word: &str) -> Result<Option<ReviewCard>> {
        self.check_read()?;
        self.inner.get(word).await
    }

    async fn upsert(&self, card: &ReviewCard) -> Result<()> {
        self.check_write()?;
        self.inner.upsert(card).await
    }

    async fn upsert_many(&self, cards: &[ReviewCard]) -> Result<()> {
        self.check_write()?;
        self.inner.upsert_many(cards).await
    }

    async fn remove(&self, word: &str) -> Result<()> {
        self.check_write()?;
        self.inner.remove(word).await
    }

    async fn clear(&self) -> Result<()> {
        self.check_write()?;
        self.inner.clear().await
    }

    async fn all(&self) -> Result<Vec<ReviewCard>> {
        self.check_read()?;
        self.inner.all().await
    }
}
