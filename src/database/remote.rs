//! Remote (cloud) card store adapter.
//!
//! The remote side is a word-keyed row table reached through a
//! `RecordClient`. Rows carry ISO-8601 timestamps; this module converts them
//! to and from the epoch-millisecond cards the scheduler works with.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};

use super::CardStore;
use crate::clock::Clock;
use crate::error::{Result, StoreError};
use crate::models::ReviewCard;

/// One remote row, scoped to the signed-in learner by the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoteRecord {
    pub id: String,
    pub word: String,
    #[serde(default)]
    pub trans: Vec<String>,
    #[serde(default)]
    pub usphone: Option<String>,
    pub ease_factor: f64,
    pub interval: u32,
    pub repetitions: u32,
    pub next_review_at: Option<String>,
    #[serde(default)]
    pub last_review_at: Option<String>,
    pub created_at: String,
}

impl RemoteRecord {
    pub fn from_card(card: &ReviewCard) -> Result<Self> {
        Ok(Self {
            id: card.id.clone(),
            word: card.word.clone(),
            trans: card.translations.clone(),
            usphone: card.pronunciation.clone(),
            ease_factor: card.ease_factor,
            interval: card.interval,
            repetitions: card.repetitions,
            next_review_at: Some(to_iso(card.next_review_at)?),
            last_review_at: card.last_review_at.map(to_iso).transpose()?,
            created_at: to_iso(card.created_at)?,
        })
    }

    /// Converts back to a card. A row without `next_review_at` is due at `now`.
    pub fn into_card(self, now: i64) -> Result<ReviewCard> {
        Ok(ReviewCard {
            next_review_at: match &self.next_review_at {
                Some(iso) => from_iso(iso)?,
                None => now,
            },
            last_review_at: self.last_review_at.as_deref().map(from_iso).transpose()?,
            created_at: from_iso(&self.created_at)?,
            id: self.id,
            word: self.word,
            translations: self.trans,
            pronunciation: self.usphone,
            ease_factor: self.ease_factor,
            interval: self.interval,
            repetitions: self.repetitions,
        })
    }
}

/// Millisecond-precision UTC ISO string, e.g. `2024-03-11T00:00:00.000Z`.
pub fn to_iso(timestamp: i64) -> Result<String> {
    Utc.timestamp_millis_opt(timestamp)
        .single()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| StoreError::InvalidTimestamp(timestamp.to_string()))
}

pub fn from_iso(iso: &str) -> Result<i64> {
    DateTime::parse_from_rfc3339(iso)
        .map(|dt| dt.timestamp_millis())
        .map_err(|e| StoreError::InvalidTimestamp(format!("{iso}: {e}")))
}

/// Transport to the remote row table. Failures are reported as
/// `StoreError::Remote`.
#[async_trait]
pub trait RecordClient: Send + Sync {
    async fn select_all(&self) -> Result<Vec<RemoteRecord>>;

    async fn select(&self, word: &str) -> Result<Option<RemoteRecord>>;

    /// Upsert keyed on word.
    async fn upsert(&self, records: &[RemoteRecord]) -> Result<()>;

    async fn delete(&self, word: &str) -> Result<()>;

    async fn delete_all(&self) -> Result<()>;
}

pub struct RemoteCardStore<C> {
    client: C,
    clock: Arc<dyn Clock>,
}

impl<C: RecordClient> RemoteCardStore<C> {
    pub fn new(client: C, clock: Arc<dyn Clock>) -> Self {
        Self { client, clock }
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

#[async_trait]
impl<C: RecordClient> CardStore for RemoteCardStore<C> {
    async fn get(&self, word: &str) -> Result<Option<ReviewCard>> {
        let now = self.clock.now_millis();
        self.client
            .select(word)
            .await?
            .map(|record| record.into_card(now))
            .transpose()
    }

    async fn upsert(&self, card: &ReviewCard) -> Result<()> {
        self.client.upsert(&[RemoteRecord::from_card(card)?]).await
    }

    async fn upsert_many(&self, cards: &[ReviewCard]) -> Result<()> {
        if cards.is_empty() {
            return Ok(());
        }
        let mut by_word: IndexMap<&str, RemoteRecord> = IndexMap::new();
        for card in cards {
            by_word.insert(card.word.as_str(), RemoteRecord::from_card(card)?);
        }
        let records: Vec<RemoteRecord> = by_word.into_values().collect();
        debug!("Pushing {} review records to remote", records.len());
        self.client.upsert(&records).await
    }

    async fn remove(&self, word: &str) -> Result<()> {
        self.client.delete(word).await
    }

    async fn clear(&self) -> Result<()> {
        self.client.delete_all().await
    }

    async fn all(&self) -> Result<Vec<ReviewCard>> {
        let now = self.clock.now_millis();
        self.client
            .select_all()
            .await?
            .into_iter()
            .map(|record| record.into_card(now))
            .collect()
    }
}
