use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use indexmap::IndexMap;

use super::CardStore;
use crate::error::{Result, StoreError};
use crate::models::ReviewCard;

/// In-memory card store keyed by word, preserving first-insertion order.
#[derive(Default)]
pub struct MemoryCardStore {
    cards: Mutex<IndexMap<String, ReviewCard>>,
}

impl MemoryCardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards(cards: impl IntoIterator<Item = ReviewCard>) -> Self {
        let cards = cards.into_iter().map(|c| (c.word.clone(), c)).collect();
        Self {
            cards: Mutex::new(cards),
        }
    }

    fn cards(&self) -> Result<MutexGuard<'_, IndexMap<String, ReviewCard>>> {
        self.cards.lock().map_err(|_| StoreError::Poisoned)
    }
}

#[async_trait]
impl CardStore for MemoryCardStore {
    async fn get(&self, word: &str) -> Result<Option<ReviewCard>> {
        Ok(self.cards()?.get(word).cloned())
    }

    async fn upsert(&self, card: &ReviewCard) -> Result<()> {
        self.cards()?.insert(card.word.clone(), card.clone());
        Ok(())
    }

    async fn upsert_many(&self, cards: &[ReviewCard]) -> Result<()> {
        let mut stored = self.cards()?;
        for card in cards {
            stored.insert(card.word.clone(), card.clone());
        }
        Ok(())
    }

    async fn remove(&self, word: &str) -> Result<()> {
        self.cards()?.shift_remove(word);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.cards()?.clear();
        Ok(())
    }

    async fn all(&self) -> Result<Vec<ReviewCard>> {
        Ok(self.cards()?.values().cloned().collect())
    }
}
