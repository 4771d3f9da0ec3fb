//! The learner's card collection as the application sees it.
//!
//! `ReviewDeck` keeps the current snapshot of cards and writes through to a
//! local store, or to the remote store while signed in. The snapshot only
//! changes after the store accepted the write.

use std::collections::BTreeMap;
use std::sync::Arc;

use indexmap::IndexMap;
use log::{debug, info, warn};

use crate::clock::Clock;
use crate::database::CardStore;
use crate::error::{StoreError, SyncError};
use crate::models::due::{group_by_due_date, select_due, select_upcoming};
use crate::models::sm2::{apply_review, create_card};
use crate::models::{ReviewCard, ReviewSession};
use crate::sync::reconcile;

pub struct ReviewDeck {
    cards: Vec<ReviewCard>,
    local: Arc<dyn CardStore>,
    remote: Option<Arc<dyn CardStore>>,
    clock: Arc<dyn Clock>,
}

impl ReviewDeck {
    /// Offline deck backed by `local` only. Call `load` to read it.
    pub fn new(local: Arc<dyn CardStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            cards: Vec::new(),
            local,
            remote: None,
            clock,
        }
    }

    /// Attaches the remote store of a signed-in learner.
    pub fn sign_in(&mut self, remote: Arc<dyn CardStore>) {
        self.remote = Some(remote);
    }

    pub fn sign_out(&mut self) {
        self.remote = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.remote.is_some()
    }

    /// Fills the snapshot. Signed in, this reconciles local with remote;
    /// if that fails the deck falls back to the local cards and the sync
    /// error is returned.
    pub async fn load(&mut self) -> Result<(), SyncError> {
        let Some(remote) = self.remote.clone() else {
            self.cards = self.local.all().await.map_err(SyncError::Local)?;
            info!("Loaded {} review cards from local store", self.cards.len());
            return Ok(());
        };

        match reconcile(self.local.as_ref(), remote.as_ref()).await {
            Ok(merged) => {
                self.cards = merged;
                Ok(())
            }
            Err(e) => {
                warn!("Sync failed, working from local cards: {}", e);
                self.cards = self.local.all().await.map_err(SyncError::Local)?;
                Err(e)
            }
        }
    }

    /// Runs a sync now. Returns `false` when not signed in. On failure the
    /// snapshot is left as it was.
    pub async fn sync_now(&mut self) -> Result<bool, SyncError> {
        let Some(remote) = self.remote.clone() else {
            return Ok(false);
        };
        self.cards = reconcile(self.local.as_ref(), remote.as_ref()).await?;
        Ok(true)
    }

    /// Starts tracking `word`. Returns `None` if the word is already tracked.
    pub async fn add_card(
        &mut self,
        word: &str,
        translations: Vec<String>,
        pronunciation: Option<String>,
    ) -> Result<Option<ReviewCard>, StoreError> {
        if self.card(word).is_some() {
            debug!("'{}' is already tracked", word);
            return Ok(None);
        }

        let card = create_card(word, translations, pronunciation, self.clock.now_millis());
        self.persist(&card).await?;
        self.cards.push(card.clone());
        Ok(Some(card))
    }

    /// Adds every card whose word is not tracked yet. Repeated words within
    /// `cards` collapse to the last one. Returns how many were added.
    pub async fn add_cards(&mut self, cards: Vec<ReviewCard>) -> Result<usize, StoreError> {
        let mut unique: IndexMap<String, ReviewCard> = IndexMap::new();
        for card in cards {
            if self.card(&card.word).is_none() {
                unique.insert(card.word.clone(), card);
            }
        }
        let new_cards: Vec<ReviewCard> = unique.into_values().collect();
        if new_cards.is_empty() {
            return Ok(0);
        }

        self.persist_many(&new_cards).await?;
        let added = new_cards.len();
        self.cards.extend(new_cards);
        info!("Added {} review cards", added);
        Ok(added)
    }

    /// Rates `word` and stores the new schedule. `None` for an unknown word.
    pub async fn review_card(
        &mut self,
        word: &str,
        quality: impl Into<i32>,
    ) -> Result<Option<ReviewCard>, StoreError> {
        let quality = quality.into();
        let Some(index) = self.cards.iter().position(|c| c.word == word) else {
            return Ok(None);
        };

        let updated = apply_review(&self.cards[index], quality, self.clock.now_millis());
        self.persist(&updated).await?;
        debug!(
            "Reviewed '{}' (q={}): next in {} days",
            word, quality, updated.interval
        );
        self.cards[index] = updated.clone();
        Ok(Some(updated))
    }

    /// Stops tracking `word`. Returns whether it was tracked.
    pub async fn remove_card(&mut self, word: &str) -> Result<bool, StoreError> {
        if let Some(remote) = &self.remote {
            remote.remove(word).await?;
        }
        self.local.remove(word).await?;

        let before = self.cards.len();
        self.cards.retain(|c| c.word != word);
        Ok(self.cards.len() != before)
    }

    /// Deletes every card, remote first, then local.
    pub async fn clear_all(&mut self) -> Result<(), StoreError> {
        if let Some(remote) = &self.remote {
            remote.clear().await?;
        }
        self.local.clear().await?;
        self.cards.clear();
        Ok(())
    }

    pub fn cards(&self) -> &[ReviewCard] {
        &self.cards
    }

    pub fn card(&self, word: &str) -> Option<&ReviewCard> {
        self.cards.iter().find(|c| c.word == word)
    }

    pub fn due_cards(&self) -> Vec<ReviewCard> {
        select_due(&self.cards, self.clock.now_millis())
    }

    pub fn upcoming_cards(&self, days: u32) -> Vec<ReviewCard> {
        select_upcoming(&self.cards, self.clock.now_millis(), days)
    }

    pub fn cards_by_due_date(&self) -> BTreeMap<String, Vec<ReviewCard>> {
        group_by_due_date(&self.cards)
    }

    /// Session over the cards due right now, in due order.
    pub fn start_session(&self) -> ReviewSession {
        ReviewSession::new(self.due_cards())
    }

    /// Saves to the remote while signed in. A failed remote write is staged
    /// in the local store so the next sync picks it up.
    async fn persist(&self, card: &ReviewCard) -> Result<(), StoreError> {
        if let Some(remote) = &self.remote {
            match remote.upsert(card).await {
                Ok(()) => return Ok(()),
                Err(e) => warn!("Remote save of '{}' failed, staging locally: {}", card.word, e),
            }
        }
        self.local.upsert(card).await
    }

    async fn persist_many(&self, cards: &[ReviewCard]) -> Result<(), StoreError> {
        if let Some(remote) = &self.remote {
            match remote.upsert_many(cards).await {
                Ok(()) => return Ok(()),
                Err(e) => warn!("Remote save of {} cards failed, staging locally: {}", cards.len(), e),
            }
        }
        self.local.upsert_many(cards).await
    }
}
