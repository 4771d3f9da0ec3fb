//! Review session management for spaced repetition practice.
//! Walks through the cards that were due when the session started, rating
//! each one exactly once.

use super::ReviewCard;
use crate::error::StoreError;
use crate::review_deck::ReviewDeck;

/// A single pass over a fixed queue of due cards.
///
/// The queue is taken at start and never re-queried, so rating a card
/// cannot reorder what is left. Dropping the session part way through
/// leaves unrated cards untouched.
pub struct ReviewSession {
    queue: Vec<ReviewCard>,
    current_index: usize,
    pub show_translation: bool,
    reviewed: Vec<ReviewCard>,
}

impl ReviewSession {
    pub fn new(due_cards: Vec<ReviewCard>) -> Self {
        Self {
            queue: due_cards,
            current_index: 0,
            show_translation: false,
            reviewed: Vec::new(),
        }
    }

    pub fn current_card(&self) -> Option<&ReviewCard> {
        self.queue.get(self.current_index)
    }

    pub fn toggle_translation(&mut self) {
        self.show_translation = !self.show_translation;
    }

    /// Rates the current card and moves on.
    ///
    /// The session only advances once the deck has stored the new schedule;
    /// on error the same card stays current so the rating can be retried.
    /// A card removed from the deck mid-session is skipped and yields `None`.
    pub async fn rate_current(
        &mut self,
        deck: &mut ReviewDeck,
        quality: impl Into<i32>,
    ) -> Result<Option<ReviewCard>, StoreError> {
        let Some(word) = self.current_card().map(|c| c.word.clone()) else {
            return Ok(None);
        };

        let updated = deck.review_card(&word, quality).await?;

        if let Some(card) = &updated {
            self.reviewed.push(card.clone());
        }
        self.current_index += 1;
        self.show_translation = false;
        Ok(updated)
    }

    /// Snapshots produced so far, in rating order
    pub fn reviewed(&self) -> &[ReviewCard] {
        &self.reviewed
    }

    pub fn reviewed_count(&self) -> usize {
        self.current_index.min(self.queue.len())
    }

    pub fn total_count(&self) -> usize {
        self.queue.len()
    }

    pub fn remaining_count(&self) -> usize {
        self.total_count() - self.reviewed_count()
    }

    pub fn is_completed(&self) -> bool {
        self.current_index >= self.queue.len()
    }

    pub fn progress_message(&self) -> String {
        if self.is_completed() {
            format!("Done: {} cards reviewed", self.reviewed.len())
        } else {
            format!("Card {} / {}", self.current_index + 1, self.total_count())
        }
    }
}
