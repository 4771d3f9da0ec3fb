//! Card Store interface shared by the local and remote backends.
use async_trait::async_trait;

use crate::error::Result;
use crate::models::ReviewCard;

/// A word-keyed collection of cards.
///
/// Writes either complete or return an error; a failed write leaves the
/// store as it was. Lookups of unknown words return `Ok(None)`.
#[async_trait]
pub trait CardStore: Send + Sync {
    async fn get(&self, word: &str) -> Result<Option<ReviewCard>>;

    /// Inserts or replaces the card with the same word.
    async fn upsert(&self, card: &ReviewCard) -> Result<()>;

    /// Batch upsert. Repeated words in `cards` collapse to the last one.
    async fn upsert_many(&self, cards: &[ReviewCard]) -> Result<()>;

    async fn remove(&self, word: &str) -> Result<()>;

    async fn clear(&self) -> Result<()>;

    /// All cards, in insertion order.
    async fn all(&self) -> Result<Vec<ReviewCard>>;
}
