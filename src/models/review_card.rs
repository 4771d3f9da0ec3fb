//! A vocabulary word under spaced-repetition tracking.
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const INITIAL_EASE_FACTOR: f64 = 2.5;

/// One card snapshot. Scheduling produces a new snapshot instead of
/// mutating fields in place.
///
/// Serialized with the local record layout:
/// `{ id, word, trans, usphone?, easeFactor, interval, repetitions,
///    nextReviewAt, lastReviewAt?, createdAt }`, timestamps in epoch ms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCard {
    pub id: String,
    pub word: String,
    #[serde(rename = "trans", default)]
    pub translations: Vec<String>,
    #[serde(rename = "usphone", default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    pub ease_factor: f64,
    pub interval: u32,
    pub repetitions: u32,
    pub next_review_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_review_at: Option<i64>,
    pub created_at: i64,
}

impl ReviewCard {
    /// New card, due immediately.
    pub fn new(
        word: impl Into<String>,
        translations: Vec<String>,
        pronunciation: Option<String>,
        now: i64,
    ) -> Self {
        Self {
            id: format!("review_{}", Uuid::new_v4().simple()),
            word: word.into(),
            translations,
            pronunciation,
            ease_factor: INITIAL_EASE_FACTOR,
            interval: 0,
            repetitions: 0,
            next_review_at: now,
            last_review_at: None,
            created_at: now,
        }
    }

    pub fn is_due(&self, now: i64) -> bool {
        self.next_review_at <= now
    }
}
