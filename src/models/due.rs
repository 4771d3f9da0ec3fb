//! Due-set selection over card snapshots.

use std::collections::BTreeMap;

use super::ReviewCard;
use super::day::date_key;
use crate::clock::MS_PER_DAY;

pub const DEFAULT_UPCOMING_DAYS: u32 = 7;

/// Cards with `next_review_at <= now`, earliest first.
///
/// The sort is stable, so cards due at the same instant keep their
/// collection order.
pub fn select_due(cards: &[ReviewCard], now: i64) -> Vec<ReviewCard> {
    let mut due: Vec<ReviewCard> = cards.iter().filter(|c| c.is_due(now)).cloned().collect();
    due.sort_by_key(|c| c.next_review_at);
    due
}

/// Cards due after `now` but within the next `days` days, earliest first.
pub fn select_upcoming(cards: &[ReviewCard], now: i64, days: u32) -> Vec<ReviewCard> {
    let horizon = now + i64::from(days) * MS_PER_DAY;
    let mut upcoming: Vec<ReviewCard> = cards
        .iter()
        .filter(|c| c.next_review_at > now && c.next_review_at <= horizon)
        .cloned()
        .collect();
    upcoming.sort_by_key(|c| c.next_review_at);
    upcoming
}

/// Cards bucketed by the local calendar day they fall due (`YYYY-MM-DD`).
/// Within a day, cards keep input order.
pub fn group_by_due_date(cards: &[ReviewCard]) -> BTreeMap<String, Vec<ReviewCard>> {
    let mut groups: BTreeMap<String, Vec<ReviewCard>> = BTreeMap::new();
    for card in cards {
        groups
            .entry(date_key(card.next_review_at))
            .or_default()
            .push(card.clone());
    }
    groups
}

/// Number of cards falling due on each local calendar day.
pub fn count_by_due_date(cards: &[ReviewCard]) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for card in cards {
        *counts.entry(date_key(card.next_review_at)).or_default() += 1;
    }
    counts
}
