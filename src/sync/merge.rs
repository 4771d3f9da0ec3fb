//! Merge by freshness: last review wins, per word.

use indexmap::IndexMap;

use crate::models::ReviewCard;

/// Merges a local collection into a remote one.
///
/// Remote cards seed the result. A local card replaces the remote card for
/// its word when the remote has no such word, or when the local card was
/// reviewed strictly later (a missing remote `last_review_at` counts as
/// older). On equal timestamps the remote card stays.
///
/// Output order: remote words first in remote order, then local-only words
/// in local order.
pub fn merge_by_freshness(remote: &[ReviewCard], local: &[ReviewCard]) -> Vec<ReviewCard> {
    let mut merged: IndexMap<&str, &ReviewCard> = IndexMap::new();
    for card in remote {
        merged.insert(card.word.as_str(), card);
    }

    for card in local {
        let replace = match merged.get(card.word.as_str()) {
            None => true,
            Some(existing) => local_is_fresher(card, existing),
        };
        if replace {
            merged.insert(card.word.as_str(), card);
        }
    }

    merged.into_values().cloned().collect()
}

fn local_is_fresher(local: &ReviewCard, remote: &ReviewCard) -> bool {
    match (local.last_review_at, remote.last_review_at) {
        (Some(local_at), Some(remote_at)) => local_at > remote_at,
        (Some(_), None) => true,
        (None, _) => false,
    }
}
