//! Due-set views read straight from a card store. Nothing is cached; each
//! call reads the store again.

use std::collections::BTreeMap;

use crate::database::CardStore;
use crate::error::Result;
use crate::models::ReviewCard;
use crate::models::due::{group_by_due_date, select_due, select_upcoming};

/// Cards due at `now`, earliest first.
pub async fn due_now(store: &dyn CardStore, now: i64) -> Result<Vec<ReviewCard>> {
    Ok(select_due(&store.all().await?, now))
}

/// Cards falling due in the next `days` days, earliest first.
pub async fn due_within(store: &dyn CardStore, now: i64, days: u32) -> Result<Vec<ReviewCard>> {
    Ok(select_upcoming(&store.all().await?, now, days))
}

/// All cards keyed by local due date, for calendar rendering.
pub async fn grouped_by_due_date(
    store: &dyn CardStore,
) -> Result<BTreeMap<String, Vec<ReviewCard>>> {
    Ok(group_by_due_date(&store.all().await?))
}
