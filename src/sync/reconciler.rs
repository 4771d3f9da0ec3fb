//! Reconciles the local staging store with the remote store at sign-in or
//! on demand.

use log::{info, warn};

use super::merge::merge_by_freshness;
use crate::database::CardStore;
use crate::error::SyncError;
use crate::models::ReviewCard;

/// Merges `local` into `remote`, pushes the merged set to `remote`, then
/// empties `local`.
///
/// If reading either side or pushing to `remote` fails, nothing has been
/// removed from `local`. Failing to clear `local` after a confirmed push is
/// only logged: the staged cards are already in the merged set, and merging
/// them again later changes nothing.
pub async fn reconcile(
    local: &dyn CardStore,
    remote: &dyn CardStore,
) -> Result<Vec<ReviewCard>, SyncError> {
    let local_cards = local.all().await.map_err(SyncError::Local)?;
    let remote_cards = remote.all().await.map_err(SyncError::Remote)?;

    let merged = merge_by_freshness(&remote_cards, &local_cards);

    remote
        .upsert_many(&merged)
        .await
        .map_err(SyncError::Remote)?;

    if let Err(e) = local.clear().await {
        warn!("Synced cards but could not clear local staging store: {}", e);
    }

    info!(
        "Synced review cards: {} local, {} remote, {} merged",
        local_cards.len(),
        remote_cards.len(),
        merged.len()
    );
    Ok(merged)
}
