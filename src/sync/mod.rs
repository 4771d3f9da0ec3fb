//! Local/remote card synchronisation.
pub mod merge;
pub mod reconciler;

pub use merge::merge_by_freshness;
pub use reconciler::reconcile;
