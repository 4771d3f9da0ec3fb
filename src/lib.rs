pub mod clock;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;
pub mod queries;
pub mod review_deck;
pub mod sync;

pub use clock::{Clock, FixedClock, SystemClock};
pub use database::{CardStore, MemoryCardStore, RemoteCardStore, SqliteCardStore};
pub use error::{StoreError, SyncError};
pub use models::{Quality, ReviewCard, ReviewSession, SimpleQuality};
pub use review_deck::ReviewDeck;
