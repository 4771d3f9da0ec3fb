//! Card persistence: the `CardStore` interface and its backends.
pub mod db;
pub mod memory;
pub mod remote;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use db::SqliteCardStore;
pub use memory::MemoryCardStore;
pub use remote::{RecordClient, RemoteCardStore, RemoteRecord};
pub use store::CardStore;
