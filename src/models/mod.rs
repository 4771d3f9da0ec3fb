pub mod day;
pub mod due;
pub mod quality;
pub mod review_card;
pub mod review_session;
pub mod sm2;

pub use quality::{Quality, SimpleQuality};
pub use review_card::ReviewCard;
pub use review_session::ReviewSession;
