use std::sync::Arc;

use log::info;
use vocab_review::clock::MS_PER_DAY;
use vocab_review::config::{DEFAULT_CONFIG_PATH, ReviewConfig};
use vocab_review::models::sm2::format_interval;
use vocab_review::*;

const SAMPLE_CARDS: [(&str, &str, &str); 3] = [
    ("abandon", "v. to give up; to leave behind", "əˈbændən"),
    ("ability", "n. the power or skill to do something", "əˈbɪləti"),
    ("abroad", "adv. in or to a foreign country", "əˈbrɔːd"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ReviewConfig::load_or_default(DEFAULT_CONFIG_PATH)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let store = Arc::new(SqliteCardStore::open(&config.database_path)?);
    let mut deck = ReviewDeck::new(store, Arc::new(SystemClock));
    deck.load().await?;

    if deck.cards().is_empty() && config.seed_sample_cards {
        for (word, gloss, phone) in SAMPLE_CARDS {
            deck.add_card(word, vec![gloss.to_string()], Some(phone.to_string()))
                .await?;
        }
        info!("Sample cards created");
    }

    let due = deck.due_cards();
    let upcoming = deck.upcoming_cards(config.upcoming_days);
    info!(
        "{} cards tracked, {} due now, {} due in the next {} days",
        deck.cards().len(),
        due.len(),
        upcoming.len(),
        config.upcoming_days
    );
    for card in &due {
        info!("  due: {} ({})", card.word, card.translations.join("; "));
    }
    let now = SystemClock.now_millis();
    for card in &upcoming {
        let days = ((card.next_review_at - now) as f64 / MS_PER_DAY as f64).ceil() as u32;
        info!("  upcoming: {} {}", card.word, format_interval(days));
    }
    for (date, cards) in deck.cards_by_due_date() {
        info!("  {}: {} cards", date, cards.len());
    }

    Ok(())
}
