//! JSON import/export of card collections.
//! The file is a JSON array of cards in the local record layout.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::models::ReviewCard;

/// Writes `cards` to `path` as pretty-printed JSON.
pub fn export_cards_to_path(cards: &[ReviewCard], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, cards)?;
    writer.flush()?;
    info!("Exported {} review cards to {:?}", cards.len(), path);
    Ok(())
}

/// Reads a card collection written by `export_cards_to_path`.
/// Fails if the file doesn't exist or isn't a valid card array.
pub fn import_cards(path: impl AsRef<Path>) -> Result<Vec<ReviewCard>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let cards: Vec<ReviewCard> = serde_json::from_reader(reader)?;
    info!("Imported {} review cards from {:?}", cards.len(), path);
    Ok(cards)
}
