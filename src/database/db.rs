//! SQLite-backed local card store
//!
//! One row per word using the local record layout. Translations are kept
//! as a JSON array in a TEXT column; timestamps are epoch milliseconds.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use log::{debug, info};
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::CardStore;
use crate::error::{Result, StoreError};
use crate::models::ReviewCard;

const SELECT_COLUMNS: &str = "SELECT id, word, trans, usphone, ease_factor, interval_days, repetitions,
        next_review_at, last_review_at, created_at
     FROM review_cards";

pub struct SqliteCardStore {
    conn: Mutex<Connection>,
}

impl SqliteCardStore {
    /// Opens (or creates) the database file and its schema
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening review database at {:?}", path);
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

/// Creates the review_cards table if it does not exist yet
fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS review_cards (
            word TEXT PRIMARY KEY,
            id TEXT NOT NULL,
            trans TEXT NOT NULL DEFAULT '[]',
            usphone TEXT,
            ease_factor REAL NOT NULL DEFAULT 2.5,
            interval_days INTEGER NOT NULL DEFAULT 0,
            repetitions INTEGER NOT NULL DEFAULT 0,
            next_review_at INTEGER NOT NULL,
            last_review_at INTEGER,
            created_at INTEGER NOT NULL
        )",
        (),
    )?;
    Ok(())
}

/// Inserts a card, or overwrites the existing row for its word in place
/// (keeping the rowid, and with it the original insertion order).
fn write_card(conn: &Connection, card: &ReviewCard) -> Result<()> {
    let trans = serde_json::to_string(&card.translations)?;
    conn.execute(
        "INSERT INTO review_cards (word, id, trans, usphone, ease_factor, interval_days,
            repetitions, next_review_at, last_review_at, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
         ON CONFLICT(word) DO UPDATE SET
            id = excluded.id,
            trans = excluded.trans,
            usphone = excluded.usphone,
            ease_factor = excluded.ease_factor,
            interval_days = excluded.interval_days,
            repetitions = excluded.repetitions,
            next_review_at = excluded.next_review_at,
            last_review_at = excluded.last_review_at,
            created_at = excluded.created_at",
        params![
            card.word,
            card.id,
            trans,
            card.pronunciation,
            card.ease_factor,
            card.interval,
            card.repetitions,
            card.next_review_at,
            card.last_review_at,
            card.created_at,
        ],
    )?;
    Ok(())
}

/// Raw row; translations still JSON text
struct CardRow {
    card: ReviewCard,
    trans: String,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<CardRow> {
    Ok(CardRow {
        card: ReviewCard {
            id: row.get(0)?,
            word: row.get(1)?,
            translations: Vec::new(),
            pronunciation: row.get(3)?,
            ease_factor: row.get(4)?,
            interval: row.get(5)?,
            repetitions: row.get(6)?,
            next_review_at: row.get(7)?,
            last_review_at: row.get(8)?,
            created_at: row.get(9)?,
        },
        trans: row.get(2)?,
    })
}

fn into_card(row: CardRow) -> Result<ReviewCard> {
    let mut card = row.card;
    card.translations = serde_json::from_str(&row.trans)?;
    Ok(card)
}

#[async_trait]
impl CardStore for SqliteCardStore {
    async fn get(&self, word: &str) -> Result<Option<ReviewCard>> {
        let conn = self.conn()?;
        let row = conn
            .query_row(
                &format!("{SELECT_COLUMNS} WHERE word = ?1"),
                params![word],
                read_row,
            )
            .optional()?;
        row.map(into_card).transpose()
    }

    async fn upsert(&self, card: &ReviewCard) -> Result<()> {
        let conn = self.conn()?;
        write_card(&conn, card)?;
        debug!("Saved review card '{}'", card.word);
        Ok(())
    }

    async fn upsert_many(&self, cards: &[ReviewCard]) -> Result<()> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        for card in cards {
            write_card(&tx, card)?;
        }
        tx.commit()?;
        debug!("Saved {} review cards", cards.len());
        Ok(())
    }

    async fn remove(&self, word: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM review_cards WHERE word = ?1", params![word])?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let conn = self.conn()?;
        let removed = conn.execute("DELETE FROM review_cards", ())?;
        info!("Cleared {} review cards", removed);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<ReviewCard>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY rowid ASC"))?;
        let rows = stmt
            .query_map([], read_row)?
            .collect::<rusqlite::Result<Vec<CardRow>>>()?;
        rows.into_iter().map(into_card).collect()
    }
}
