//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use server_core::domains::action_items::{ActionItem, ActionItemSummary};
use server_core::domains::notes::Note;
use sqlx::SqlitePool;

/// Create a note with the given content
pub async fn create_test_note(pool: &SqlitePool, content: &str) -> Result<Note> {
    Note::create(content, pool).await
}

/// Store action items, optionally attached to a note
pub async fn create_test_items(
    pool: &SqlitePool,
    items: &[&str],
    note_id: Option<i64>,
) -> Result<Vec<ActionItemSummary>> {
    let items: Vec<String> = items.iter().map(|s| s.to_string()).collect();
    ActionItem::insert_many(&items, note_id, pool).await
}
