use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::collections::HashMap;

use crate::domains::action_items::models::ActionItem;
use crate::domains::notes::models::Note;

/// A note as returned by the API, with its action items attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteData {
    pub id: i64,
    pub content: String,
    pub created_at: String,
    pub action_items: Vec<ActionItem>,
}

impl NoteData {
    pub fn new(note: Note, action_items: Vec<ActionItem>) -> Self {
        Self {
            id: note.id,
            content: note.content,
            created_at: note.created_at,
            action_items,
        }
    }

    /// Load one note with its items, newest item first.
    pub async fn find_by_id(id: i64, pool: &SqlitePool) -> Result<Option<Self>> {
        let Some(note) = Note::find_by_id(id, pool).await? else {
            return Ok(None);
        };
        let items = ActionItem::list(Some(id), pool).await?;
        Ok(Some(Self::new(note, items)))
    }

    /// Load every note with its items in two queries.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>> {
        let notes = Note::list(pool).await?;

        let mut by_note: HashMap<i64, Vec<ActionItem>> = HashMap::new();
        for item in ActionItem::list(None, pool).await? {
            if let Some(note_id) = item.note_id {
                by_note.entry(note_id).or_default().push(item);
            }
        }

        Ok(notes
            .into_iter()
            .map(|note| {
                let items = by_note.remove(&note.id).unwrap_or_default();
                Self::new(note, items)
            })
            .collect())
    }
}
