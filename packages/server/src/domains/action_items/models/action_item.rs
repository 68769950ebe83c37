use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqlitePool};

use crate::domains::action_items::data::ActionItemSummary;

/// A persisted action item, optionally linked to the note it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ActionItem {
    pub id: i64,
    pub note_id: Option<i64>,
    pub text: String,
    pub done: bool,
    pub created_at: String,
}

// =============================================================================
// Action Item Queries
// =============================================================================

impl ActionItem {
    /// Insert extracted items in one transaction.
    ///
    /// Summaries come back in the same order as `items`.
    pub async fn insert_many(
        items: &[String],
        note_id: Option<i64>,
        pool: &SqlitePool,
    ) -> Result<Vec<ActionItemSummary>> {
        let mut tx = pool.begin().await?;
        let summaries = Self::insert_many_with(items, note_id, &mut tx).await?;
        tx.commit().await?;
        Ok(summaries)
    }

    /// Insert items on an existing connection (usually an open transaction).
    pub async fn insert_many_with(
        items: &[String],
        note_id: Option<i64>,
        conn: &mut SqliteConnection,
    ) -> Result<Vec<ActionItemSummary>> {
        let mut summaries = Vec::with_capacity(items.len());

        for text in items {
            let summary = sqlx::query_as::<_, ActionItemSummary>(
                "INSERT INTO action_items (note_id, text) VALUES (?, ?) RETURNING id, text",
            )
            .bind(note_id)
            .bind(text)
            .fetch_one(&mut *conn)
            .await?;
            summaries.push(summary);
        }

        Ok(summaries)
    }

    /// Items newest first, optionally restricted to one note.
    pub async fn list(note_id: Option<i64>, pool: &SqlitePool) -> Result<Vec<Self>> {
        let items = match note_id {
            Some(note_id) => {
                sqlx::query_as::<_, Self>(
                    "SELECT id, note_id, text, done, created_at FROM action_items WHERE note_id = ? ORDER BY id DESC",
                )
                .bind(note_id)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Self>(
                    "SELECT id, note_id, text, done, created_at FROM action_items ORDER BY id DESC",
                )
                .fetch_all(pool)
                .await?
            }
        };
        Ok(items)
    }

    /// Set the done flag. Returns `false` when no such item exists.
    pub async fn set_done(id: i64, done: bool, pool: &SqlitePool) -> Result<bool> {
        let result = sqlx::query("UPDATE action_items SET done = ? WHERE id = ?")
            .bind(done)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
