use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::{SqliteExecutor, SqlitePool};

use crate::domains::action_items::{ActionItem, ActionItemSummary};

/// A stored block of free-form text.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Note {
    pub id: i64,
    pub content: String,
    pub created_at: String,
}

// =============================================================================
// Note Queries
// =============================================================================

impl Note {
    pub async fn create<'e, E>(content: &str, executor: E) -> Result<Self>
    where
        E: SqliteExecutor<'e>,
    {
        sqlx::query_as::<_, Self>(
            "INSERT INTO notes (content) VALUES (?) RETURNING id, content, created_at",
        )
        .bind(content)
        .fetch_one(executor)
        .await
        .map_err(Into::into)
    }

    /// Create a note and attach items to it atomically.
    ///
    /// Either both the note and every item are stored, or nothing is.
    pub async fn create_with_items(
        content: &str,
        items: &[String],
        pool: &SqlitePool,
    ) -> Result<(Self, Vec<ActionItemSummary>)> {
        let mut tx = pool.begin().await?;
        let note = Self::create(content, &mut *tx).await?;
        let summaries = ActionItem::insert_many_with(items, Some(note.id), &mut tx).await?;
        tx.commit().await?;
        Ok((note, summaries))
    }

    pub async fn find_by_id(id: i64, pool: &SqlitePool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT id, content, created_at FROM notes WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// All notes, newest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT id, content, created_at FROM notes ORDER BY id DESC")
            .fetch_all(pool)
            .await
            .map_err(Into::into)
    }
}
