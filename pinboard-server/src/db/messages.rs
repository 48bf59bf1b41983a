//! Message repository

use pinboard_core::Message;
use sqlx::MySqlPool;

/// Fetch every message, newest first.
pub async fn list_messages(pool: &MySqlPool) -> Result<Vec<Message>, sqlx::Error> {
    sqlx::query_as::<_, Message>("SELECT id, content FROM messages ORDER BY id DESC")
        .fetch_all(pool)
        .await
}

/// Insert a message. The identity key is assigned by the database.
pub async fn insert_message(pool: &MySqlPool, content: &str) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO messages (content) VALUES (?)")
        .bind(content)
        .execute(pool)
        .await?;
    Ok(())
}
