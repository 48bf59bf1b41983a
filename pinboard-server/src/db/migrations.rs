//! Startup migration for the messages table

use sqlx::MySqlPool;

/// Create the messages table if it does not exist. Idempotent.
pub async fn run(pool: &MySqlPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS messages (
            id INT AUTO_INCREMENT PRIMARY KEY,
            content TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("database migrations complete");
    Ok(())
}
