//! Startup migrations for the trivia tables

use sqlx::PgPool;

use super::DbError;

/// Create the trivia tables if they do not exist.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // category is a real foreign key: a question can never reference a
    // category that does not exist
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL REFERENCES categories(id),
            difficulty SMALLINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
