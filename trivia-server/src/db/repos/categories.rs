//! Category repository
//!
//! Categories are seed data: read by every listing endpoint, never written
//! through this API.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::DbError;

/// Category record from the database.
///
/// The display string lives in the `type` column; `type` is a Rust keyword,
/// so the field is named `kind` and renamed at the serialization boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub kind: String,
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by display string.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let rows = sqlx::query("SELECT id, type FROM categories ORDER BY type")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.iter().map(category_from_row).collect())
    }

    /// Get a single category by id.
    pub async fn get(&self, id: i32) -> Result<Category, DbError> {
        let row = sqlx::query("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "category",
                id: id.to_string(),
            })?;

        Ok(category_from_row(&row))
    }
}

fn category_from_row(row: &PgRow) -> Category {
    Category {
        id: row.get("id"),
        kind: row.get("type"),
    }
}

#[cfg(test)]
mod tests {
    // Covered by tests/api.rs against a real database
    // (cargo test -p trivia-server -- --ignored).
}
