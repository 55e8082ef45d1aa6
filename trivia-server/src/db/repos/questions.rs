//! Question repository
//!
//! All listings are ordered by ascending id. Paged queries use
//! COUNT(*) OVER() so the page and the total come back in one round trip.

use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::models::{NewQuestion, Pagination};

/// Question record from the database.
///
/// Serializes directly as the wire "formatted question" shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i16,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("unknown {field}: '{value}'")]
    InvalidReference { field: &'static str, value: String },
}

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List one page of all questions plus the total count.
    pub async fn list_page(&self, page: Pagination) -> Result<(Vec<Question>, i64), DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty,
                   COUNT(*) OVER() AS total
            FROM questions
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        match paged(rows) {
            (items, Some(total)) => Ok((items, total)),
            // Page past the end: the window function saw no rows, so the
            // total has to come from a plain count.
            (items, None) => {
                let total = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
                    .fetch_one(self.pool)
                    .await?;
                Ok((items, total))
            }
        }
    }

    /// List one page of questions in a category plus the count for that
    /// category. The caller is responsible for checking the category exists.
    pub async fn list_by_category(
        &self,
        category: i32,
        page: Pagination,
    ) -> Result<(Vec<Question>, i64), DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty,
                   COUNT(*) OVER() AS total
            FROM questions
            WHERE category = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(category)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        match paged(rows) {
            (items, Some(total)) => Ok((items, total)),
            (items, None) => {
                let total =
                    sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE category = $1")
                        .bind(category)
                        .fetch_one(self.pool)
                        .await?;
                Ok((items, total))
            }
        }
    }

    /// Search questions whose text contains the term, case-insensitively.
    ///
    /// ILIKE wildcards in the term are escaped so a literal `%` searches
    /// for a percent sign.
    pub async fn search(
        &self,
        term: &str,
        page: Pagination,
    ) -> Result<(Vec<Question>, i64), DbError> {
        let pattern = format!("%{}%", escape_like(term));
        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty,
                   COUNT(*) OVER() AS total
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(&pattern)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(self.pool)
        .await?;

        match paged(rows) {
            (items, Some(total)) => Ok((items, total)),
            (items, None) => {
                let total =
                    sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE question ILIKE $1")
                        .bind(&pattern)
                        .fetch_one(self.pool)
                        .await?;
                Ok((items, total))
            }
        }
    }

    /// All questions in scope for a quiz: one category, or every category.
    pub async fn list_in_scope(&self, category: Option<i32>) -> Result<Vec<Question>, DbError> {
        let rows = match category {
            Some(id) => {
                sqlx::query(
                    r#"
                    SELECT id, question, answer, category, difficulty
                    FROM questions
                    WHERE category = $1
                    ORDER BY id
                    "#,
                )
                .bind(id)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT id, question, answer, category, difficulty
                    FROM questions
                    ORDER BY id
                    "#,
                )
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(rows.iter().map(question_from_row).collect())
    }

    /// Insert a validated question, returning its assigned id.
    ///
    /// A foreign key violation on the category column is reported as an
    /// invalid reference, not a generic storage failure.
    pub async fn create(&self, new: &NewQuestion) -> Result<i32, DbError> {
        let row = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                DbError::InvalidReference {
                    field: "category",
                    value: new.category.to_string(),
                }
            }
            _ => DbError::Sqlx(e),
        })?;

        Ok(row.get("id"))
    }

    /// Delete a question by id; absent rows are a distinct NotFound.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        sqlx::query("DELETE FROM questions WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            })?;

        Ok(())
    }
}

fn question_from_row(row: &PgRow) -> Question {
    Question {
        id: row.get("id"),
        question: row.get("question"),
        answer: row.get("answer"),
        category: row.get("category"),
        difficulty: row.get("difficulty"),
    }
}

fn paged(rows: Vec<PgRow>) -> (Vec<Question>, Option<i64>) {
    let total = rows.first().map(|r| r.get::<i64, _>("total"));
    let items = rows.iter().map(question_from_row).collect();
    (items, total)
}

/// Escape ILIKE wildcards so user input matches literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_like_wildcards() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    // Repository round trips are covered by tests/api.rs against a real
    // database (cargo test -p trivia-server -- --ignored).
}
