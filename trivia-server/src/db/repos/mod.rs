//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - List queries fetch the page and the total in a single query
//!   (LIMIT/OFFSET plus COUNT(*) OVER())
//! - "Row absent" is a distinct error from "storage failed"

pub mod categories;
pub mod questions;

pub use categories::{Category, CategoryRepo};
pub use questions::{DbError, Question, QuestionRepo};
