//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod pagination;
pub mod question;
pub mod validation;

pub use pagination::{Pagination, PaginationParams, QUESTIONS_PER_PAGE};
pub use question::NewQuestion;
pub use validation::ValidationError;
