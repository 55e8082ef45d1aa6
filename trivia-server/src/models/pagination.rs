//! Question list pagination
//!
//! Pages are a fixed 10 questions, 1-indexed, always in ascending id order.
//! A page past the end of the data is an empty list, not an error.

use serde::Deserialize;

/// Fixed number of questions per page
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// Pagination parameters for question listings
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
}

impl Pagination {
    /// Create pagination, clamping the page to a minimum of 1.
    pub fn new(page: u32) -> Self {
        Self { page: page.max(1) }
    }

    /// Calculate SQL OFFSET value.
    ///
    /// Widened before the multiply: any u32 page is valid input, and the
    /// largest ones would overflow in u32 arithmetic.
    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * QUESTIONS_PER_PAGE as i64
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> i64 {
        QUESTIONS_PER_PAGE as i64
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1 }
    }
}

/// Query parameters for paginated listings (`?page=N`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<u32>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(params.page.unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_calculation() {
        let p = Pagination::new(1);
        assert_eq!(p.offset(), 0);

        let p = Pagination::new(2);
        assert_eq!(p.offset(), 10);

        let p = Pagination::new(7);
        assert_eq!(p.offset(), 60);
    }

    #[test]
    fn offset_handles_huge_page_numbers() {
        let p = Pagination::new(u32::MAX);
        assert_eq!(p.offset(), (u32::MAX as i64 - 1) * 10);
    }

    #[test]
    fn limit_is_fixed() {
        assert_eq!(Pagination::new(1).limit(), 10);
        assert_eq!(Pagination::new(99).limit(), 10);
    }

    #[test]
    fn clamps_page() {
        let p = Pagination::new(0);
        assert_eq!(p.page, 1);
    }

    #[test]
    fn params_default_to_first_page() {
        let p = Pagination::from(PaginationParams { page: None });
        assert_eq!(p.page, 1);

        let p = Pagination::from(PaginationParams { page: Some(3) });
        assert_eq!(p.page, 3);
    }
}
