//! New question validation
//!
//! The create endpoint requires every field; missing or blank fields are
//! rejected with the offending field name instead of being defaulted.

use super::ValidationError;

/// Allowed difficulty range (inclusive)
const MIN_DIFFICULTY: i16 = 1;
const MAX_DIFFICULTY: i16 = 5;

/// Validated input for creating a question
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i16,
}

impl NewQuestion {
    /// Validate a create request.
    ///
    /// # Rules
    /// - `question` and `answer` must be present and non-blank
    /// - `category` must be present (existence is checked by the database
    ///   foreign key on insert)
    /// - `difficulty` must be present and within 1..=5
    pub fn new(
        question: Option<String>,
        answer: Option<String>,
        category: Option<i32>,
        difficulty: Option<i16>,
    ) -> Result<Self, ValidationError> {
        let question = require_text("question", question)?;
        let answer = require_text("answer", answer)?;
        let category = category.ok_or(ValidationError::Missing { field: "category" })?;
        let difficulty = difficulty.ok_or(ValidationError::Missing {
            field: "difficulty",
        })?;

        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
            return Err(ValidationError::OutOfRange {
                field: "difficulty",
                min: MIN_DIFFICULTY as i64,
                max: MAX_DIFFICULTY as i64,
            });
        }

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

fn require_text(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    let value = value.ok_or(ValidationError::Missing { field })?;
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> NewQuestion {
        NewQuestion::new(
            Some("Who painted the Mona Lisa?".into()),
            Some("Leonardo da Vinci".into()),
            Some(2),
            Some(3),
        )
        .unwrap()
    }

    #[test]
    fn accepts_complete_input() {
        let q = full();
        assert_eq!(q.category, 2);
        assert_eq!(q.difficulty, 3);
    }

    #[test]
    fn rejects_missing_fields() {
        let err = NewQuestion::new(None, Some("a".into()), Some(1), Some(1)).unwrap_err();
        assert!(matches!(err, ValidationError::Missing { field: "question" }));

        let err = NewQuestion::new(Some("q".into()), Some("a".into()), None, Some(1)).unwrap_err();
        assert!(matches!(err, ValidationError::Missing { field: "category" }));
    }

    #[test]
    fn rejects_blank_text() {
        let err =
            NewQuestion::new(Some("   ".into()), Some("a".into()), Some(1), Some(1)).unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "question" }));
    }

    #[test]
    fn rejects_difficulty_out_of_range() {
        for bad in [0, 6, -1] {
            let err = NewQuestion::new(Some("q".into()), Some("a".into()), Some(1), Some(bad))
                .unwrap_err();
            assert!(matches!(err, ValidationError::OutOfRange { .. }));
        }
    }
}
