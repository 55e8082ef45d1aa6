//! Quiz question selection
//!
//! The quiz endpoint is stateless: the client resends the ids it has already
//! seen, and the selector recomputes the candidate set fresh on every call.
//! As long as the client accumulates `previous_questions` honestly, no
//! question repeats within one quiz run.

use rand::Rng;

use crate::db::repos::Question;

/// Which questions are in play for a quiz round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    /// Every category
    All,
    /// A single category
    Category(i32),
}

impl QuizScope {
    /// Interpret the request's category selector.
    ///
    /// A missing `quiz_category` or the frontend's all-categories sentinel
    /// (id 0) means the whole bank is in scope.
    pub fn from_category_id(id: Option<i32>) -> Self {
        match id {
            None | Some(0) => Self::All,
            Some(id) => Self::Category(id),
        }
    }

    /// Category filter for the repository, if any.
    pub fn category(&self) -> Option<i32> {
        match self {
            Self::All => None,
            Self::Category(id) => Some(*id),
        }
    }
}

/// Pick one unseen question uniformly at random.
///
/// Candidates whose id appears in `previous` are filtered out first; the
/// pick is uniform over what remains. An exhausted candidate set returns
/// `None` so the caller can end the quiz gracefully.
pub fn pick_unseen<R: Rng>(
    candidates: Vec<Question>,
    previous: &[i32],
    rng: &mut R,
) -> Option<Question> {
    let mut remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();

    if remaining.is_empty() {
        return None;
    }

    let idx = rng.gen_range(0..remaining.len());
    Some(remaining.swap_remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i32) -> Question {
        Question {
            id,
            question: format!("question {}", id),
            answer: format!("answer {}", id),
            category: 1,
            difficulty: 2,
        }
    }

    fn bank() -> Vec<Question> {
        (1..=5).map(question).collect()
    }

    #[test]
    fn never_returns_a_previous_question() {
        let mut rng = StdRng::seed_from_u64(7);
        let previous = [1, 3, 5];

        for _ in 0..100 {
            let picked = pick_unseen(bank(), &previous, &mut rng).unwrap();
            assert!(!previous.contains(&picked.id));
        }
    }

    #[test]
    fn empty_remainder_is_none_not_error() {
        let mut rng = StdRng::seed_from_u64(7);

        assert!(pick_unseen(vec![], &[], &mut rng).is_none());
        assert!(pick_unseen(bank(), &[1, 2, 3, 4, 5], &mut rng).is_none());
    }

    #[test]
    fn growing_previous_list_exhausts_the_bank() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut previous = Vec::new();

        // Each round consumes exactly one question, so the bank empties in
        // exactly as many rounds as it has questions.
        for _ in 0..5 {
            let picked = pick_unseen(bank(), &previous, &mut rng).expect("bank not yet exhausted");
            assert!(!previous.contains(&picked.id));
            previous.push(picked.id);
        }

        assert!(pick_unseen(bank(), &previous, &mut rng).is_none());
    }

    #[test]
    fn single_candidate_is_always_picked() {
        let mut rng = StdRng::seed_from_u64(0);
        let picked = pick_unseen(bank(), &[1, 2, 4, 5], &mut rng).unwrap();
        assert_eq!(picked.id, 3);
    }

    #[test]
    fn scope_sentinels() {
        assert_eq!(QuizScope::from_category_id(None), QuizScope::All);
        assert_eq!(QuizScope::from_category_id(Some(0)), QuizScope::All);
        assert_eq!(
            QuizScope::from_category_id(Some(2)),
            QuizScope::Category(2)
        );

        assert_eq!(QuizScope::All.category(), None);
        assert_eq!(QuizScope::Category(2).category(), Some(2));
    }
}
