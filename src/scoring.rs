use crate::high_score::HighScoreStore;
use crate::models::QuizSession;

/// Number of questions whose selected answer is the correct one.
pub fn score(session: &QuizSession) -> usize {
    session
        .questions
        .iter()
        .enumerate()
        .filter(|(i, question)| {
            session
                .selected_answers
                .get(i)
                .is_some_and(|answer| *answer == question.correct_answer)
        })
        .count()
}

/// Every question has exactly one selection.
pub fn all_answered(session: &QuizSession) -> bool {
    !session.questions.is_empty()
        && session.selected_answers.len() == session.questions.len()
        && session
            .selected_answers
            .keys()
            .all(|i| *i < session.questions.len())
}

/// At least half right counts as a win.
pub fn is_win(score: usize, total: usize) -> bool {
    score * 2 >= total
}

/// Raises the stored high score when `score` beats it. Returns whether it
/// did. Win or lose does not matter here.
pub fn record_high_score<S: HighScoreStore + ?Sized>(store: &mut S, score: usize) -> bool {
    let score = u32::try_from(score).unwrap_or(u32::MAX);
    if score > store.get() {
        store.set(score);
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::high_score::MemoryHighScoreStore;
    use crate::models::{Phase, Question, QuizParameters};
    use std::collections::BTreeMap;

    fn session_with(correct: &[&str], selected: &[(usize, &str)]) -> QuizSession {
        QuizSession {
            params: QuizParameters::default(),
            questions: correct
                .iter()
                .map(|c| Question {
                    prompt: "Q".to_string(),
                    correct_answer: c.to_string(),
                    answers: vec![c.to_string(), "wrong".to_string()],
                })
                .collect(),
            selected_answers: selected
                .iter()
                .map(|(i, a)| (*i, a.to_string()))
                .collect::<BTreeMap<_, _>>(),
            phase: Phase::InProgress,
            generation: 1,
            current_question: 0,
            current_answer: 0,
            error_message: None,
        }
    }

    #[test]
    fn test_score_counts_matches() {
        let session = session_with(&["a", "b", "c"], &[(0, "a"), (1, "wrong"), (2, "c")]);
        assert_eq!(score(&session), 2);
    }

    #[test]
    fn test_score_with_partial_selection() {
        let session = session_with(&["a", "b"], &[(1, "b")]);
        assert_eq!(score(&session), 1);
    }

    #[test]
    fn test_score_bounds() {
        let none = session_with(&["a", "b"], &[]);
        assert_eq!(score(&none), 0);

        let all = session_with(&["a", "b"], &[(0, "a"), (1, "b")]);
        assert_eq!(score(&all), 2);
    }

    #[test]
    fn test_all_answered() {
        assert!(!all_answered(&session_with(&["a", "b"], &[(0, "a")])));
        assert!(all_answered(&session_with(&["a", "b"], &[(0, "a"), (1, "x")])));
    }

    #[test]
    fn test_all_answered_rejects_out_of_range_keys() {
        let session = session_with(&["a", "b"], &[(0, "a"), (5, "b")]);
        assert!(!all_answered(&session));
    }

    #[test]
    fn test_all_answered_empty_session() {
        assert!(!all_answered(&session_with(&[], &[])));
    }

    #[test]
    fn test_is_win_half_inclusive() {
        assert!(is_win(5, 5));
        assert!(is_win(2, 4));
        assert!(is_win(3, 5));
        assert!(!is_win(2, 5));
        assert!(!is_win(0, 2));
    }

    #[test]
    fn test_record_high_score_only_raises() {
        let mut store = MemoryHighScoreStore::with_score(3);
        assert!(!record_high_score(&mut store, 2));
        assert!(!record_high_score(&mut store, 3));
        assert_eq!(store.writes, 0);
        assert!(record_high_score(&mut store, 4));
        assert_eq!(store.get(), 4);
    }

    #[test]
    fn test_high_score_is_running_maximum() {
        let mut store = MemoryHighScoreStore::with_score(1);
        let scores = [0, 3, 2, 5, 4, 5];
        let mut expected = 1;
        for s in scores {
            record_high_score(&mut store, s);
            expected = expected.max(s as u32);
            assert_eq!(store.get(), expected);
        }
    }
}
