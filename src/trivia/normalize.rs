use crate::models::Question;
use crate::trivia::RawQuestion;
use rand::seq::SliceRandom;
use rand::Rng;

pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Decodes every text field and fixes a random answer order per question.
/// The order is never touched again for the lifetime of the session.
pub fn normalize_questions<R: Rng + ?Sized>(raw: Vec<RawQuestion>, rng: &mut R) -> Vec<Question> {
    raw.into_iter()
        .map(|q| {
            let correct_answer = decode_entities(&q.correct_answer);
            let mut answers: Vec<String> = q
                .incorrect_answers
                .iter()
                .map(|a| decode_entities(a))
                .collect();
            answers.push(correct_answer.clone());
            answers.shuffle(rng);

            Question {
                prompt: decode_entities(&q.question),
                correct_answer,
                answers,
            }
        })
        .collect()
}
