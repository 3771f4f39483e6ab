use crate::high_score::HighScoreStore;
use crate::logger;
use crate::models::{
    AppState, FetchRequest, FetchResponse, Phase, QuizParameters, QuizSession, SessionEvent,
};
use crate::scoring::{all_answered, is_win, record_high_score, score};
use crate::trivia::USER_ERROR_MESSAGE;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::BTreeMap;

#[derive(Debug, PartialEq)]
pub enum QuizAction {
    None,
    Fetch(FetchRequest),
    Completed(SessionEvent),
    BackToOptions,
    Quit,
}

impl QuizSession {
    /// A session starts out loading; the returned request must be handed to
    /// the fetch worker.
    pub fn new(params: QuizParameters, generation: u64) -> (Self, FetchRequest) {
        let session = Self {
            params: params.clone(),
            questions: Vec::new(),
            selected_answers: BTreeMap::new(),
            phase: Phase::Loading,
            generation,
            current_question: 0,
            current_answer: 0,
            error_message: None,
        };
        logger::log(&format!(
            "Session {} loading {} questions",
            generation, params.count
        ));
        (session, FetchRequest { generation, params })
    }

    /// Takes a worker response. Responses for an older generation, or
    /// arriving when nothing is loading, are dropped. Returns whether the
    /// response was applied.
    pub fn apply_fetch(&mut self, response: FetchResponse) -> bool {
        if response.generation != self.generation || self.phase != Phase::Loading {
            logger::log(&format!(
                "Dropping stale response for generation {} (current {}, {})",
                response.generation, self.generation, self.phase
            ));
            return false;
        }

        match response.result {
            Ok(questions) => {
                logger::log(&format!(
                    "Session {} received {} questions",
                    self.generation,
                    questions.len()
                ));
                self.questions = questions;
                self.phase = Phase::InProgress;
                self.error_message = None;
            }
            Err(e) => {
                logger::log(&format!("Session {} fetch failed: {}", self.generation, e));
                self.phase = Phase::Error;
                self.error_message = Some(USER_ERROR_MESSAGE.to_string());
            }
        }
        self.current_question = 0;
        self.current_answer = 0;
        true
    }

    /// Records `answer` for `question`. Ignored unless the quiz is running
    /// and the answer belongs to that question.
    pub fn select_answer(&mut self, question: usize, answer: &str) -> bool {
        if self.phase != Phase::InProgress {
            return false;
        }
        let Some(q) = self.questions.get(question) else {
            return false;
        };
        if !q.answers.iter().any(|a| a == answer) {
            return false;
        }

        self.selected_answers.insert(question, answer.to_string());
        true
    }

    pub fn can_submit(&self) -> bool {
        self.phase == Phase::InProgress && all_answered(self)
    }

    /// Freezes the score and raises the high score if beaten. Emits exactly
    /// one event per transition into `Completed`.
    pub fn submit<S: HighScoreStore + ?Sized>(&mut self, store: &mut S) -> Option<SessionEvent> {
        if !self.can_submit() {
            return None;
        }

        self.phase = Phase::Completed;
        let score = score(self);
        let total = self.questions.len();
        let won = is_win(score, total);
        let new_high_score = record_high_score(store, score);

        logger::log(&format!(
            "Session {} completed: {}/{} (won: {}, new high score: {})",
            self.generation, score, total, won, new_high_score
        ));

        Some(SessionEvent::Completed {
            score,
            total,
            won,
            new_high_score,
        })
    }

    /// Starts over with a fresh question set. Only valid once completed.
    pub fn restart(&mut self, generation: u64) -> Option<FetchRequest> {
        if self.phase != Phase::Completed {
            return None;
        }

        self.questions.clear();
        self.selected_answers.clear();
        self.phase = Phase::Loading;
        self.generation = generation;
        self.current_question = 0;
        self.current_answer = 0;
        self.error_message = None;

        logger::log(&format!("Session restarted as generation {}", generation));
        Some(FetchRequest {
            generation,
            params: self.params.clone(),
        })
    }

    pub fn final_score(&self) -> Option<(usize, usize)> {
        (self.phase == Phase::Completed).then(|| (score(self), self.questions.len()))
    }

    fn focus_question(&mut self, index: usize) {
        self.current_question = index;
        // Land on the chosen answer when there is one.
        self.current_answer = self
            .selected_answers
            .get(&index)
            .and_then(|selected| {
                self.questions[index]
                    .answers
                    .iter()
                    .position(|a| a == selected)
            })
            .unwrap_or(0);
    }
}

pub fn handle_quiz_input<S: HighScoreStore + ?Sized>(
    session: &mut QuizSession,
    key: KeyEvent,
    app_state: &mut AppState,
    store: &mut S,
    next_generation: u64,
) -> QuizAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return QuizAction::Quit;
    }

    if matches!(key.code, KeyCode::Esc | KeyCode::Char('b')) {
        *app_state = AppState::Options;
        return QuizAction::BackToOptions;
    }

    if !matches!(session.phase, Phase::InProgress | Phase::Completed)
        || session.questions.is_empty()
    {
        return QuizAction::None;
    }

    match key.code {
        KeyCode::Down => {
            if session.current_question < session.questions.len().saturating_sub(1) {
                session.focus_question(session.current_question + 1);
            }
            QuizAction::None
        }
        KeyCode::Up => {
            if session.current_question > 0 {
                session.focus_question(session.current_question - 1);
            }
            QuizAction::None
        }
        KeyCode::Left => {
            session.current_answer = session.current_answer.saturating_sub(1);
            QuizAction::None
        }
        KeyCode::Right => {
            let answers = session.questions[session.current_question].answers.len();
            if session.current_answer < answers.saturating_sub(1) {
                session.current_answer += 1;
            }
            QuizAction::None
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let index = session.current_question;
            let answer = session.questions[index].answers[session.current_answer].clone();
            session.select_answer(index, &answer);
            QuizAction::None
        }
        KeyCode::Char('s') => match session.submit(store) {
            Some(event) => QuizAction::Completed(event),
            None => QuizAction::None,
        },
        KeyCode::Char('r') => match session.restart(next_generation) {
            Some(request) => QuizAction::Fetch(request),
            None => QuizAction::None,
        },
        _ => QuizAction::None,
    }
}
