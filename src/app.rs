use crate::feedback::{Cue, Feedback};
use crate::high_score::HighScoreStore;
use crate::logger;
use crate::models::{AppState, FetchRequest, FetchResponse, QuizParameters, QuizSession};
use crate::options::{handle_options_input, OptionsAction, OptionsForm};
use crate::session::{handle_quiz_input, QuizAction};
use crate::ui::{draw_confetti, draw_options, draw_quiz};
use crossbeam_channel::Sender;
use crossterm::event::KeyEvent;
use ratatui::Frame;

/// Top-level state: which view is mounted and what flows between them.
pub struct App<S: HighScoreStore> {
    pub state: AppState,
    pub form: OptionsForm,
    pub session: Option<QuizSession>,
    pub feedback: Feedback,
    pub should_quit: bool,
    store: S,
    request_tx: Sender<FetchRequest>,
    last_generation: u64,
}

impl<S: HighScoreStore> App<S> {
    pub fn new(store: S, request_tx: Sender<FetchRequest>) -> Self {
        let form = OptionsForm::new(store.get());
        Self {
            state: AppState::Options,
            form,
            session: None,
            feedback: Feedback::new(),
            should_quit: false,
            store,
            request_tx,
            last_generation: 0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn next_generation(&mut self) -> u64 {
        self.last_generation += 1;
        self.last_generation
    }

    fn dispatch(&self, request: FetchRequest) {
        if self.request_tx.send(request).is_err() {
            logger::log("Fetch worker is gone, request dropped");
        }
    }

    fn start_quiz(&mut self, params: QuizParameters) {
        let generation = self.next_generation();
        let (session, request) = QuizSession::new(params, generation);
        self.session = Some(session);
        self.state = AppState::Quiz;
        self.dispatch(request);
    }

    fn back_to_options(&mut self) {
        self.feedback.stop();
        self.session = None;
        self.state = AppState::Options;
        self.form.high_score = self.store.get();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state {
            AppState::Options => match handle_options_input(&mut self.form, key) {
                OptionsAction::Start(params) => self.start_quiz(params),
                OptionsAction::Quit => self.should_quit = true,
                OptionsAction::None => {}
            },
            AppState::Quiz => {
                let generation = self.last_generation + 1;
                let Some(session) = self.session.as_mut() else {
                    self.state = AppState::Options;
                    return;
                };

                match handle_quiz_input(session, key, &mut self.state, &mut self.store, generation) {
                    QuizAction::Fetch(request) => {
                        self.last_generation = request.generation;
                        self.feedback.stop();
                        self.dispatch(request);
                    }
                    QuizAction::Completed(event) => {
                        self.feedback.on_event(&event, &mut rand::thread_rng());
                    }
                    QuizAction::BackToOptions => self.back_to_options(),
                    QuizAction::Quit => self.should_quit = true,
                    QuizAction::None => {}
                }
            }
        }
    }

    pub fn handle_fetch_response(&mut self, response: FetchResponse) {
        match self.session.as_mut() {
            Some(session) => {
                session.apply_fetch(response);
            }
            None => logger::log(&format!(
                "Dropping response for generation {}, no quiz mounted",
                response.generation
            )),
        }
    }

    /// Advances animations; returns the cue to play if one is due.
    pub fn tick(&mut self) -> Option<Cue> {
        self.feedback.tick(&mut rand::thread_rng());
        self.feedback.take_bell()
    }

    pub fn draw(&self, f: &mut Frame) {
        match (&self.state, &self.session) {
            (AppState::Quiz, Some(session)) => draw_quiz(f, session),
            _ => draw_options(f, &self.form),
        }
        if let Some(confetti) = &self.feedback.confetti {
            draw_confetti(f, confetti);
        }
    }
}
