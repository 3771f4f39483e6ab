pub mod app;
pub mod config;
pub mod db;
pub mod feedback;
pub mod fetch_worker;
pub mod high_score;
pub mod logger;
pub mod models;
pub mod options;
pub mod scoring;
pub mod session;
pub mod trivia;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use app::App;
pub use crate::config::Config;
pub use feedback::{Cue, Feedback};
pub use fetch_worker::spawn_fetch_worker;
pub use high_score::{HighScoreStore, MemoryHighScoreStore, SqliteHighScoreStore};
pub use models::{
    AppState, Category, Difficulty, FetchRequest, FetchResponse, Phase, Question, QuestionType,
    QuizParameters, QuizSession, SessionEvent,
};
pub use options::{normalize_count, OptionsForm};
pub use scoring::{all_answered, is_win, record_high_score, score};
pub use session::{handle_quiz_input, QuizAction};
pub use trivia::{FetchError, OpenTdbClient, QuestionSource};
