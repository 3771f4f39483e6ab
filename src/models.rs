use crate::trivia::FetchError;
use std::collections::BTreeMap;
use std::fmt;

pub const MIN_QUESTIONS: u8 = 2;
pub const MAX_QUESTIONS: u8 = 50;
pub const DEFAULT_QUESTIONS: u8 = 5;

/// Open Trivia DB category ids offered on the options screen.
pub const CATEGORIES: &[(Category, &str)] = &[
    (Category::Any, "Any Category"),
    (Category::Id(9), "General Knowledge"),
    (Category::Id(10), "Books"),
    (Category::Id(11), "Film"),
    (Category::Id(12), "Music"),
    (Category::Id(13), "Musicals & Theatres"),
    (Category::Id(14), "Television"),
    (Category::Id(15), "Video Games"),
    (Category::Id(16), "Board Games"),
    (Category::Id(17), "Science & Nature"),
    (Category::Id(18), "Computers"),
    (Category::Id(19), "Mathematics"),
    (Category::Id(20), "Mythology"),
    (Category::Id(21), "Sports"),
    (Category::Id(22), "Geography"),
    (Category::Id(23), "History"),
    (Category::Id(24), "Politics"),
    (Category::Id(25), "Art"),
    (Category::Id(26), "Celebrities"),
    (Category::Id(27), "Animals"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Any,
    Id(u32),
}

impl Category {
    pub fn label(&self) -> &'static str {
        CATEGORIES
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, label)| *label)
            .unwrap_or("Unknown Category")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Any,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Any,
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
    ];

    /// Query value, or `None` when the API should pick.
    pub fn as_query(&self) -> Option<&'static str> {
        match self {
            Difficulty::Any => None,
            Difficulty::Easy => Some("easy"),
            Difficulty::Medium => Some("medium"),
            Difficulty::Hard => Some("hard"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Any => "Any Difficulty",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    Any,
    Multiple,
    Boolean,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [
        QuestionType::Any,
        QuestionType::Multiple,
        QuestionType::Boolean,
    ];

    pub fn as_query(&self) -> Option<&'static str> {
        match self {
            QuestionType::Any => None,
            QuestionType::Multiple => Some("multiple"),
            QuestionType::Boolean => Some("boolean"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Any => "Any Type",
            QuestionType::Multiple => "Multiple Choice",
            QuestionType::Boolean => "True / False",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizParameters {
    pub count: u8,
    pub category: Category,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
}

impl Default for QuizParameters {
    fn default() -> Self {
        Self {
            count: DEFAULT_QUESTIONS,
            category: Category::Any,
            difficulty: Difficulty::Any,
            question_type: QuestionType::Any,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub correct_answer: String,
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Error,
    InProgress,
    Completed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Loading => write!(f, "loading"),
            Phase::Error => write!(f, "error"),
            Phase::InProgress => write!(f, "in progress"),
            Phase::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug)]
pub struct QuizSession {
    pub params: QuizParameters,
    pub questions: Vec<Question>,
    pub selected_answers: BTreeMap<usize, String>,
    pub phase: Phase,
    pub generation: u64,
    pub current_question: usize,
    pub current_answer: usize,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub params: QuizParameters,
}

#[derive(Debug)]
pub struct FetchResponse {
    pub generation: u64,
    pub result: Result<Vec<Question>, FetchError>,
}

/// Emitted by the session on a state transition that the presentation
/// layer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Completed {
        score: usize,
        total: usize,
        won: bool,
        new_high_score: bool,
    },
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Options,
    Quiz,
}
