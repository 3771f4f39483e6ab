pub mod client;
pub mod normalize;

pub use client::{build_query, parse_response, OpenTdbClient, QuestionSource, RawQuestion};
pub use normalize::{decode_entities, normalize_questions};

use reqwest::StatusCode;

/// Shown for every fetch failure; the cause only goes to the log.
pub const USER_ERROR_MESSAGE: &str = "Something went wrong, please try again";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Http request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Trivia API returned status {0}")]
    BadStatus(StatusCode),

    #[error("Malformed trivia payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Trivia API response code {0}")]
    Api(u8),

    #[error("Trivia API returned no questions")]
    Empty,
}
