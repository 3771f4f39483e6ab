use crate::config::Config;
use crate::logger;
use crate::models::QuizParameters;
use crate::trivia::FetchError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// A question as the API delivers it, entities still encoded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    response_code: u8,
    results: Vec<RawQuestion>,
}

#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn fetch_questions(
        &self,
        params: &QuizParameters,
    ) -> Result<Vec<RawQuestion>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct OpenTdbClient {
    http: reqwest::Client,
    api_url: String,
}

impl OpenTdbClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }
}

#[async_trait]
impl QuestionSource for OpenTdbClient {
    async fn fetch_questions(
        &self,
        params: &QuizParameters,
    ) -> Result<Vec<RawQuestion>, FetchError> {
        let query = build_query(params);
        logger::log(&format!("GET {} {:?}", self.api_url, query));

        let response = self.http.get(&self.api_url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status));
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

/// Query pairs for a request. "Any" choices are left out so the API
/// picks freely.
pub fn build_query(params: &QuizParameters) -> Vec<(&'static str, String)> {
    let mut query = vec![("amount", params.count.to_string())];

    if let crate::models::Category::Id(id) = params.category {
        query.push(("category", id.to_string()));
    }
    if let Some(difficulty) = params.difficulty.as_query() {
        query.push(("difficulty", difficulty.to_string()));
    }
    if let Some(kind) = params.question_type.as_query() {
        query.push(("type", kind.to_string()));
    }

    query
}

pub fn parse_response(body: &str) -> Result<Vec<RawQuestion>, FetchError> {
    let response: ApiResponse = serde_json::from_str(body)?;

    if response.response_code != 0 {
        return Err(FetchError::Api(response.response_code));
    }
    if response.results.is_empty() {
        return Err(FetchError::Empty);
    }

    Ok(response.results)
}
