use ::config::{ConfigError, Environment};
use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://opentdb.com/api.php";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

fn default_api_url() -> String {
    DEFAULT_API_URL.into()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url", deserialize_with = "api_url_or_default")]
    pub api_url: String,
    #[serde(default = "default_data_dir", deserialize_with = "data_dir_or_default")]
    pub data_dir: PathBuf,
    #[serde(default = "default_timeout_secs", deserialize_with = "timeout_or_default")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            data_dir: default_data_dir(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Reads `TRIVIA_API_URL`, `TRIVIA_DATA_DIR` and `TRIVIA_TIMEOUT_SECS`,
    /// falling back to defaults for anything unset, blank or unparsable.
    pub fn from_env() -> Self {
        Self::load(Environment::with_prefix("TRIVIA")).unwrap_or_else(|e| {
            eprintln!("Ignoring invalid TRIVIA_* settings: {}", e);
            Self::default()
        })
    }

    fn load(env: Environment) -> Result<Self, ConfigError> {
        ::config::Config::builder()
            .add_source(env.ignore_empty(true))
            .build()?
            .try_deserialize()
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("trivia.db")
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("trivia-quiz.log")
    }
}

fn api_url_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let raw = String::deserialize(d)?;
    Ok(Some(raw.trim())
        .filter(|v| !v.is_empty())
        .map_or_else(default_api_url, str::to_string))
}

fn data_dir_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<PathBuf, D::Error> {
    let raw = String::deserialize(d)?;
    Ok(Some(raw.trim())
        .filter(|v| !v.is_empty())
        .map_or_else(default_data_dir, PathBuf::from))
}

fn timeout_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
    let raw = String::deserialize(d)?;
    Ok(raw
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TIMEOUT_SECS))
}

fn default_data_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        let home =
            std::env::var("USERPROFILE").unwrap_or_else(|_| "C:\\Users\\User".to_string());
        PathBuf::from(home).join(".local\\share\\trivia-quiz")
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/home/user".to_string());
        PathBuf::from(home).join(".local/share/trivia-quiz")
    }
}
