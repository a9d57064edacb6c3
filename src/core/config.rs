use std::env;
use std::str::FromStr;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-lite";
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 8000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;
pub const DEFAULT_WORDS_PER_MINUTE: usize = 200;
pub const DEFAULT_CHUNK_CONCURRENCY: usize = 1;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub gemini_model: Option<String>,
    pub max_chunk_size: usize,
    pub chunk_overlap: usize,
    pub words_per_minute: usize,
    pub chunk_concurrency: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. `from_env` is this over `std::env`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| "GEMINI_API_KEY: environment variable not found".to_string())?;

        let config = Self {
            gemini_api_key,
            gemini_model: lookup("GEMINI_MODEL").filter(|m| !m.trim().is_empty()),
            max_chunk_size: parse_or(&lookup, "MAX_CHUNK_SIZE", DEFAULT_MAX_CHUNK_SIZE)?,
            chunk_overlap: parse_or(&lookup, "CHUNK_OVERLAP", DEFAULT_CHUNK_OVERLAP)?,
            words_per_minute: parse_or(&lookup, "WORDS_PER_MINUTE", DEFAULT_WORDS_PER_MINUTE)?,
            chunk_concurrency: parse_or(&lookup, "CHUNK_CONCURRENCY", DEFAULT_CHUNK_CONCURRENCY)?,
        };
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        self.gemini_model.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }

    fn validate(&self) -> Result<(), String> {
        if self.max_chunk_size == 0 {
            return Err("MAX_CHUNK_SIZE: must be greater than 0".to_string());
        }
        if self.chunk_overlap >= self.max_chunk_size {
            return Err(format!(
                "CHUNK_OVERLAP: {} must be smaller than MAX_CHUNK_SIZE ({})",
                self.chunk_overlap, self.max_chunk_size
            ));
        }
        if self.words_per_minute == 0 {
            return Err("WORDS_PER_MINUTE: must be greater than 0".to_string());
        }
        if self.chunk_concurrency == 0 {
            return Err("CHUNK_CONCURRENCY: must be at least 1".to_string());
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, String>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| format!("{key}: invalid value {raw:?}: {e}")),
        None => Ok(default),
    }
}
