use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

const DEFAULT_MODEL_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
const DEFAULT_MODEL_NAME: &str = "gemini-1.5-flash";

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub courses_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    pub model: ModelConfig,
}

/// Settings for the OpenAI-compatible chat endpoint backing the text generator.
#[derive(Clone, Debug)]
pub struct ModelConfig {
    pub api_key: SecretString,
    pub api_base: String,
    pub model_name: String,
    pub temperature: f32,
    pub top_p: f32,
    pub max_output_tokens: u32,
    /// Number of history messages replayed per turn. 0 keeps everything.
    pub history_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "course_db".to_string()),
            courses_collection: env::var("COURSES_COLLECTION")
                .unwrap_or_else(|_| "courses".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: parse_var("WEB_SERVER_PORT", 5000),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            model: ModelConfig::from_env(),
        }
    }

    /// Fails when settings without a usable default are missing.
    pub fn validate(&self) -> AppResult<()> {
        if self.model.api_key.expose_secret().trim().is_empty() {
            return Err(AppError::ValidationError(
                "GOOGLE_API_KEY is missing! Set it in the environment or in a .env file."
                    .to_string(),
            ));
        }
        if self.model.model_name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "MODEL_NAME must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "course_db_test".to_string(),
            courses_collection: "courses".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            cors_allowed_origin: "http://localhost:3000".to_string(),
            model: ModelConfig {
                api_key: SecretString::from("test_api_key".to_string()),
                api_base: DEFAULT_MODEL_API_BASE.to_string(),
                model_name: DEFAULT_MODEL_NAME.to_string(),
                temperature: 1.0,
                top_p: 0.95,
                max_output_tokens: 8192,
                history_limit: 0,
            },
        }
    }
}

impl ModelConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: SecretString::from(env::var("GOOGLE_API_KEY").unwrap_or_default()),
            api_base: env::var("MODEL_API_BASE")
                .unwrap_or_else(|_| DEFAULT_MODEL_API_BASE.to_string()),
            model_name: env::var("MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL_NAME.to_string()),
            temperature: parse_var("MODEL_TEMPERATURE", 1.0),
            top_p: parse_var("MODEL_TOP_P", 0.95),
            max_output_tokens: parse_var("MODEL_MAX_OUTPUT_TOKENS", 8192),
            history_limit: parse_var("SESSION_HISTORY_LIMIT", 0),
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
