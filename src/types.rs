/**
* filename : types
* date: 2025. 4. 6.
* description: unified error type for node calls
**/

// ====== Unified Error Type ======
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
  #[error("Transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("JSON decode error: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("Node error {code}: {message}")]
  Node { code: i64, message: String },

  #[error("Node returned neither result nor error")]
  EmptyResponse,

  #[error("Configuration error: {0}")]
  Config(String),
}

// ====== Error Conversions (From impls) ======

impl From<config::ConfigError> for ApiError {
  fn from(err: config::ConfigError) -> Self {
    ApiError::Config(err.to_string())
  }
}

pub type ApiResult<T> = Result<T, ApiError>;
