use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Failures the expression engine can produce. The answer evaluator absorbs
/// every variant into its documented fallback value.
#[derive(Debug, Error)]
pub enum EngineError {
  #[error("parse error: {0}")]
  Parse(String),
  #[error("unsupported operation: {0}")]
  Unsupported(String),
  #[error("division by zero")]
  DivisionByZero,
}
