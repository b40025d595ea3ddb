//! Flashcard pool loading and deck sampling.
//!
//! The pool is a JSON array of question/answer pairs loaded once at startup.
//! A deck is a uniform random sample without replacement, drawn fresh for
//! each session (and on "try another set").

use rand::seq::{IndexedRandom, SliceRandom};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One question/answer pair from the pool. The answer is a canonical
/// algebraic expression in text form, e.g. `x^2+4x+4`. Immutable once
/// loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct Flashcard {
  pub question: String,
  pub answer: String,
}

/// Load the flashcard pool from a JSON file.
pub fn load_pool(path: &Path) -> Result<Vec<Flashcard>, PoolLoadError> {
  if !path.exists() {
    return Err(PoolLoadError::FileNotFound(path.display().to_string()));
  }

  let content = fs::read_to_string(path)
    .map_err(|e| PoolLoadError::Io(path.display().to_string(), e.to_string()))?;

  let cards: Vec<Flashcard> = serde_json::from_str(&content)
    .map_err(|e| PoolLoadError::Parse(path.display().to_string(), e.to_string()))?;

  Ok(cards)
}

/// Draw a deck of up to `size` cards by uniform sampling without
/// replacement, then shuffle the presentation order.
pub fn draw_deck(pool: &[Flashcard], size: usize) -> Vec<Flashcard> {
  let mut rng = rand::rng();
  let mut deck: Vec<Flashcard> = pool.choose_multiple(&mut rng, size).cloned().collect();
  deck.shuffle(&mut rng);
  deck
}

/// Pool loading errors.
#[derive(Debug)]
pub enum PoolLoadError {
  FileNotFound(String),
  Io(String, String),
  Parse(String, String),
}

impl std::fmt::Display for PoolLoadError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      PoolLoadError::FileNotFound(path) => write!(f, "Flashcard file not found: {}", path),
      PoolLoadError::Io(path, err) => write!(f, "IO error reading {}: {}", path, err),
      PoolLoadError::Parse(path, err) => write!(f, "Parse error in {}: {}", path, err),
    }
  }
}

impl std::error::Error for PoolLoadError {}
