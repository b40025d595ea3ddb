//! Application configuration constants and the layered flashcard-pool path.

use serde::Deserialize;
use std::path::PathBuf;

// ==================== Flashcard Pool Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
  flashcards: Option<FlashcardsConfig>,
}

#[derive(Debug, Deserialize)]
struct FlashcardsConfig {
  path: Option<String>,
}

/// Load the flashcard pool path with priority: config.toml > .env > default
pub fn load_flashcards_path() -> PathBuf {
  // Load .env file if present
  let _ = dotenvy::dotenv();

  // Priority 1: config.toml
  if let Ok(contents) = std::fs::read_to_string("config.toml") {
    if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
      if let Some(flashcards) = config.flashcards {
        if let Some(path) = flashcards.path {
          tracing::info!("Using flashcard pool from config.toml: {}", path);
          return PathBuf::from(path);
        }
      }
    }
  }

  // Priority 2: .env FLASHCARDS_PATH
  if let Ok(path) = std::env::var("FLASHCARDS_PATH") {
    tracing::info!("Using flashcard pool from FLASHCARDS_PATH env: {}", path);
    return PathBuf::from(path);
  }

  // Default
  let default = PathBuf::from("demos/flashcards.json");
  tracing::info!("Using default flashcard pool path: {}", default.display());
  default
}

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const SERVER_PORT: u16 = 3000;

/// Get the full server bind address
pub fn server_bind_addr() -> String {
  format!("{}:{}", SERVER_ADDR, SERVER_PORT)
}

// ==================== Deck Configuration ====================

/// Number of cards drawn from the pool for each session
pub const DECK_SIZE: usize = 10;
