//! Application state shared across handlers.

use std::sync::{Arc, Mutex};

use crate::deck::Flashcard;
use crate::session::QuizSession;

/// The active session behind a lock; axum handlers run concurrently.
pub type SharedSession = Arc<Mutex<QuizSession>>;

/// Application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
  /// Full flashcard pool, read-only after startup
  pub pool: Arc<Vec<Flashcard>>,

  /// The current quiz session
  pub session: SharedSession,
}

impl AppState {
  pub fn new(pool: Vec<Flashcard>, deck_size: usize) -> Self {
    let session = QuizSession::new(&pool, deck_size);
    AppState {
      pool: Arc::new(pool),
      session: Arc::new(Mutex::new(session)),
    }
  }
}
