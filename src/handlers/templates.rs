//! Template and form structs for the quiz handlers.

use askama::Template;
use serde::Deserialize;

#[derive(Template)]
#[template(path = "flashcard.html")]
pub struct FlashcardTemplate {
  pub question: String,
  pub position: usize,
  pub total: usize,
  pub answer: String,
  pub at_start: bool,
  pub at_end: bool,
}

#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsTemplate {
  pub score: usize,
  pub total: usize,
  pub rows: Vec<ResultRow>,
}

/// One row of the answer key.
pub struct ResultRow {
  pub number: usize,
  pub question: String,
  pub user_display: String,
  pub correct_display: String,
  pub correct: bool,
}

#[derive(Template)]
#[template(path = "no_cards.html")]
pub struct NoCardsTemplate {}

/// Form body shared by the answer/navigation posts; the card input travels
/// with every button press so typed text is never lost.
#[derive(Deserialize)]
pub struct AnswerForm {
  #[serde(default)]
  pub answer: String,
}
