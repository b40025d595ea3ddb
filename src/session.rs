//! Quiz session state: the drawn deck, the per-card answer map, and the
//! current card index.
//!
//! The session is explicit caller-owned state (held in `AppState`); the
//! evaluator it calls during the scoring pass stays stateless and pure.

use std::collections::HashMap;

use crate::deck::{self, Flashcard};
use crate::evaluator;

/// Scored entry for the answer key view.
#[derive(Debug, Clone)]
pub struct CardResult {
  pub question: String,
  pub user_display: String,
  pub correct_display: String,
  pub correct: bool,
}

pub struct QuizSession {
  deck: Vec<Flashcard>,
  /// Sparse: missing entries mean the card was never answered.
  answers: HashMap<usize, String>,
  current: usize,
}

impl QuizSession {
  pub fn new(pool: &[Flashcard], deck_size: usize) -> Self {
    QuizSession {
      deck: deck::draw_deck(pool, deck_size),
      answers: HashMap::new(),
      current: 0,
    }
  }

  pub fn deck(&self) -> &[Flashcard] {
    &self.deck
  }

  pub fn len(&self) -> usize {
    self.deck.len()
  }

  pub fn is_empty(&self) -> bool {
    self.deck.is_empty()
  }

  pub fn current_index(&self) -> usize {
    self.current
  }

  pub fn current_card(&self) -> Option<&Flashcard> {
    self.deck.get(self.current)
  }

  /// Raw text the user typed for a card; missing entries read as empty.
  pub fn answer_for(&self, index: usize) -> &str {
    self.answers.get(&index).map(String::as_str).unwrap_or("")
  }

  /// Save the raw text for the current card.
  pub fn set_answer(&mut self, text: String) {
    self.answers.insert(self.current, text);
  }

  /// Advance to the next card; no-op on the last one.
  pub fn next(&mut self) {
    if self.current + 1 < self.deck.len() {
      self.current += 1;
    }
  }

  /// Go back one card; no-op on the first one.
  pub fn prev(&mut self) {
    self.current = self.current.saturating_sub(1);
  }

  /// Replace the deck wholesale ("try another set") and clear all answers.
  pub fn reset(&mut self, pool: &[Flashcard], deck_size: usize) {
    self.deck = deck::draw_deck(pool, deck_size);
    self.answers.clear();
    self.current = 0;
  }

  /// Number of cards answered correctly, one equivalence check per card.
  pub fn score(&self) -> usize {
    self
      .deck
      .iter()
      .enumerate()
      .filter(|(i, card)| evaluator::check_equivalence(self.answer_for(*i), &card.answer))
      .count()
  }

  /// Scoring pass for the answer key: every card with the user's answer and
  /// the reference answer in display form.
  pub fn results(&self) -> Vec<CardResult> {
    self
      .deck
      .iter()
      .enumerate()
      .map(|(i, card)| {
        let user_answer = self.answer_for(i);
        CardResult {
          question: card.question.clone(),
          user_display: evaluator::format_for_display(user_answer),
          correct_display: evaluator::format_for_display(&card.answer),
          correct: evaluator::check_equivalence(user_answer, &card.answer),
        }
      })
      .collect()
  }
}
