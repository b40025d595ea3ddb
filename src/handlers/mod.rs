//! Quiz handlers: the card view, answer capture, navigation, and the
//! answer-key scoring view.

mod templates;

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use tower_http::services::ServeDir;

use crate::config;
use crate::state::AppState;

pub use templates::{AnswerForm, FlashcardTemplate, NoCardsTemplate, ResultRow, ResultsTemplate};

/// Full application router.
pub fn router(state: AppState) -> Router {
  Router::new()
    .route("/", get(index))
    .route("/answer", post(save_answer))
    .route("/next", post(next_card))
    .route("/prev", post(prev_card))
    .route("/submit", post(submit))
    .route("/results", get(results))
    .route("/new-deck", post(new_deck))
    .nest_service("/static", ServeDir::new("static"))
    .with_state(state)
}

fn session_error() -> Response {
  Html("<h1>Session Error</h1><p>Please refresh the page.</p>".to_string()).into_response()
}

/// Current card view.
pub async fn index(State(state): State<AppState>) -> Response {
  let session = match state.session.lock() {
    Ok(session) => session,
    Err(_) => return session_error(),
  };

  let Some(card) = session.current_card() else {
    return Html(NoCardsTemplate {}.render().unwrap_or_default()).into_response();
  };

  let template = FlashcardTemplate {
    question: card.question.clone(),
    position: session.current_index() + 1,
    total: session.len(),
    answer: session.answer_for(session.current_index()).to_string(),
    at_start: session.current_index() == 0,
    at_end: session.current_index() + 1 >= session.len(),
  };
  Html(template.render().unwrap_or_default()).into_response()
}

/// Save the typed answer for the current card.
pub async fn save_answer(
  State(state): State<AppState>,
  Form(form): Form<AnswerForm>,
) -> Response {
  let mut session = match state.session.lock() {
    Ok(session) => session,
    Err(_) => return session_error(),
  };
  session.set_answer(form.answer);
  Redirect::to("/").into_response()
}

pub async fn next_card(
  State(state): State<AppState>,
  Form(form): Form<AnswerForm>,
) -> Response {
  let mut session = match state.session.lock() {
    Ok(session) => session,
    Err(_) => return session_error(),
  };
  session.set_answer(form.answer);
  session.next();
  Redirect::to("/").into_response()
}

pub async fn prev_card(
  State(state): State<AppState>,
  Form(form): Form<AnswerForm>,
) -> Response {
  let mut session = match state.session.lock() {
    Ok(session) => session,
    Err(_) => return session_error(),
  };
  session.set_answer(form.answer);
  session.prev();
  Redirect::to("/").into_response()
}

/// Save the current card's answer, then show the answer key.
pub async fn submit(State(state): State<AppState>, Form(form): Form<AnswerForm>) -> Response {
  let mut session = match state.session.lock() {
    Ok(session) => session,
    Err(_) => return session_error(),
  };
  session.set_answer(form.answer);
  Redirect::to("/results").into_response()
}

/// Scoring pass over the whole deck.
pub async fn results(State(state): State<AppState>) -> Response {
  let session = match state.session.lock() {
    Ok(session) => session,
    Err(_) => return session_error(),
  };

  let rows: Vec<ResultRow> = session
    .results()
    .into_iter()
    .enumerate()
    .map(|(i, result)| ResultRow {
      number: i + 1,
      question: result.question,
      user_display: result.user_display,
      correct_display: result.correct_display,
      correct: result.correct,
    })
    .collect();

  // The rows already carry the verdicts; don't rescore the deck.
  let template = ResultsTemplate {
    score: rows.iter().filter(|row| row.correct).count(),
    total: session.len(),
    rows,
  };
  Html(template.render().unwrap_or_default()).into_response()
}

/// "Try another set": replace the deck wholesale and clear all answers.
pub async fn new_deck(State(state): State<AppState>) -> Response {
  let mut session = match state.session.lock() {
    Ok(session) => session,
    Err(_) => return session_error(),
  };
  session.reset(&state.pool, config::DECK_SIZE);
  tracing::debug!("Drew a new deck of {} cards", session.len());
  Redirect::to("/").into_response()
}
