//! End-to-end quiz flow tests over the HTTP surface.

use axum::http::StatusCode;
use axum_test::TestServer;
use std::io::Write;

use algebra_flashcards::{deck, handlers, state::AppState};

/// Spin up a test server over a pool written to a temp JSON file.
fn test_server(cards_json: &str, deck_size: usize) -> TestServer {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  file.write_all(cards_json.as_bytes()).unwrap();

  let pool = deck::load_pool(file.path()).unwrap();
  let state = AppState::new(pool, deck_size);
  TestServer::new(handlers::router(state)).unwrap()
}

const ONE_CARD: &str = r#"[{"question": "(x + 3)^2", "answer": "x^2+6x+9"}]"#;

const TWO_CARDS: &str = r#"[
  {"question": "(x + 1)^2", "answer": "x^2+2x+1"},
  {"question": "(x + 2)^2", "answer": "x^2+4x+4"}
]"#;

#[tokio::test]
async fn index_shows_the_current_card() {
  let server = test_server(ONE_CARD, 10);

  let response = server.get("/").await;
  response.assert_status_ok();
  let text = response.text();
  assert!(text.contains("(x + 3)^2"));
  assert!(text.contains("Flashcard 1 of 1"));
}

#[tokio::test]
async fn equivalent_answer_scores_full_marks() {
  let server = test_server(ONE_CARD, 10);

  let response = server
    .post("/submit")
    .form(&[("answer", " X^2 + 6X + 9 ")])
    .await;
  assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

  let results = server.get("/results").await.text();
  assert!(results.contains("Score: 1/1"));
  assert!(results.contains("x^2+6x+9"));
  assert!(results.contains("correct-bg"));
  assert!(!results.contains("incorrect-bg"));
}

#[tokio::test]
async fn score_matches_the_answer_key_rows() {
  let server = test_server(TWO_CARDS, 2);

  // The deck is shuffled; answer whichever card is showing and leave the
  // other one blank.
  let page = server.get("/").await.text();
  let answer = if page.contains("(x + 1)^2") {
    "x^2+2x+1"
  } else {
    "x^2+4x+4"
  };
  server.post("/submit").form(&[("answer", answer)]).await;

  let results = server.get("/results").await.text();
  assert!(results.contains("Score: 1/2"));
  assert_eq!(results.matches("item correct-bg").count(), 1);
  assert_eq!(results.matches("item incorrect-bg").count(), 1);
}

#[tokio::test]
async fn wrong_answer_scores_zero() {
  let server = test_server(ONE_CARD, 10);

  server
    .post("/submit")
    .form(&[("answer", "x^2+6x+10")])
    .await;

  let results = server.get("/results").await.text();
  assert!(results.contains("Score: 0/1"));
  assert!(results.contains("incorrect-bg"));
}

#[tokio::test]
async fn unanswered_cards_show_none() {
  let server = test_server(ONE_CARD, 10);

  let results = server.get("/results").await.text();
  assert!(results.contains("Score: 0/1"));
  assert!(results.contains("(none)"));
}

#[tokio::test]
async fn garbage_answers_are_echoed_not_crashed() {
  let server = test_server(ONE_CARD, 10);

  server
    .post("/submit")
    .form(&[("answer", "not a valid $$ expr")])
    .await;

  let results = server.get("/results").await.text();
  assert!(results.contains("Score: 0/1"));
  assert!(results.contains("not a valid $$ expr"));
}

#[tokio::test]
async fn navigation_moves_between_cards_and_keeps_answers() {
  let server = test_server(TWO_CARDS, 2);

  let first = server.get("/").await.text();
  assert!(first.contains("Flashcard 1 of 2"));

  server.post("/next").form(&[("answer", "a1")]).await;
  let second = server.get("/").await.text();
  assert!(second.contains("Flashcard 2 of 2"));

  server.post("/prev").form(&[("answer", "")]).await;
  let back = server.get("/").await.text();
  assert!(back.contains("Flashcard 1 of 2"));
  assert!(back.contains("value=\"a1\""));
}

#[tokio::test]
async fn navigation_is_clamped_at_the_ends() {
  let server = test_server(ONE_CARD, 10);

  server.post("/prev").form(&[("answer", "")]).await;
  server.post("/next").form(&[("answer", "")]).await;
  server.post("/next").form(&[("answer", "")]).await;

  let text = server.get("/").await.text();
  assert!(text.contains("Flashcard 1 of 1"));
}

#[tokio::test]
async fn new_deck_clears_answers() {
  let server = test_server(ONE_CARD, 10);

  server
    .post("/submit")
    .form(&[("answer", "x^2+6x+9")])
    .await;
  assert!(server.get("/results").await.text().contains("Score: 1/1"));

  let response = server.post("/new-deck").await;
  assert_eq!(response.status_code(), StatusCode::SEE_OTHER);

  let results = server.get("/results").await.text();
  assert!(results.contains("Score: 0/1"));
  assert!(results.contains("(none)"));
}
