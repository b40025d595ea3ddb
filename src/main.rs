use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use algebra_flashcards::{config, deck, handlers, state::AppState};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "algebra_flashcards=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let pool_path = config::load_flashcards_path();
  let pool = deck::load_pool(&pool_path).expect("Failed to load flashcard pool");
  tracing::info!(
    "Loaded {} flashcards from {}",
    pool.len(),
    pool_path.display()
  );

  let app = handlers::router(AppState::new(pool, config::DECK_SIZE));

  let bind_addr = config::server_bind_addr();
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://localhost:{}", config::SERVER_PORT);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
