pub mod algebra;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod handlers;
pub mod session;
pub mod state;
