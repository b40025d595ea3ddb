//! Symbolic expression engine: parsing, canonical simplification, and
//! rendering of algebraic expressions.
//!
//! The engine's contract is small: `parse` turns normalized text into an
//! expression tree, `canonicalize` reduces it to a deterministic canonical
//! form that supports subtraction and zero testing, and `render` produces a
//! human-readable canonical string. Everything is exact rational arithmetic.

pub mod canonical;
pub mod error;
pub mod expr;
pub mod parser;
pub mod render;

pub use canonical::{Canonical, canonicalize};
pub use error::{EngineError, Result};
pub use expr::Expr;
pub use parser::parse;
pub use render::render;
