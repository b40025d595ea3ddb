//! Answer evaluation: normalization, display formatting, and the
//! algebraic-equivalence predicate.
//!
//! Both public operations are total. Arbitrary user-typed text — garbage
//! included — is always safe to pass in: `check_equivalence` maps every
//! engine failure to `false`, and `format_for_display` falls back to
//! echoing the raw input (or `"(none)"` when the input is empty). Scoring
//! never sees an error.

use crate::algebra::{self, Canonical, EngineError};

/// Lexical cleanup before parsing: strip all whitespace, lowercase.
/// Pure and idempotent; never a validity check.
pub fn normalize(raw: &str) -> String {
  raw
    .chars()
    .filter(|c| !c.is_whitespace())
    .collect::<String>()
    .to_lowercase()
}

fn canonical_of(raw: &str) -> Result<Canonical, EngineError> {
  let expr = algebra::parse(&normalize(raw))?;
  algebra::canonicalize(&expr)
}

/// Render an answer in canonical simplified form for the answer key.
/// Unparseable nonempty input is echoed verbatim so the user still sees
/// what they typed; empty input reads as "(none)".
pub fn format_for_display(raw: &str) -> String {
  match canonical_of(raw) {
    Ok(canon) => algebra::render(&canon),
    Err(_) => {
      if normalize(raw).is_empty() {
        "(none)".to_string()
      } else {
        raw.to_string()
      }
    }
  }
}

/// Algebraic equivalence of two free-text answers, tested by subtracting
/// canonical forms and checking for zero. Insensitive to case, spacing,
/// term order and expansion state; malformed input on either side is
/// simply not equivalent.
pub fn check_equivalence(user_input: &str, correct_answer: &str) -> bool {
  match (canonical_of(user_input), canonical_of(correct_answer)) {
    (Ok(user), Ok(correct)) => user.sub(&correct).map(|d| d.is_zero()).unwrap_or(false),
    _ => false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn equivalent_forms_match() {
    assert!(check_equivalence("(x+2)^2", "x^2+4x+4"));
    assert!(check_equivalence("4+4x+x^2", "x^2+4x+4"));
    assert!(check_equivalence("(a+b)^2", "a^2+2ab+b^2"));
    assert!(check_equivalence("(2m-3n)^2", "4m^2-12mn+9n^2"));
    assert!(check_equivalence("x^2 - 9", "(x-3)(x+3)"));
  }

  #[test]
  fn case_and_spacing_are_insignificant() {
    assert!(check_equivalence(" X^2 + 4X + 4 ", "x^2+4x+4"));
    assert!(check_equivalence("X ^ 2+4 x+4", "x^2+4x+4"));
    assert!(check_equivalence("A^2+2AB+B^2", "a^2+2ab+b^2"));
  }

  #[test]
  fn variable_order_within_products_is_insignificant() {
    assert!(check_equivalence("2ab", "2ba"));
    assert!(check_equivalence("a^2+2ba+b^2", "a^2+2ab+b^2"));
  }

  #[test]
  fn non_equivalent_forms_do_not_match() {
    assert!(!check_equivalence("x^2+4x+4", "x^2+4x+5"));
    assert!(!check_equivalence("x^2", "x^3"));
    assert!(!check_equivalence("x+y", "x-y"));
    assert!(!check_equivalence("2x", "x"));
    assert!(!check_equivalence("x^2+4x+4", "y^2+4y+4"));
  }

  #[test]
  fn equivalence_is_symmetric() {
    for (a, b) in [
      ("(x+2)^2", "x^2+4x+4"),
      ("x^2+4x+4", "x^2+4x+5"),
      ("", "x^2"),
      ("$$", "x"),
    ] {
      assert_eq!(check_equivalence(a, b), check_equivalence(b, a));
    }
  }

  #[test]
  fn malformed_input_is_simply_wrong() {
    assert!(!check_equivalence("", "x^2+4x+4"));
    assert!(!check_equivalence("   ", "x^2+4x+4"));
    assert!(!check_equivalence("not a valid $$ expr", "x^2+4x+4"));
    assert!(!check_equivalence("(x+2", "x^2+4x+4"));
    assert!(!check_equivalence("x^2+", "x^2"));
  }

  #[test]
  fn engine_errors_are_absorbed() {
    // Unsupported exponent and division by zero must read as "wrong",
    // never as a failure of the scoring pass.
    assert!(!check_equivalence("x^y", "x^y"));
    assert!(!check_equivalence("1/0", "1/0"));
    assert!(!check_equivalence("x^(1/2)", "x"));
  }

  #[test]
  fn pathological_exponents_are_absorbed() {
    // Nested powers whose combined degree overflows, and the one negative
    // exponent with no positive counterpart.
    assert!(!check_equivalence("((((((x^64)^64)^64)^64)^64)^64)", "x"));
    assert!(!check_equivalence("x^-9223372036854775808", "x"));
  }

  #[test]
  fn rational_forms_match() {
    assert!(check_equivalence("x/2", "0.5x"));
    assert!(check_equivalence("(x^2-1)/(x-1)", "x+1"));
    assert!(check_equivalence("x^-1", "1/x"));
  }

  #[test]
  fn normalize_strips_and_lowercases() {
    assert_eq!(normalize(" X^2 + 4X+4 "), "x^2+4x+4");
    assert_eq!(normalize("a B\tc\n"), "abc");
    assert_eq!(normalize(""), "");
  }

  #[test]
  fn normalize_is_idempotent() {
    for s in [" X^2 + 4X+4 ", "x^2+4x+4", "", "  ", "$$ junk"] {
      let once = normalize(s);
      assert_eq!(normalize(&once), once);
    }
  }

  #[test]
  fn display_falls_back_safely() {
    assert_eq!(format_for_display(""), "(none)");
    assert_eq!(format_for_display("   "), "(none)");
    assert_eq!(
      format_for_display("not a valid $$ expr"),
      "not a valid $$ expr"
    );
    assert_eq!(format_for_display("(x+2"), "(x+2");
  }

  #[test]
  fn display_renders_canonical_form() {
    assert_eq!(format_for_display("x^2+4x+4"), "x^2+4x+4");
    assert_eq!(format_for_display("(x+3)^2"), "x^2+6x+9");
    // Equivalent inputs render identically.
    assert_eq!(
      format_for_display("4+4x+x^2"),
      format_for_display("x^2+4x+4")
    );
    assert_eq!(
      format_for_display(" X^2 + 4X + 4 "),
      format_for_display("x^2+4x+4")
    );
  }
}
