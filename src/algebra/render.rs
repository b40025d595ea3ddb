//! Rendering of canonical forms in conventional textbook notation.
//!
//! Output matches the style of the card pool: `^` for powers, implicit
//! multiplication between coefficient and variables, terms in descending
//! lexicographic order (`x^2+4x+4`, `a^2+2ab+b^2`). Every rendered string
//! parses back to the same canonical form.

use std::collections::BTreeSet;

use num_traits::{One, Signed};

use crate::algebra::canonical::{Canonical, Monomial, Poly};
use crate::algebra::expr::Rational;

pub fn render(canon: &Canonical) -> String {
  if canon.den().is_one() {
    render_poly(canon.num())
  } else {
    format!(
      "{}/{}",
      render_quotient_side(canon.num()),
      render_quotient_side(canon.den())
    )
  }
}

/// Quotient sides get parentheses whenever bare text would rebind under the
/// parser's precedence rules.
fn render_quotient_side(poly: &Poly) -> String {
  let body = render_poly(poly);
  if poly.terms().count() > 1 || body.starts_with('-') || single_term_needs_parens(poly) {
    format!("({body})")
  } else {
    body
  }
}

/// A lone monomial like `2x` re-parses as a product, which would swallow a
/// following `/`den into its last factor; a bare constant or `x^2` is safe.
fn single_term_needs_parens(poly: &Poly) -> bool {
  match poly.terms().next() {
    Some((monomial, coeff)) => {
      !coeff.denom().is_one() || (!coeff.numer().magnitude().is_one() && !monomial.is_constant())
    }
    None => false,
  }
}

fn render_poly(poly: &Poly) -> String {
  if poly.is_zero() {
    return "0".to_string();
  }

  // Global variable order fixes the exponent vectors used for term ordering.
  let vars: BTreeSet<char> = poly
    .terms()
    .flat_map(|(m, _)| m.entries().map(|(v, _)| v))
    .collect();
  let vars: Vec<char> = vars.into_iter().collect();

  let mut terms: Vec<(Vec<u32>, &Monomial, &Rational)> = poly
    .terms()
    .map(|(monomial, coeff)| {
      let exps: Vec<u32> = vars.iter().map(|v| monomial.exponent(*v)).collect();
      (exps, monomial, coeff)
    })
    .collect();
  terms.sort_by(|a, b| b.0.cmp(&a.0));

  let mut out = String::new();
  for (i, (_, monomial, coeff)) in terms.iter().enumerate() {
    let negative = coeff.is_negative();
    if i == 0 {
      if negative {
        out.push('-');
      }
    } else {
      out.push(if negative { '-' } else { '+' });
    }
    out.push_str(&render_term(monomial, &coeff.abs()));
  }
  out
}

/// One term with a non-negative coefficient. Unit coefficients are hidden
/// (`x`, not `1x`) and fractional ones render as `3x/2` so the string
/// re-parses with the intended grouping.
fn render_term(monomial: &Monomial, coeff: &Rational) -> String {
  if monomial.is_constant() {
    return render_rational(coeff);
  }

  let mut out = String::new();
  if !coeff.numer().is_one() {
    out.push_str(&coeff.numer().to_string());
  }
  for (var, exp) in monomial.entries() {
    out.push(var);
    if exp > 1 {
      out.push('^');
      out.push_str(&exp.to_string());
    }
  }
  if !coeff.denom().is_one() {
    out.push('/');
    out.push_str(&coeff.denom().to_string());
  }
  out
}

fn render_rational(value: &Rational) -> String {
  if value.denom().is_one() {
    value.numer().to_string()
  } else {
    format!("{}/{}", value.numer(), value.denom())
  }
}
