//! Canonical forms for parsed expressions.
//!
//! Every expression reduces to a quotient of multivariate polynomials with
//! exact rational coefficients. Coefficients live in `BTreeMap`s keyed by
//! monomial, so the reduction is deterministic: structurally different but
//! equivalent inputs converge to the same form. Equivalence testing never
//! needs polynomial GCD — a quotient is zero exactly when its numerator is.

use std::collections::BTreeMap;

use num_traits::{One, ToPrimitive, Zero};

use crate::algebra::error::{EngineError, Result};
use crate::algebra::expr::{Expr, Rational};

/// Exponents must canonicalize to integers in `-MAX_EXPONENT..=MAX_EXPONENT`.
const MAX_EXPONENT: i64 = 64;

/// Product of variables raised to positive integer powers, e.g. `x^2*y`.
/// The constant monomial has an empty map.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct Monomial(BTreeMap<char, u32>);

impl Monomial {
  pub fn constant() -> Self {
    Monomial::default()
  }

  pub fn var(name: char) -> Self {
    let mut vars = BTreeMap::new();
    vars.insert(name, 1);
    Monomial(vars)
  }

  pub fn is_constant(&self) -> bool {
    self.0.is_empty()
  }

  pub fn exponent(&self, var: char) -> u32 {
    self.0.get(&var).copied().unwrap_or(0)
  }

  pub fn entries(&self) -> impl Iterator<Item = (char, u32)> + '_ {
    self.0.iter().map(|(v, e)| (*v, *e))
  }

  /// Exponents are checked: nesting like `((x^64)^64)^...` can push a
  /// degree past `u32`, which must surface as an error, never wrap.
  fn mul(&self, other: &Self) -> Result<Self> {
    let mut vars = self.0.clone();
    for (var, exp) in &other.0 {
      let entry = vars.entry(*var).or_insert(0);
      *entry = entry
        .checked_add(*exp)
        .ok_or_else(|| EngineError::Unsupported("monomial degree overflow".into()))?;
    }
    Ok(Monomial(vars))
  }
}

/// Multivariate polynomial. Zero coefficients are never stored, so the zero
/// polynomial has an empty term map.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Poly {
  terms: BTreeMap<Monomial, Rational>,
}

impl Poly {
  pub fn zero() -> Self {
    Poly::default()
  }

  pub fn one() -> Self {
    Poly::constant(Rational::one())
  }

  pub fn constant(value: Rational) -> Self {
    let mut poly = Poly::zero();
    poly.insert(Monomial::constant(), value);
    poly
  }

  pub fn var(name: char) -> Self {
    let mut poly = Poly::zero();
    poly.insert(Monomial::var(name), Rational::one());
    poly
  }

  pub fn is_zero(&self) -> bool {
    self.terms.is_empty()
  }

  pub fn is_one(&self) -> bool {
    self.terms.len() == 1
      && self
        .terms
        .get(&Monomial::constant())
        .map(|c| c.is_one())
        .unwrap_or(false)
  }

  /// The polynomial's value when it has no variable terms.
  pub fn constant_value(&self) -> Option<Rational> {
    if self.terms.is_empty() {
      return Some(Rational::zero());
    }
    if self.terms.len() == 1 {
      if let Some(coeff) = self.terms.get(&Monomial::constant()) {
        return Some(coeff.clone());
      }
    }
    None
  }

  pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &Rational)> {
    self.terms.iter()
  }

  fn insert(&mut self, monomial: Monomial, coeff: Rational) {
    if !coeff.is_zero() {
      self.terms.insert(monomial, coeff);
    }
  }

  fn add_term(&mut self, monomial: &Monomial, coeff: &Rational) {
    let entry = self
      .terms
      .entry(monomial.clone())
      .or_insert_with(Rational::zero);
    *entry += coeff;
    if entry.is_zero() {
      self.terms.remove(monomial);
    }
  }

  pub fn add(&self, other: &Self) -> Self {
    let mut result = self.clone();
    for (monomial, coeff) in &other.terms {
      result.add_term(monomial, coeff);
    }
    result
  }

  pub fn neg(&self) -> Self {
    let mut result = Poly::zero();
    for (monomial, coeff) in &self.terms {
      result.insert(monomial.clone(), -coeff.clone());
    }
    result
  }

  pub fn sub(&self, other: &Self) -> Self {
    self.add(&other.neg())
  }

  pub fn mul(&self, other: &Self) -> Result<Self> {
    let mut result = Poly::zero();
    for (ma, ca) in &self.terms {
      for (mb, cb) in &other.terms {
        result.add_term(&ma.mul(mb)?, &(ca * cb));
      }
    }
    Ok(result)
  }

  pub fn scale(&self, factor: &Rational) -> Self {
    let mut result = Poly::zero();
    for (monomial, coeff) in &self.terms {
      result.insert(monomial.clone(), coeff * factor);
    }
    result
  }

  /// Square-and-multiply exponentiation. The base is only squared while
  /// more bits remain, so the last round cannot overflow spuriously.
  pub fn pow(&self, exp: u32) -> Result<Self> {
    let mut result = Poly::one();
    let mut base = self.clone();
    let mut n = exp;
    while n > 0 {
      if n % 2 == 1 {
        result = result.mul(&base)?;
      }
      n /= 2;
      if n > 0 {
        base = base.mul(&base)?;
      }
    }
    Ok(result)
  }

  /// Coefficient of the greatest monomial under the map ordering. One for
  /// the zero polynomial, so scaling by its reciprocal is always defined.
  fn leading_coeff(&self) -> Rational {
    self
      .terms
      .iter()
      .next_back()
      .map(|(_, c)| c.clone())
      .unwrap_or_else(Rational::one)
  }
}

/// Canonical form of an expression: `num / den`. The denominator is the
/// constant 1 for polynomial input, and monic otherwise; a constant
/// denominator always folds into the numerator's coefficients.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Canonical {
  num: Poly,
  den: Poly,
}

impl Canonical {
  fn new(num: Poly, den: Poly) -> Self {
    let mut canon = Canonical { num, den };
    if let Some(value) = canon.den.constant_value() {
      canon.num = canon.num.scale(&value.recip());
      canon.den = Poly::one();
    } else {
      let lead = canon.den.leading_coeff();
      if !lead.is_one() {
        let inv = lead.recip();
        canon.num = canon.num.scale(&inv);
        canon.den = canon.den.scale(&inv);
      }
    }
    canon
  }

  fn from_poly(poly: Poly) -> Self {
    Canonical {
      num: poly,
      den: Poly::one(),
    }
  }

  pub fn one() -> Self {
    Canonical::from_poly(Poly::one())
  }

  pub fn num(&self) -> &Poly {
    &self.num
  }

  pub fn den(&self) -> &Poly {
    &self.den
  }

  /// A quotient is zero exactly when its numerator is; the denominator is
  /// nonzero by construction.
  pub fn is_zero(&self) -> bool {
    self.num.is_zero()
  }

  pub fn add(&self, other: &Self) -> Result<Self> {
    Ok(Canonical::new(
      self.num.mul(&other.den)?.add(&other.num.mul(&self.den)?),
      self.den.mul(&other.den)?,
    ))
  }

  pub fn sub(&self, other: &Self) -> Result<Self> {
    self.add(&other.neg())
  }

  pub fn neg(&self) -> Self {
    Canonical {
      num: self.num.neg(),
      den: self.den.clone(),
    }
  }

  pub fn mul(&self, other: &Self) -> Result<Self> {
    Ok(Canonical::new(
      self.num.mul(&other.num)?,
      self.den.mul(&other.den)?,
    ))
  }

  pub fn div(&self, other: &Self) -> Result<Self> {
    if other.num.is_zero() {
      return Err(EngineError::DivisionByZero);
    }
    Ok(Canonical::new(
      self.num.mul(&other.den)?,
      self.den.mul(&other.num)?,
    ))
  }

  pub fn pow(&self, exp: i64) -> Result<Self> {
    if exp == 0 {
      return Ok(Canonical::one());
    }
    let (num, den) = if exp < 0 {
      if self.num.is_zero() {
        return Err(EngineError::DivisionByZero);
      }
      (&self.den, &self.num)
    } else {
      (&self.num, &self.den)
    };
    let e = exp.unsigned_abs() as u32;
    Ok(Canonical::new(num.pow(e)?, den.pow(e)?))
  }

  /// The value as an `i64` when the form is a constant integer.
  pub fn as_integer(&self) -> Option<i64> {
    if !self.den.is_one() {
      return None;
    }
    let value = self.num.constant_value()?;
    if !value.is_integer() {
      return None;
    }
    value.to_integer().to_i64()
  }
}

/// Reduce a parsed expression to canonical form. Deterministic: the same
/// input expression always yields the same output.
pub fn canonicalize(expr: &Expr) -> Result<Canonical> {
  match expr {
    Expr::Var(name) => Ok(Canonical::from_poly(Poly::var(*name))),
    Expr::Constant(value) => Ok(Canonical::from_poly(Poly::constant(value.clone()))),
    Expr::Add(a, b) => canonicalize(a)?.add(&canonicalize(b)?),
    Expr::Sub(a, b) => canonicalize(a)?.sub(&canonicalize(b)?),
    Expr::Mul(a, b) => canonicalize(a)?.mul(&canonicalize(b)?),
    Expr::Div(a, b) => canonicalize(a)?.div(&canonicalize(b)?),
    Expr::Neg(a) => Ok(canonicalize(a)?.neg()),
    Expr::Pow(base, exp) => {
      let base = canonicalize(base)?;
      let exp = canonicalize(exp)?
        .as_integer()
        .ok_or_else(|| EngineError::Unsupported("non-integer exponent".into()))?;
      // unsigned_abs: plain abs() would overflow on i64::MIN
      if exp.unsigned_abs() > MAX_EXPONENT as u64 {
        return Err(EngineError::Unsupported(format!(
          "exponent {exp} out of range"
        )));
      }
      base.pow(exp)
    }
  }
}
