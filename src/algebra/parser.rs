//! Infix parser for algebraic expressions.
//!
//! Accepts conventional notation over `+ - * / ^`, parentheses, unary minus,
//! integer and decimal literals, and single-letter variables. Implicit
//! multiplication is resolved here: `4x`, `2ab`, `3(x+1)` and `(x+1)(x+2)`
//! all parse as products. A number never follows another factor implicitly,
//! so `x2` is malformed rather than `2x` in disguise.

use crate::algebra::error::{EngineError, Result};
use crate::algebra::expr::{Expr, Rational};
use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{char, digit1, multispace0, satisfy};
use nom::combinator::{all_consuming, map, opt, recognize};
use nom::error::VerboseError;
use nom::multi::fold_many0;
use nom::sequence::{delimited, pair, preceded};
use num_bigint::BigInt;
use std::str::FromStr;

/// Parse a full expression. All input must be consumed; trailing garbage,
/// unbalanced parentheses and the empty string are parse errors.
pub fn parse(input: &str) -> Result<Expr> {
  match all_consuming(ws(parse_add_sub))(input) {
    Ok((_, expr)) => Ok(expr),
    Err(e) => Err(EngineError::Parse(format!("{e:?}"))),
  }
}

fn parse_add_sub(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
  let (rest, init) = parse_mul_div(input)?;
  fold_many0(
    pair(ws(alt((char('+'), char('-')))), parse_mul_div),
    move || init.clone(),
    |acc, (op, rhs)| match op {
      '+' => Expr::Add(acc.boxed(), rhs.boxed()),
      '-' => Expr::Sub(acc.boxed(), rhs.boxed()),
      _ => unreachable!(),
    },
  )(rest)
}

fn parse_mul_div(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
  let (rest, init) = parse_unary(input)?;
  fold_many0(
    pair(ws(alt((char('*'), char('/')))), parse_unary),
    move || init.clone(),
    |acc, (op, rhs)| match op {
      '*' => Expr::Mul(acc.boxed(), rhs.boxed()),
      '/' => Expr::Div(acc.boxed(), rhs.boxed()),
      _ => unreachable!(),
    },
  )(rest)
}

fn parse_unary(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
  if let Ok((rest, expr)) = preceded(ws(char('-')), parse_unary)(input) {
    Ok((rest, Expr::Neg(expr.boxed())))
  } else {
    parse_implicit(input)
  }
}

/// Juxtaposed factors multiply: `2ab` is `2*a*b`. Implicit multiplication
/// binds tighter than `*` and `/`, so `1/2x` is `1/(2x)`.
fn parse_implicit(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
  let (rest, init) = parse_pow(input)?;
  fold_many0(
    parse_pow_implicit,
    move || init.clone(),
    |acc, rhs| Expr::Mul(acc.boxed(), rhs.boxed()),
  )(rest)
}

fn parse_pow(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
  let (rest, base) = parse_primary(input)?;
  parse_pow_tail(base, rest)
}

/// A factor that may follow another by juxtaposition: a variable or a
/// parenthesized group, never a bare number.
fn parse_pow_implicit(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
  let (rest, base) = alt((parse_parens, parse_variable))(input)?;
  parse_pow_tail(base, rest)
}

fn parse_pow_tail(base: Expr, input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
  if let Ok((rest, exp)) = preceded(ws(char('^')), parse_exponent)(input) {
    Ok((rest, Expr::Pow(base.boxed(), exp.boxed())))
  } else {
    Ok((input, base))
  }
}

/// Exponents bind tighter than implicit multiplication (`x^2y` is `(x^2)*y`)
/// and associate to the right (`x^2^3` is `x^(2^3)`), with an optional sign.
fn parse_exponent(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
  alt((
    map(preceded(ws(char('-')), parse_exponent), |e| {
      Expr::Neg(e.boxed())
    }),
    parse_pow,
  ))(input)
}

fn parse_primary(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
  alt((parse_parens, parse_number, parse_variable))(input)
}

fn parse_parens(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
  delimited(ws(char('(')), parse_add_sub, ws(char(')')))(input)
}

fn parse_number(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
  map(
    ws(recognize(pair(
      digit1,
      opt(preceded(char('.'), digit1)),
    ))),
    |s: &str| Expr::rational(decimal_to_rational(s)),
  )(input)
}

fn parse_variable(input: &str) -> IResult<&str, Expr, VerboseError<&str>> {
  map(ws(satisfy(|c| c.is_ascii_alphabetic())), Expr::Var)(input)
}

/// Convert a digits-only literal (optionally with a fractional part) into an
/// exact rational, e.g. `0.25` into `1/4`.
fn decimal_to_rational(text: &str) -> Rational {
  match text.split_once('.') {
    Some((whole, frac)) => {
      let digits = format!("{whole}{frac}");
      let numer = BigInt::from_str(&digits).unwrap();
      let mut denom = BigInt::from(1u32);
      for _ in 0..frac.len() {
        denom *= 10;
      }
      Rational::new(numer, denom)
    }
    None => Rational::from_integer(BigInt::from_str(text).unwrap()),
  }
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>
where
  F: FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>,
{
  delimited(multispace0, inner, multispace0)
}
