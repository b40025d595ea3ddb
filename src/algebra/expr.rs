//! Expression tree produced by the parser.

use num_bigint::BigInt;
use num_rational::BigRational;

pub type Rational = BigRational;

/// Raw syntax tree for an algebraic expression. Variables are single
/// letters; juxtaposition in the source text has already been resolved
/// into explicit `Mul` nodes by the parser.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Expr {
  Var(char),
  Constant(Rational),
  Add(Box<Expr>, Box<Expr>),
  Sub(Box<Expr>, Box<Expr>),
  Mul(Box<Expr>, Box<Expr>),
  Div(Box<Expr>, Box<Expr>),
  Pow(Box<Expr>, Box<Expr>),
  Neg(Box<Expr>),
}

impl Expr {
  pub fn integer(value: impl Into<BigInt>) -> Self {
    Expr::Constant(Rational::from_integer(value.into()))
  }

  pub fn rational(value: Rational) -> Self {
    Expr::Constant(value)
  }

  pub fn boxed(self) -> Box<Self> {
    Box::new(self)
  }
}
