//! Arithmetic expression evaluation.
//!
//! Grammar (whitespace ignored between tokens):
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-')* literal
//! literal := [0-9]+
//! ```
//!
//! Integer `+ - *` stay exact at any size; `/` always produces a float. Only
//! this grammar is accepted, nothing else in the input is interpreted.

use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::error::{CalcError, CalcResult};

/// Value of an evaluated expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(BigInt),
    Float(f64),
}

impl Number {
    /// Convert to a float.
    ///
    /// # Errors
    ///
    /// `Overflow` when an integer is beyond the float range.
    pub fn to_f64(&self) -> CalcResult<f64> {
        match self {
            Number::Int(v) => v
                .to_f64()
                .filter(|f| f.is_finite())
                .ok_or(CalcError::Overflow),
            Number::Float(v) => Ok(*v),
        }
    }

    fn is_zero(&self) -> bool {
        match self {
            Number::Int(v) => v.is_zero(),
            Number::Float(v) => *v == 0.0,
        }
    }

    fn float(value: f64) -> CalcResult<Number> {
        if value.is_finite() {
            Ok(Number::Float(value))
        } else {
            Err(CalcError::Overflow)
        }
    }

    fn neg(self) -> Number {
        match self {
            Number::Int(v) => Number::Int(-v),
            Number::Float(v) => Number::Float(-v),
        }
    }

    fn apply(
        self,
        rhs: Number,
        int_op: fn(BigInt, BigInt) -> BigInt,
        float_op: fn(f64, f64) -> f64,
    ) -> CalcResult<Number> {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => Ok(Number::Int(int_op(a, b))),
            (a, b) => Number::float(float_op(a.to_f64()?, b.to_f64()?)),
        }
    }

    fn add(self, rhs: Number) -> CalcResult<Number> {
        self.apply(rhs, |a, b| a + b, |a, b| a + b)
    }

    fn sub(self, rhs: Number) -> CalcResult<Number> {
        self.apply(rhs, |a, b| a - b, |a, b| a - b)
    }

    fn mul(self, rhs: Number) -> CalcResult<Number> {
        self.apply(rhs, |a, b| a * b, |a, b| a * b)
    }

    fn div(self, rhs: Number) -> CalcResult<Number> {
        if rhs.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        Number::float(self.to_f64()? / rhs.to_f64()?)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(BigInt::from(value))
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            Number::Float(v) => f.write_str(&format_float(*v)),
        }
    }
}

/// Shortest round-trip text for a float, always with a fraction or exponent.
///
/// Magnitudes outside `[1e-4, 1e16)` use exponent form with a signed,
/// two-digit exponent (`1e+16`, `2.5e-05`).
fn format_float(value: f64) -> String {
    let magnitude = value.abs();
    if value != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{value:e}");
        if let Some((mantissa, exponent)) = sci.split_once('e') {
            if let Ok(exponent) = exponent.parse::<i32>() {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exponent.abs());
            }
        }
        return sci;
    }

    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

/// Evaluate an arithmetic expression.
///
/// # Errors
///
/// Any input outside the grammar, division by zero, or overflow.
pub fn evaluate(input: &str) -> CalcResult<Number> {
    let mut parser = Parser::new(input);
    parser.eat_ws();
    if parser.peek().is_none() {
        return Err(CalcError::Empty);
    }

    let value = parser.parse_expr()?;

    parser.eat_ws();
    match parser.peek() {
        None => Ok(value),
        Some(ch) => Err(CalcError::UnexpectedChar { ch, pos: parser.pos }),
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(ch) = self.peek() {
            self.pos += ch.len_utf8();
        }
    }

    fn eat_ws(&mut self) {
        while let Some(ch) = self.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn parse_expr(&mut self) -> CalcResult<Number> {
        let mut lhs = self.parse_term()?;
        loop {
            self.eat_ws();
            match self.peek() {
                Some('+') => {
                    self.bump();
                    lhs = lhs.add(self.parse_term()?)?;
                }
                Some('-') => {
                    self.bump();
                    lhs = lhs.sub(self.parse_term()?)?;
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn parse_term(&mut self) -> CalcResult<Number> {
        let mut lhs = self.parse_unary()?;
        loop {
            self.eat_ws();
            match self.peek() {
                Some('*') => {
                    self.bump();
                    lhs = lhs.mul(self.parse_unary()?)?;
                }
                Some('/') => {
                    self.bump();
                    lhs = lhs.div(self.parse_unary()?)?;
                }
                _ => return Ok(lhs),
            }
        }
    }

    fn parse_unary(&mut self) -> CalcResult<Number> {
        let mut negate = false;
        loop {
            self.eat_ws();
            match self.peek() {
                Some('+') => self.bump(),
                Some('-') => {
                    negate = !negate;
                    self.bump();
                }
                _ => break,
            }
        }

        let value = self.parse_literal()?;
        Ok(if negate { value.neg() } else { value })
    }

    fn parse_literal(&mut self) -> CalcResult<Number> {
        let start = self.pos;
        let mut value = BigInt::zero();
        while let Some(digit) = self.peek().and_then(|ch| ch.to_digit(10)) {
            value = value * 10u32 + digit;
            self.bump();
        }

        if self.pos == start {
            return match self.peek() {
                None => Err(CalcError::UnexpectedEnd),
                Some(ch) => Err(CalcError::UnexpectedChar { ch, pos: self.pos }),
            };
        }

        let literal = &self.src[start..self.pos];
        if literal.len() > 1 && literal.starts_with('0') && literal.bytes().any(|b| b != b'0') {
            return Err(CalcError::LeadingZero {
                literal: literal.to_string(),
            });
        }

        Ok(Number::Int(value))
    }
}
