//! Gesture tokens.

use thiserror::Error;

/// A decimal digit, `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` for values above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_char(&self) -> char {
        char::from(b'0' + self.0)
    }
}

/// Arithmetic operators a left hand can sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn as_char(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }
}

/// A calculator command recognized from hand poses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    Digit(Digit),
    Operator(Operator),
    Equals,
    Undo,
}

impl Gesture {
    /// Shorthand for a digit gesture. Returns `None` above 9.
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Gesture::Digit)
    }

    /// Single-character token: `0`-`9`, `+ - * /`, `=` or `U`.
    pub fn token(&self) -> char {
        match self {
            Gesture::Digit(d) => d.as_char(),
            Gesture::Operator(op) => op.as_char(),
            Gesture::Equals => '=',
            Gesture::Undo => 'U',
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Error parsing a gesture token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gesture token '{0}'")]
pub struct GestureParseError(pub String);

impl TryFrom<char> for Gesture {
    type Error = GestureParseError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        if let Some(d) = ch.to_digit(10) {
            return Ok(Gesture::Digit(Digit(d as u8)));
        }
        if let Some(op) = Operator::from_char(ch) {
            return Ok(Gesture::Operator(op));
        }
        match ch {
            '=' => Ok(Gesture::Equals),
            'U' => Ok(Gesture::Undo),
            other => Err(GestureParseError(other.to_string())),
        }
    }
}

impl std::str::FromStr for Gesture {
    type Err = GestureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Gesture::try_from(ch),
            _ => Err(GestureParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_bounds() {
        assert_eq!(Digit::new(9).map(|d| d.as_char()), Some('9'));
        assert!(Digit::new(10).is_none());
    }

    #[test]
    fn test_tokens_parse_back() {
        for token in "0123456789+-*/=U".chars() {
            let gesture = Gesture::try_from(token).unwrap();
            assert_eq!(gesture.token(), token);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("x".parse::<Gesture>().is_err());
        assert!("12".parse::<Gesture>().is_err());
        assert!("".parse::<Gesture>().is_err());
        assert!("u".parse::<Gesture>().is_err());
    }
}
