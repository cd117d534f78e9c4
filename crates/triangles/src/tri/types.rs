//! Classification tags, error taxonomy, and comparison settings.
//!
//! - `TriangleType`: closed classification tag (no data).
//! - `ErrorKind` / `TriangleError`: why a candidate was rejected, with the offending input.
//! - `TriCfg`: equality tolerance for the classifier (exact by default).
//!
//! Code cross-refs: `validate::check`, `classify::classify_with`, `triangle::Triangle`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Triangle category by number of equal sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriangleType {
    /// No two sides are of equal length.
    Scalene,
    /// Exactly two sides are of equal length.
    Isosceles,
    /// All sides are of equal length.
    Equilateral,
}

impl TriangleType {
    pub const ALL: [TriangleType; 3] = [Self::Scalene, Self::Isosceles, Self::Equilateral];

    /// Tag name, e.g. `EQUILATERAL`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalene => "SCALENE",
            Self::Isosceles => "ISOSCELES",
            Self::Equilateral => "EQUILATERAL",
        }
    }

    /// Friendly name, e.g. `Equilateral`.
    pub fn friendly_name(&self) -> &'static str {
        match self {
            Self::Scalene => "Scalene",
            Self::Isosceles => "Isosceles",
            Self::Equilateral => "Equilateral",
        }
    }
}

impl fmt::Display for TriangleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.friendly_name())
    }
}

/// Returned when a string names no `TriangleType`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseTriangleTypeError {
    pub input: String,
}

impl fmt::Display for ParseTriangleTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown triangle type: {:?}", self.input)
    }
}

impl std::error::Error for ParseTriangleTypeError {}

impl FromStr for TriangleType {
    type Err = ParseTriangleTypeError;

    /// Accepts the friendly name first, then the tag name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|t| t.friendly_name() == s)
            .or_else(|| Self::ALL.iter().find(|t| t.as_str() == s))
            .copied()
            .ok_or_else(|| ParseTriangleTypeError {
                input: s.to_string(),
            })
    }
}

/// Which validation check rejected a candidate. Checks run in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input is not a sequence (absent, scalar, or text).
    TypeMismatch,
    /// Sequence length differs from three.
    WrongArity,
    /// Some element is missing or not a number.
    NonNumericSide,
    /// Some side is not strictly longer than the difference of the other two.
    DegenerateOrInvalidGeometry,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeMismatch => "TypeMismatch",
            Self::WrongArity => "WrongArity",
            Self::NonNumericSide => "NonNumericSide",
            Self::DegenerateOrInvalidGeometry => "DegenerateOrInvalidGeometry",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection of a candidate set of sides. `input` is the offending input as rendered text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TriangleError {
    TypeMismatch { input: String },
    WrongArity { found: usize, input: String },
    NonNumericSide { index: usize, input: String },
    DegenerateOrInvalidGeometry { index: usize, input: String },
}

impl TriangleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::WrongArity { .. } => ErrorKind::WrongArity,
            Self::NonNumericSide { .. } => ErrorKind::NonNumericSide,
            Self::DegenerateOrInvalidGeometry { .. } => ErrorKind::DegenerateOrInvalidGeometry,
        }
    }

    pub fn input(&self) -> &str {
        match self {
            Self::TypeMismatch { input }
            | Self::WrongArity { input, .. }
            | Self::NonNumericSide { input, .. }
            | Self::DegenerateOrInvalidGeometry { input, .. } => input,
        }
    }
}

impl fmt::Display for TriangleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind();
        match self {
            Self::TypeMismatch { input } => {
                write!(f, "{kind}: sides must be a sequence: {input}")
            }
            Self::WrongArity { found, input } => write!(
                f,
                "{kind}: expected {} sides, found {found}: {input}",
                super::NUM_SIDES
            ),
            Self::NonNumericSide { index, input } => {
                write!(f, "{kind}: side {index} is not a number: {input}")
            }
            Self::DegenerateOrInvalidGeometry { index, input } => write!(
                f,
                "{kind}: side {index} is not longer than the difference of the other two: {input}"
            ),
        }
    }
}

impl std::error::Error for TriangleError {}

/// Comparison settings for the classifier.
///
/// `eps_eq = 0.0` (the default) means exact `==`; sides that differ only by
/// floating-point rounding are then treated as different.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriCfg {
    pub eps_eq: f64,
}

impl Default for TriCfg {
    fn default() -> Self {
        Self { eps_eq: 0.0 }
    }
}

impl TriCfg {
    /// Exact equality, widened by `eps_eq` when positive.
    #[inline]
    pub fn equal(&self, a: f64, b: f64) -> bool {
        a == b || (self.eps_eq > 0.0 && (a - b).abs() <= self.eps_eq)
    }
}
