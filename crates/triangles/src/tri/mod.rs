//! Triangle validation and classification.
//!
//! Purpose
//! - Decide whether three side lengths form a non-degenerate triangle
//!   (`validate`, `check`), and which category it falls in (`classify`).
//! - Offer a `Triangle` value that can only exist once validation passed.
//!
//! Numerics
//! - Exact `f64` comparisons throughout. The classifier takes an optional
//!   tolerance through `TriCfg`; the validator never does.
//!
//! Code cross-refs: `shape::Polygon`, `Triangle`, `TriangleError`, `TriCfg`

mod classify;
pub mod rand;
mod triangle;
mod types;
mod validate;

pub use classify::{classify, classify_with};
pub use triangle::Triangle;
pub use types::{ErrorKind, ParseTriangleTypeError, TriCfg, TriangleError, TriangleType};
pub use validate::{check, check_geometry, check_sides, validate};

/// Number of sides of a triangle.
pub const NUM_SIDES: usize = 3;
