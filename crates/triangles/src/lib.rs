//! Triangle validation and classification.
//!
//! Two pure stages: the validator decides whether a candidate set of side
//! lengths forms a non-degenerate triangle, the classifier tags it as
//! equilateral, isosceles, or scalene. `shape::Polygon` is the capability
//! contract shared by polygon-like shapes.

pub mod shape;
pub mod tri;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use shape::Polygon;
pub use tri::{classify, validate, Triangle, TriangleError, TriangleType};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::shape::Polygon;
    pub use crate::tri::rand::{draw_sides, ReplayToken, SideCfg};
    pub use crate::tri::{
        check, classify, classify_with, validate, ErrorKind, TriCfg, Triangle, TriangleError,
        TriangleType, NUM_SIDES,
    };
}
