//! Validated triangle entity.

use nalgebra::Vector3;
use serde_json::Value;
use std::fmt;

use super::classify::classify;
use super::types::{TriangleError, TriangleType};
use super::validate::{check, check_geometry, check_sides, render_sides};
use super::NUM_SIDES;
use crate::shape::Polygon;

/// Three side lengths that passed validation. Immutable; only constructible
/// through the fallible constructors below.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    sides: Vector3<f64>,
}

impl Triangle {
    /// Build from numeric sides. Fails with `DegenerateOrInvalidGeometry` if
    /// the triangle inequality does not hold strictly for every side.
    pub fn new(sides: [f64; 3]) -> Result<Self, TriangleError> {
        check_geometry(&sides)?;
        Ok(Self {
            sides: Vector3::from(sides),
        })
    }

    /// Build from a candidate of unknown shape, running every validation check.
    pub fn from_value(sides: &Value) -> Result<Self, TriangleError> {
        let arr = check(sides)?;
        Ok(Self {
            sides: Vector3::from(arr),
        })
    }

    /// Copy of the side lengths.
    #[inline]
    pub fn sides(&self) -> Vector3<f64> {
        self.sides
    }

    #[inline]
    pub fn side_array(&self) -> [f64; 3] {
        [self.sides.x, self.sides.y, self.sides.z]
    }

    pub fn triangle_type(&self) -> TriangleType {
        classify(self.sides.x, self.sides.y, self.sides.z)
    }
}

impl Polygon for Triangle {
    fn num_sides(&self) -> usize {
        NUM_SIDES
    }

    fn is_valid(&self) -> (bool, String) {
        match check_geometry(&self.side_array()) {
            Ok(()) => (true, String::new()),
            Err(err) => (false, err.to_string()),
        }
    }
}

impl TryFrom<[f64; 3]> for Triangle {
    type Error = TriangleError;
    fn try_from(sides: [f64; 3]) -> Result<Self, Self::Error> {
        Self::new(sides)
    }
}

impl TryFrom<&[f64]> for Triangle {
    type Error = TriangleError;
    fn try_from(sides: &[f64]) -> Result<Self, Self::Error> {
        Self::new(check_sides(sides)?)
    }
}

impl TryFrom<&Value> for Triangle {
    type Error = TriangleError;
    fn try_from(sides: &Value) -> Result<Self, Self::Error> {
        Self::from_value(sides)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sides {}", render_sides(&self.side_array()))
    }
}
