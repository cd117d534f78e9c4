//! Triangle validator.
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. input is a sequence (`TypeMismatch`)
//! 2. sequence has exactly three entries (`WrongArity`)
//! 3. every entry is a number (`NonNumericSide`)
//! 4. every side, taken cyclically, is strictly longer than the absolute
//!    difference of the other two (`DegenerateOrInvalidGeometry`)
//!
//! Check 4 rejects zero-length, negative, and collinear sides in one pass.
//! Comparisons are plain `f64` ordering without tolerance; NaN and infinite
//! sides fail check 4.

use serde_json::Value;

use super::types::TriangleError;
use super::NUM_SIDES;

/// Validate a candidate of unknown shape. Returns `(true, "")` on success,
/// otherwise `false` and a diagnostic naming the failed check and the input.
pub fn validate(sides: &Value) -> (bool, String) {
    match check(sides) {
        Ok(_) => (true, String::new()),
        Err(err) => (false, err.to_string()),
    }
}

/// Structured form of [`validate`]: the three sides as `f64` on success.
pub fn check(sides: &Value) -> Result<[f64; 3], TriangleError> {
    let render = || sides.to_string();
    let items = match sides {
        Value::Array(items) => items,
        _ => return Err(TriangleError::TypeMismatch { input: render() }),
    };
    if items.len() != NUM_SIDES {
        return Err(TriangleError::WrongArity {
            found: items.len(),
            input: render(),
        });
    }
    let mut out = [0.0; 3];
    for (index, item) in items.iter().enumerate() {
        out[index] = item
            .as_f64()
            .ok_or_else(|| TriangleError::NonNumericSide {
                index,
                input: render(),
            })?;
    }
    geometry(&out, render)?;
    Ok(out)
}

/// Typed entry point: arity and geometry checks on already-numeric sides.
pub fn check_sides(sides: &[f64]) -> Result<[f64; 3], TriangleError> {
    let arr = <[f64; 3]>::try_from(sides).map_err(|_| TriangleError::WrongArity {
        found: sides.len(),
        input: render_sides(sides),
    })?;
    check_geometry(&arr)?;
    Ok(arr)
}

/// Geometry check only (step 4).
pub fn check_geometry(sides: &[f64; 3]) -> Result<(), TriangleError> {
    geometry(sides, || render_sides(sides))
}

fn geometry(sides: &[f64; 3], render: impl Fn() -> String) -> Result<(), TriangleError> {
    for ix in 0..NUM_SIDES {
        let side_a = sides[ix];
        let side_x = sides[(ix + 1) % NUM_SIDES];
        let side_y = sides[(ix + 2) % NUM_SIDES];
        // written as a negated `>` so NaN fails too
        if !(side_a > (side_x - side_y).abs()) {
            return Err(TriangleError::DegenerateOrInvalidGeometry {
                index: ix,
                input: render(),
            });
        }
    }
    Ok(())
}

pub(crate) fn render_sides(sides: &[f64]) -> String {
    format!("{sides:?}")
}
