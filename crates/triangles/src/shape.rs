//! Polygon capability.
//!
//! Minimal contract a shape exposes to take part in generic polygon handling.
//! Only `Triangle` implements it today.

/// A closed shape with a fixed side count and a self-check.
pub trait Polygon {
    /// Expected number of sides.
    fn num_sides(&self) -> usize;

    /// `(true, "")` if the shape is valid, otherwise `false` and a diagnostic.
    fn is_valid(&self) -> (bool, String);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tri::Triangle;

    fn describe(p: &dyn Polygon) -> (usize, bool) {
        (p.num_sides(), p.is_valid().0)
    }

    #[test]
    fn triangle_is_object_safe_polygon() {
        let t = Triangle::new([3.0, 4.0, 5.0]).unwrap();
        assert_eq!(describe(&t), (3, true));
    }
}
