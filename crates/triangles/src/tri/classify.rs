//! Classifier: count equal sides.
//!
//! Does not check the triangle inequality; `[0, 0, 0]` or `[1, 1, 100]` still
//! get a category. Use `validate::check` or `Triangle::new` first when the
//! input may be geometrically invalid.

use super::types::{TriCfg, TriangleType};

/// Classify by exact equality of the three sides.
pub fn classify<T: PartialEq>(side1: T, side2: T, side3: T) -> TriangleType {
    by_equality(side1, side2, side3, |a, b| a == b)
}

/// Classify using the equality tolerance of `cfg`. Same as [`classify`] for `TriCfg::default()`.
pub fn classify_with(cfg: TriCfg, side1: f64, side2: f64, side3: f64) -> TriangleType {
    by_equality(side1, side2, side3, |a, b| cfg.equal(*a, *b))
}

fn by_equality<T>(side1: T, side2: T, side3: T, eq: impl Fn(&T, &T) -> bool) -> TriangleType {
    if eq(&side1, &side2) || eq(&side1, &side3) {
        if eq(&side2, &side3) {
            TriangleType::Equilateral
        } else {
            TriangleType::Isosceles
        }
    } else if eq(&side2, &side3) {
        TriangleType::Isosceles
    } else {
        TriangleType::Scalene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_categories() {
        assert_eq!(classify(1.0, 1.0, 1.0), TriangleType::Equilateral);
        assert_eq!(classify(1.0, 1.5, 1.5), TriangleType::Isosceles);
        assert_eq!(classify(1.5, 1.5, 1.0), TriangleType::Isosceles);
        assert_eq!(classify(1.5, 1.0, 1.5), TriangleType::Isosceles);
        assert_eq!(classify(1.0, 1.5, 2.0), TriangleType::Scalene);
        assert_eq!(classify(3, 4, 5), TriangleType::Scalene);
    }

    #[test]
    fn permissive_on_invalid_geometry() {
        assert_eq!(classify(0.0, 0.0, 0.0), TriangleType::Equilateral);
        assert_eq!(classify(1.0, 1.0, 100.0), TriangleType::Isosceles);
        assert_eq!(classify(-1.0, 0.0, 0.5), TriangleType::Scalene);
    }

    #[test]
    fn rounding_breaks_exact_equality() {
        let e = std::f64::consts::E;
        let e_again = e.sqrt() * e.sqrt();
        let pi = std::f64::consts::PI;
        assert_eq!(classify(e, pi, e), TriangleType::Isosceles);
        if e_again != e {
            assert_eq!(classify(e, pi, e_again), TriangleType::Scalene);
            let cfg = TriCfg { eps_eq: 1e-12 };
            assert_eq!(classify_with(cfg, e, pi, e_again), TriangleType::Isosceles);
        }
        assert_eq!(
            classify_with(TriCfg::default(), 0.1 + 0.2, 0.3, 0.5),
            TriangleType::Scalene
        );
        assert_eq!(
            classify_with(TriCfg { eps_eq: 1e-9 }, 0.1 + 0.2, 0.3, 0.5),
            TriangleType::Isosceles
        );
    }

    #[test]
    fn tolerance_keeps_exactly_equal_sides_equal() {
        let inf = f64::INFINITY;
        let cfg = TriCfg { eps_eq: 1e-9 };
        assert_eq!(classify(inf, inf, inf), TriangleType::Equilateral);
        assert_eq!(classify_with(cfg, inf, inf, inf), TriangleType::Equilateral);
        assert_eq!(classify_with(cfg, inf, inf, 1.0), TriangleType::Isosceles);
        assert_eq!(classify_with(cfg, 1.0, -inf, -inf), TriangleType::Isosceles);
    }
}
