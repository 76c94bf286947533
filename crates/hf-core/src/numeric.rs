use crate::error::{HfError, HfResult};

pub type Real = f64;

/// Absolute + relative tolerance pair for comparing derived quantities
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> HfResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HfError::NonFinite { what, value: v })
    }
}

/// Require a strictly positive, finite value.
pub fn ensure_positive(v: Real, what: &'static str) -> HfResult<Real> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(HfError::NonPositive { what, value: v })
    }
}

/// Clamp a signed index into `[0, len - 1]`.
///
/// Returns `None` when `len == 0` since no index is valid.
pub fn clamp_index(index: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let max = (len - 1) as i64;
    Some(index.clamp(0, max) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite value for test"));
    }

    #[test]
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(1.0, "x").is_ok());
        assert!(matches!(
            ensure_positive(0.0, "x"),
            Err(HfError::NonPositive { what: "x", .. })
        ));
        assert!(ensure_positive(-2.0, "x").is_err());
        assert!(matches!(
            ensure_positive(Real::INFINITY, "x"),
            Err(HfError::NonFinite { .. })
        ));
    }

    #[test]
    fn clamp_index_bounds() {
        assert_eq!(clamp_index(-5, 10), Some(0));
        assert_eq!(clamp_index(3, 10), Some(3));
        assert_eq!(clamp_index(42, 10), Some(9));
        assert_eq!(clamp_index(0, 0), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn clamped_index_is_in_bounds(index in any::<i64>(), len in 1_usize..10_000) {
            let clamped = clamp_index(index, len).unwrap();
            prop_assert!(clamped < len);
        }
    }
}
