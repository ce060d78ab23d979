//! Exact solver for the two-variable offset LP.
//!
//! ```text
//!   maximize   s
//!   subject to lo_i <= s · v_i + t <= hi_i   for every i
//!              s >= 0,  t free
//! ```
//!
//! For fixed `s` a shift exists iff `lo_i - s·v_i <= hi_j - s·v_j` for all
//! pairs `i, j`. Each pair with `v_i != v_j` bounds `s` from one side, so
//! the feasible scales form an interval `[s_lo, s_hi]`. Constraints with
//! equal `v` collapse into one band first.

use std::cmp::Ordering;

use crate::error::{EmbedError, EmbedResult};

/// One constraint `lo <= s · value + t <= hi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Band {
    pub value: f64,
    pub lo: f64,
    pub hi: f64,
}

/// Optimal `(scale, shift)`.
///
/// The shift is the midpoint of the feasible shift interval at the optimal
/// scale.
pub(crate) fn maximize_scale(bands: &[Band]) -> EmbedResult<(f64, f64)> {
    let groups = merge_equal_values(bands);
    if groups.iter().any(|g| g.lo > g.hi) {
        return Err(EmbedError::Infeasible);
    }

    let mut s_lo = 0.0_f64;
    let mut s_hi = f64::INFINITY;
    for lower in &groups {
        for upper in &groups {
            let dv = upper.value - lower.value;
            let bound = (upper.hi - lower.lo) / dv;
            match dv.partial_cmp(&0.0) {
                Some(Ordering::Greater) => s_hi = s_hi.min(bound),
                Some(Ordering::Less) => s_lo = s_lo.max(bound),
                _ => {}
            }
        }
    }

    if s_lo > s_hi {
        return Err(EmbedError::Infeasible);
    }
    if s_hi == f64::INFINITY {
        return Err(EmbedError::Unbounded);
    }

    let scale = s_hi;
    let t_lo = groups
        .iter()
        .map(|g| g.lo - scale * g.value)
        .fold(f64::NEG_INFINITY, f64::max);
    let t_hi = groups
        .iter()
        .map(|g| g.hi - scale * g.value)
        .fold(f64::INFINITY, f64::min);
    Ok((scale, (t_lo + t_hi) / 2.0))
}

/// Intersect the bands of constraints sharing a value.
fn merge_equal_values(bands: &[Band]) -> Vec<Band> {
    let mut sorted = bands.to_vec();
    sorted.sort_by(|a, b| a.value.total_cmp(&b.value));

    let mut groups: Vec<Band> = Vec::with_capacity(sorted.len());
    for band in sorted {
        match groups.last_mut() {
            Some(last) if last.value == band.value => {
                last.lo = last.lo.max(band.lo);
                last.hi = last.hi.min(band.hi);
            }
            _ => groups.push(band),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(value: f64, lo: f64, hi: f64) -> Band {
        Band { value, lo, hi }
    }

    #[test]
    fn test_two_values() {
        // v = 0 in [-1, 1], v = -1 in [-1, 1]: s·(-1) + t and t both in
        // [-1, 1] gives s <= 2 with t = 1.
        let (s, t) = maximize_scale(&[band(0.0, -1.0, 1.0), band(-1.0, -1.0, 1.0)]).unwrap();
        assert!((s - 2.0).abs() < 1e-12);
        assert!((t - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tightest_band_wins() {
        let bands = [
            band(0.0, -0.5, 0.5),
            band(0.0, -0.1, 0.2),
            band(-1.0, -0.3, 0.1),
        ];
        let (s, t) = maximize_scale(&bands).unwrap();
        // t <= 0.2 and t - s >= -0.3.
        assert!((s - 0.5).abs() < 1e-12);
        assert!((t - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_single_value_is_unbounded() {
        let err = maximize_scale(&[band(-1.0, -0.1, 0.1), band(-1.0, -0.2, 0.1)]).unwrap_err();
        assert_eq!(err, EmbedError::Unbounded);
    }

    #[test]
    fn test_empty_band_is_infeasible() {
        let err = maximize_scale(&[band(0.0, 0.1, 0.2), band(0.0, -0.2, 0.0)]).unwrap_err();
        assert_eq!(err, EmbedError::Infeasible);
    }

    #[test]
    fn test_negative_scale_only_is_infeasible() {
        // Only s <= -1 would satisfy both bands.
        let err = maximize_scale(&[band(0.0, 1.0, 1.0), band(1.0, 0.0, 0.0)]).unwrap_err();
        assert_eq!(err, EmbedError::Infeasible);
    }
}
