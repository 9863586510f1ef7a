//! Numeric bounds for range sliders
//!
//! [`NumericRange`] is the value object every other part of the slider
//! clamps against. It is always strictly ascending with a finite span, so
//! mapping code can divide by its span without checking.

use std::ops::RangeInclusive;

/// Largest magnitude a bound may have
///
/// Keeps `upper_bound - lower_bound` finite for any pair of bounds.
pub const MAX_BOUND: f64 = f64::MAX / 4.0;

/// Closed numeric interval `[lower_bound, upper_bound]` with `lower_bound < upper_bound`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericRange {
    lower_bound: f64,
    upper_bound: f64,
}

impl NumericRange {
    /// Create a range from caller supplied bounds, repairing invalid input
    ///
    /// - a NaN bound is read as `0`, infinite or huge bounds are clamped to
    ///   [`MAX_BOUND`]
    /// - reversed bounds are swapped as given
    /// - otherwise a lower bound of exactly `0` is replaced by `1`, and the
    ///   pair is swapped again if that reversed it
    /// - equal bounds get `upper = lower + 1`
    ///
    /// Because of the zero substitution `new(0.0, 50.0)` yields `[1, 50]`,
    /// while `new(0.0, -5.0)` yields `[-5, 0]`.
    pub fn new(min: f64, max: f64) -> Self {
        let min = Self::sanitize(min);
        let max = Self::sanitize(max);

        if max < min {
            return Self {
                lower_bound: max,
                upper_bound: min,
            };
        }

        let mut lower = if min == 0.0 { 1.0 } else { min };
        let mut upper = max;

        if upper < lower {
            std::mem::swap(&mut lower, &mut upper);
        }
        if upper <= lower {
            // One unit, or a couple of ulps where a unit would be absorbed
            upper = lower + (lower.abs() * 2.0 * f64::EPSILON).max(1.0);
        }

        Self {
            lower_bound: lower,
            upper_bound: upper,
        }
    }

    fn sanitize(bound: f64) -> f64 {
        if bound.is_nan() {
            0.0
        } else {
            bound.clamp(-MAX_BOUND, MAX_BOUND)
        }
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// Distance between the bounds, always positive
    pub fn span(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    /// Restrict `value` to the range. NaN clamps to the lower bound.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.lower_bound;
        }
        value.clamp(self.lower_bound, self.upper_bound)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower_bound && value <= self.upper_bound
    }

    /// Fraction of the way from the lower to the upper bound (not clamped)
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.lower_bound) / self.span()
    }

    /// Inverse of [`normalize`](Self::normalize)
    pub fn denormalize(&self, fraction: f64) -> f64 {
        fraction * self.span() + self.lower_bound
    }

    pub fn as_range_inclusive(&self) -> RangeInclusive<f64> {
        self.lower_bound..=self.upper_bound
    }
}

impl Default for NumericRange {
    fn default() -> Self {
        Self {
            lower_bound: 0.0,
            upper_bound: 100.0,
        }
    }
}

impl From<RangeInclusive<f64>> for NumericRange {
    fn from(range: RangeInclusive<f64>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}
