//! Conversion between graph space (pixels) and math space (data units)
//!
//! Both conversions are a pure ratio: `value / source_span * target_span`.
//! Neither subtracts the source minimum nor adds the target minimum, so
//! callers that need an offset transform shift the value themselves
//! (see [`crate::renderer::chart`]). Arithmetic runs in `f64` and the
//! result is truncated toward zero.
//!
//! A zero-width source range divides by zero. The unchecked functions let
//! that propagate as infinity/NaN, which the `f64 -> i64` cast saturates
//! (`+inf` to `i64::MAX`, `-inf` to `i64::MIN`, `NaN` to `0`). Use the
//! `try_` variants to reject such ranges up front.

use crate::error::ScaleError;

/// A `(min, max)` pair for one axis in either space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScaleRange {
    pub min: i64,
    pub max: i64,
}

impl ScaleRange {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// `max - min`, computed in `f64` so extreme bounds cannot overflow
    pub fn span(&self) -> f64 {
        self.max as f64 - self.min as f64
    }

    pub fn is_zero_width(&self) -> bool {
        self.min == self.max
    }

    /// Fail with [`ScaleError::ZeroWidthRange`] when `min == max`
    pub fn validate(&self, axis: &'static str, value: i64) -> Result<(), ScaleError> {
        if self.is_zero_width() {
            return Err(ScaleError::ZeroWidthRange {
                axis,
                min: self.min,
                max: self.max,
                value,
            });
        }
        Ok(())
    }
}

fn ratio_scale(value: i64, source: ScaleRange, target: ScaleRange) -> i64 {
    ((value as f64 / source.span()) * target.span()) as i64
}

/// Convert a graph-space value into math space
///
/// # Example
///
/// ```rust
/// use svg_graph::scale::scale_graph_to_math;
///
/// assert_eq!(scale_graph_to_math(500, 0, 1000, 0, 100), 50);
/// ```
pub fn scale_graph_to_math(gval: i64, gmin: i64, gmax: i64, mmin: i64, mmax: i64) -> i64 {
    ratio_scale(gval, ScaleRange::new(gmin, gmax), ScaleRange::new(mmin, mmax))
}

/// Convert a math-space value into graph space
///
/// # Example
///
/// ```rust
/// use svg_graph::scale::scale_math_to_graph;
///
/// assert_eq!(scale_math_to_graph(50, 0, 100, 0, 1000), 500);
/// ```
pub fn scale_math_to_graph(mval: i64, mmin: i64, mmax: i64, gmin: i64, gmax: i64) -> i64 {
    ratio_scale(mval, ScaleRange::new(mmin, mmax), ScaleRange::new(gmin, gmax))
}

/// [`scale_graph_to_math`] that rejects a zero-width graph range
pub fn try_scale_graph_to_math(
    gval: i64,
    gmin: i64,
    gmax: i64,
    mmin: i64,
    mmax: i64,
) -> Result<i64, ScaleError> {
    ScaleRange::new(gmin, gmax).validate("graph", gval)?;
    Ok(scale_graph_to_math(gval, gmin, gmax, mmin, mmax))
}

/// [`scale_math_to_graph`] that rejects a zero-width math range
pub fn try_scale_math_to_graph(
    mval: i64,
    mmin: i64,
    mmax: i64,
    gmin: i64,
    gmax: i64,
) -> Result<i64, ScaleError> {
    ScaleRange::new(mmin, mmax).validate("math", mval)?;
    Ok(scale_math_to_graph(mval, mmin, mmax, gmin, gmax))
}
