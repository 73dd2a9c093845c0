//! Unit conversion utilities.
//!
//! Slide geometry is expressed in EMUs (English Metric Units). Layout rules are
//! stated as fractions of the canvas, so most conversions here go from a
//! fraction of an extent to whole EMUs.

pub const EMUS_PER_INCH: i64 = 914_400;

/// Default canvas width: 10 inches.
pub const DEFAULT_CANVAS_WIDTH: i64 = 10 * EMUS_PER_INCH;
/// Default canvas height: 5.625 inches (16:9 with the default width).
pub const DEFAULT_CANVAS_HEIGHT: i64 = EMUS_PER_INCH * 45 / 8;

/// Take a fraction of an EMU extent, rounding toward zero.
///
/// # Examples
///
/// ```
/// use figdeck::common::unit::fraction_of;
/// assert_eq!(fraction_of(5_143_500, 0.65), 3_343_275);
/// assert_eq!(fraction_of(5_143_500, 0.04), 205_740);
/// ```
#[inline]
pub fn fraction_of(extent: i64, fraction: f64) -> i64 {
    (extent as f64 * fraction) as i64
}
