use std::convert::TryFrom;

/// Round `value` to `places` decimal places.
///
/// The value is scaled by `10^places`; if the fractional remainder of the
/// scaled value reaches `round_on`, it is rounded away from zero, otherwise
/// towards zero. With `round_on = 0.5` this is the usual round-half-up.
/// Whole numbers are never moved. Non-finite input is passed through, and so
/// is any value that cannot be scaled to `places` without overflowing.
///
/// # Example
///
/// ```
/// use geojson_diff::round::round;
///
/// assert_eq!(round(2.5, 0.5, 0), 3.);
/// assert_eq!(round(2.4, 0.5, 0), 2.);
/// assert_eq!(round(1.234_567_89, 0.5, 3), 1.235);
/// ```
pub fn round(value: f64, round_on: f64, places: u32) -> f64 {
    let pow = 10_f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
    let digit = value * pow;
    if !digit.is_finite() {
        return value;
    }
    let rounded = if digit.fract().abs() >= round_on {
        if digit >= 0. {
            digit.ceil()
        } else {
            digit.floor()
        }
    } else {
        digit.trunc()
    };
    rounded / pow
}
