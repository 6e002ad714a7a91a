//! Fractional odds rendering.
//!
//! Converts a real-valued profit ratio (decimal odds minus one) into a
//! reduced `num/denom` string. The scheme scales the ratio by a power of ten
//! and divides out a floating-point GCD. It is exact for the fractions
//! bookmakers actually quote (1/2, 9/4, 100/30, ...) and approximate for
//! anything that does not terminate within three decimal places.

/// Remainders below this are treated as zero by [`float_gcd`].
pub const GCD_EPSILON: f64 = 0.001;

/// Decimal places kept before scaling.
const PRECISION: i32 = 3;

/// Largest integer `f64` represents exactly (2^53).
const MAX_EXACT_PART: f64 = 9_007_199_254_740_992.0;

/// Render `ratio` as a reduced fraction separated by `divider`.
///
/// Ratios below one are inverted before scaling and swapped back after
/// reduction, which keeps odds-on prices such as `1/3` stable.
///
/// Extreme ratios can reduce to parts beyond what `f64` holds exactly. Those
/// fall back to the ratio rounded to a whole number against one, so
/// `1e-7` renders as `1/10000000` instead of a saturated integer.
///
/// # Examples
///
/// ```
/// use odds::domain::fraction::reduce;
///
/// assert_eq!(reduce(1.25, '/'), "5/4");
/// assert_eq!(reduce(0.5, '-'), "1-2");
/// ```
#[must_use]
pub fn reduce(ratio: f64, divider: char) -> String {
    let (mut num, mut denom) = reduce_parts(ratio);
    if num > MAX_EXACT_PART || denom > MAX_EXACT_PART {
        let whole = to_fixed(if ratio < 1.0 { 1.0 / ratio } else { ratio }, 0);
        return if ratio < 1.0 {
            format!("1{divider}{whole:.0}")
        } else {
            format!("{whole:.0}{divider}1")
        };
    }
    if ratio < 1.0 {
        std::mem::swap(&mut num, &mut denom);
    }
    format!("{}{divider}{}", num as i64, denom as i64)
}

/// Scale and reduce a ratio that is at least one.
fn reduce_parts(ratio: f64) -> (f64, f64) {
    let value = if ratio < 1.0 { 1.0 / ratio } else { ratio };
    let value = to_fixed(value, PRECISION);

    let digits = integer_digits(value);
    let denom = value * 10f64.powi(digits);
    let num = value * denom;

    let divisor = float_gcd(num, denom);
    (num / divisor, denom / divisor)
}

/// Number of decimal digits in the integer part of `value`.
fn integer_digits(value: f64) -> i32 {
    let mut whole = value.trunc() as i64;
    let mut digits = 1;
    while whole >= 10 {
        whole /= 10;
        digits += 1;
    }
    digits
}

/// Euclid's algorithm over floats, stopping once the remainder drops below
/// [`GCD_EPSILON`].
#[must_use]
pub fn float_gcd(mut a: f64, mut b: f64) -> f64 {
    while b >= GCD_EPSILON {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Round half away from zero.
fn round_half_away(value: f64) -> f64 {
    (value + 0.5f64.copysign(value)).trunc()
}

/// Round `value` to `precision` decimal places, half away from zero.
#[must_use]
pub fn to_fixed(value: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    round_half_away(value * scale) / scale
}
