/// Rounds `x` to `digits` decimal places, ties to even.
pub fn round(x: f64, digits: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }

    // 10^digits split in two factors so that neither overflows on its own
    let (pow1, pow2) = if digits > 22 {
        (10.0_f64.powi((digits - 22) as i32), 1e22)
    } else {
        (10.0_f64.powi(digits as i32), 1.0)
    };

    let y = (x * pow1) * pow2;
    if !y.is_finite() {
        return x;
    }

    let mut z = y.round();
    if (y - z).abs() == 0.5 {
        z = 2.0 * (y / 2.0).round();
    }

    (z / pow2) / pow1
}

/// Bit pattern of `x` rounded to `digits` places, usable as a hash key.
///
/// `-0.0` and `0.0` map to the same key, and every NaN maps to the canonical NaN.
pub fn quantize(x: f64, digits: u32) -> u64 {
    if x.is_nan() {
        return f64::NAN.to_bits();
    }
    let rounded = round(x, digits);
    if rounded == 0.0 {
        0.0_f64.to_bits()
    } else {
        rounded.to_bits()
    }
}
