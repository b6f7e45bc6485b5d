//! Histogram equalization of an 8-bit plane.
//!
//! The lookup table maps the first occupied bin to 0 and spreads the
//! remaining cumulative counts over 0..=255:
//!
//! ```text
//! lut[v] = round((cdf(v) - cdf_min) * 255 / (total - cdf_min))
//! ```
//!
//! A constant plane has nothing to spread and is left at its value.

/// Build the equalization lookup table for `values`.
pub fn equalization_lut(values: &[u8]) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (i, slot) in lut.iter_mut().enumerate() {
        *slot = i as u8;
    }

    let mut histogram = [0usize; 256];
    for &v in values {
        histogram[v as usize] += 1;
    }

    let total = values.len();
    let Some(first) = histogram.iter().position(|&count| count > 0) else {
        return lut;
    };

    let cdf_min = histogram[first];
    if cdf_min == total {
        return [first as u8; 256];
    }

    let scale = 255.0 / (total - cdf_min) as f64;
    let mut cumulative = 0usize;
    lut[..=first].fill(0);
    for bin in first + 1..256 {
        cumulative += histogram[bin];
        lut[bin] = (cumulative as f64 * scale).round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Equalize `values` in place.
pub fn equalize_histogram(values: &mut [u8]) {
    let lut = equalization_lut(values);
    for v in values.iter_mut() {
        *v = lut[*v as usize];
    }
}
