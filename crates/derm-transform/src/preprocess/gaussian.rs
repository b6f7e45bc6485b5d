//! Static 2D Gaussian prior.
//!
//! ```text
//! g(x, y) = exp(-4 ln2 ((x - x0)^2 + (y - y0)^2) / fwhm^2)
//! ```
//!
//! `x` indexes columns and `y` rows, so the returned array is addressed
//! `[[row, column]]`. The peak cell is exactly 1.0 when the center lands on
//! a pixel.

use ndarray::Array2;

/// Build a `size` x `size` Gaussian field.
///
/// `center` is `(x0, y0)`; `None` places the peak at `(size / 2, size / 2)`.
///
/// # Example
///
/// ```
/// use derm_transform::preprocess::gaussian_field;
///
/// let field = gaussian_field(5, 2.0, None);
/// assert_eq!(field[[2, 2]], 1.0);
/// ```
pub fn gaussian_field(size: usize, fwhm: f64, center: Option<(f64, f64)>) -> Array2<f32> {
    let (x0, y0) = center.unwrap_or(((size / 2) as f64, (size / 2) as f64));
    let factor = -4.0 * std::f64::consts::LN_2 / (fwhm * fwhm);

    Array2::from_shape_fn((size, size), |(row, column)| {
        let dx = column as f64 - x0;
        let dy = row as f64 - y0;
        (factor * (dx * dx + dy * dy)).exp() as f32
    })
}
