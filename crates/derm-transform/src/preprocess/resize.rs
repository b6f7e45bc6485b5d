//! Aspect-preserving resize.
//!
//! The longest side is scaled to an exact target and the other side follows
//! the same ratio, truncated toward zero. Ties (square inputs) take the
//! row branch.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Pixel};

/// Filter shared by images and masks, so both land on the same grid.
const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// Compute `(width, height)` after scaling the longest side to `largest`.
///
/// The shorter side never collapses below one pixel.
///
/// # Example
///
/// ```
/// use derm_transform::preprocess::scaled_dimensions;
///
/// // 400 rows x 200 columns
/// assert_eq!(scaled_dimensions(200, 400, 250), (125, 250));
/// ```
pub fn scaled_dimensions(width: u32, height: u32, largest: u32) -> (u32, u32) {
    if height >= width {
        let ratio = largest as f64 / height as f64;
        let new_width = (width as f64 * ratio) as u32;
        (new_width.max(1), largest)
    } else {
        let ratio = largest as f64 / width as f64;
        let new_height = (height as f64 * ratio) as u32;
        (largest, new_height.max(1))
    }
}

/// Resize a buffer to exact dimensions with the pipeline's filter.
pub fn resize_exact<P>(
    image: &ImageBuffer<P, Vec<P::Subpixel>>,
    width: u32,
    height: u32,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    if image.dimensions() == (width, height) {
        return image.clone();
    }
    imageops::resize(image, width, height, RESIZE_FILTER)
}
