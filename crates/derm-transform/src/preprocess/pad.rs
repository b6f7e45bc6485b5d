//! Centered constant padding.

use image::{imageops, ImageBuffer, Pixel};

use crate::api::TransformError;

/// Border widths that center an image inside a square canvas.
///
/// Odd deltas put the extra pixel on the bottom and right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Padding {
    /// Padding that brings a `width` x `height` image to `desired` x `desired`.
    ///
    /// # Example
    ///
    /// ```
    /// use derm_transform::preprocess::Padding;
    ///
    /// let padding = Padding::centered(125, 250, 320).unwrap();
    /// assert_eq!((padding.top, padding.bottom), (35, 35));
    /// assert_eq!((padding.left, padding.right), (97, 98));
    /// ```
    pub fn centered(width: u32, height: u32, desired: u32) -> Result<Self, TransformError> {
        let largest = width.max(height);
        if largest > desired {
            return Err(TransformError::NegativePadding {
                size: largest,
                desired_size: desired,
            });
        }

        let delta_w = desired - width;
        let delta_h = desired - height;
        Ok(Self {
            top: delta_h / 2,
            bottom: delta_h - delta_h / 2,
            left: delta_w / 2,
            right: delta_w - delta_w / 2,
        })
    }
}

/// Surround `image` with `fill` according to `padding`.
pub fn pad_constant<P>(
    image: &ImageBuffer<P, Vec<P::Subpixel>>,
    padding: Padding,
    fill: P,
) -> ImageBuffer<P, Vec<P::Subpixel>>
where
    P: Pixel,
{
    let width = image.width() + padding.left + padding.right;
    let height = image.height() + padding.top + padding.bottom;
    let mut canvas = ImageBuffer::from_pixel(width, height, fill);
    imageops::replace(&mut canvas, image, padding.left as i64, padding.top as i64);
    canvas
}
