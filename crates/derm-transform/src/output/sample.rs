//! ProcessedSample: the tensor/mask pair produced for one labeled image.

use image::GrayImage;
use ndarray::Array3;

use super::augment::Augmentation;

/// Number of channels in every processed tensor.
pub const CHANNELS: usize = 5;

/// A transformed image and its aligned mask.
///
/// The tensor is laid out `[row, column, channel]` with shape
/// `(size, size, CHANNELS)`; the mask is `size` x `size`.
///
/// # Example
///
/// ```
/// use derm_transform::{Augmentation, ProcessedSample};
/// use image::{GrayImage, Luma};
/// use ndarray::Array3;
///
/// let image = Array3::<f32>::zeros((4, 4, 5));
/// let mask = GrayImage::from_pixel(4, 4, Luma([0]));
/// let sample = ProcessedSample::new(image, mask);
///
/// let flipped = sample.augment(Augmentation::Rotate180);
/// assert_eq!(flipped.size(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedSample {
    image: Array3<f32>,
    mask: GrayImage,
}

impl ProcessedSample {
    /// Pair a tensor with its mask.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that the mask covers the tensor's spatial grid and the
    /// tensor has [`CHANNELS`] channels.
    pub fn new(image: Array3<f32>, mask: GrayImage) -> Self {
        let (rows, columns, channels) = image.dim();
        debug_assert_eq!(channels, CHANNELS, "tensor must have {} channels", CHANNELS);
        debug_assert_eq!(
            (columns as u32, rows as u32),
            mask.dimensions(),
            "mask must share the tensor grid"
        );
        Self { image, mask }
    }

    /// The `(size, size, 5)` float tensor.
    #[inline]
    pub fn image(&self) -> &Array3<f32> {
        &self.image
    }

    /// The padded mask.
    #[inline]
    pub fn mask(&self) -> &GrayImage {
        &self.mask
    }

    /// Side length of the square grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.image.dim().0
    }

    /// Apply a geometric augmentation to both tensor and mask.
    pub fn augment(&self, augmentation: Augmentation) -> Self {
        Self {
            image: augmentation.apply_tensor(&self.image),
            mask: augmentation.apply_mask(&self.mask),
        }
    }

    pub fn into_parts(self) -> (Array3<f32>, GrayImage) {
        (self.image, self.mask)
    }
}
