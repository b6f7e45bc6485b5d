//! Geometric augmentations for training samples.

use image::{imageops, GrayImage};
use ndarray::{s, Array3};

/// A deterministic flip applied identically to tensor and mask.
///
/// File prefixes follow the ISIC training set convention: `hflip_` is the
/// mirror across the horizontal axis (rows reversed, upside down) and
/// `vflip_` the mirror across the vertical axis (columns reversed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Augmentation {
    /// Unchanged copy
    Identity,
    /// Rows reversed
    HorizontalFlip,
    /// Columns reversed
    VerticalFlip,
    /// Rows and columns reversed
    Rotate180,
}

impl Augmentation {
    /// Every copy written for a training id, original first.
    pub const ALL: [Augmentation; 4] = [
        Augmentation::Identity,
        Augmentation::HorizontalFlip,
        Augmentation::VerticalFlip,
        Augmentation::Rotate180,
    ];

    /// Output file-name prefix.
    pub fn prefix(self) -> &'static str {
        match self {
            Augmentation::Identity => "",
            Augmentation::HorizontalFlip => "hflip_",
            Augmentation::VerticalFlip => "vflip_",
            Augmentation::Rotate180 => "rot_",
        }
    }

    /// Apply to a `[row, column, channel]` tensor.
    pub fn apply_tensor(self, tensor: &Array3<f32>) -> Array3<f32> {
        let view = match self {
            Augmentation::Identity => return tensor.clone(),
            Augmentation::HorizontalFlip => tensor.slice(s![..;-1, .., ..]),
            Augmentation::VerticalFlip => tensor.slice(s![.., ..;-1, ..]),
            Augmentation::Rotate180 => tensor.slice(s![..;-1, ..;-1, ..]),
        };
        view.as_standard_layout().into_owned()
    }

    /// Apply to a single-channel mask.
    pub fn apply_mask(self, mask: &GrayImage) -> GrayImage {
        match self {
            Augmentation::Identity => mask.clone(),
            Augmentation::HorizontalFlip => imageops::flip_vertical(mask),
            Augmentation::VerticalFlip => imageops::flip_horizontal(mask),
            Augmentation::Rotate180 => imageops::rotate180(mask),
        }
    }
}
