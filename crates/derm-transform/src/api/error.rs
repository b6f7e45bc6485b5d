//! Unified error type for the derm-transform public API.

use std::fmt;

/// Errors raised while validating options or transforming a sample.
///
/// # Example
///
/// ```
/// use derm_transform::{TransformError, TransformOptions};
///
/// let options = TransformOptions::new().largest_dimension(400).desired_size(320);
/// assert!(matches!(
///     options.validate(),
///     Err(TransformError::NegativePadding { .. })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// A size option was zero
    InvalidSize {
        /// Name of the offending option
        name: &'static str,
    },
    /// An image side would exceed the padded square
    NegativePadding {
        /// Side length that does not fit
        size: u32,
        /// Side of the padded square
        desired_size: u32,
    },
    /// Gaussian spread was zero, negative, or not finite
    InvalidFwhm(f64),
    /// The input image has no pixels
    EmptyImage {
        /// Input width
        width: u32,
        /// Input height
        height: u32,
    },
    /// Image and mask do not share a pixel grid
    DimensionMismatch {
        /// Image `(width, height)`
        image: (u32, u32),
        /// Mask `(width, height)`
        mask: (u32, u32),
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::InvalidSize { name } => {
                write!(f, "{} must be positive", name)
            }
            TransformError::NegativePadding { size, desired_size } => {
                write!(
                    f,
                    "dimension {} exceeds desired size {} (padding would be negative)",
                    size, desired_size
                )
            }
            TransformError::InvalidFwhm(fwhm) => {
                write!(f, "fwhm must be a positive finite number, got {}", fwhm)
            }
            TransformError::EmptyImage { width, height } => {
                write!(f, "image has no pixels ({}x{})", width, height)
            }
            TransformError::DimensionMismatch { image, mask } => {
                write!(
                    f,
                    "mask is {}x{} but image is {}x{}",
                    mask.0, mask.1, image.0, image.1
                )
            }
        }
    }
}

impl std::error::Error for TransformError {}
