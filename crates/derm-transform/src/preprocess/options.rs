//! Transform options and configuration.
//!
//! This module provides the [`TransformOptions`] struct for configuring the
//! per-image pipeline.

use crate::api::TransformError;

/// Configuration options for the five-channel transform.
///
/// # Defaults
///
/// - Largest dimension: 250 (longest side after the aspect-preserving resize)
/// - Desired size: 320 (side of the padded square output)
/// - FWHM: 125.0 (spread of the Gaussian prior channel)
/// - Center: `None` (geometric center of the output)
///
/// # Example
///
/// ```
/// use derm_transform::TransformOptions;
///
/// let options = TransformOptions::new()
///     .largest_dimension(200)
///     .desired_size(256)
///     .fwhm(100.0);
///
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOptions {
    /// Length of the longest side after resizing, before padding.
    pub largest_dimension: u32,

    /// Side of the square output once padded.
    pub desired_size: u32,

    /// Full width at half maximum of the Gaussian channel, in pixels.
    pub fwhm: f64,

    /// Gaussian center as `(x, y)` = (column, row). `None` uses
    /// `(desired_size / 2, desired_size / 2)`.
    pub center: Option<(f64, f64)>,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            largest_dimension: 250,
            desired_size: 320,
            fwhm: 125.0,
            center: None,
        }
    }
}

impl TransformOptions {
    /// Create new transform options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the length of the longest side after resizing.
    #[inline]
    pub fn largest_dimension(mut self, pixels: u32) -> Self {
        self.largest_dimension = pixels;
        self
    }

    /// Set the side of the padded square output.
    #[inline]
    pub fn desired_size(mut self, pixels: u32) -> Self {
        self.desired_size = pixels;
        self
    }

    /// Set the Gaussian full width at half maximum.
    #[inline]
    pub fn fwhm(mut self, fwhm: f64) -> Self {
        self.fwhm = fwhm;
        self
    }

    /// Place the Gaussian peak at column `x`, row `y`.
    #[inline]
    pub fn center(mut self, x: f64, y: f64) -> Self {
        self.center = Some((x, y));
        self
    }

    /// Check the options can produce a well-formed output.
    ///
    /// A `largest_dimension` above `desired_size` would need negative padding,
    /// so it is rejected here instead of cropping later.
    pub fn validate(&self) -> Result<(), TransformError> {
        if self.largest_dimension == 0 {
            return Err(TransformError::InvalidSize {
                name: "largest_dimension",
            });
        }
        if self.desired_size == 0 {
            return Err(TransformError::InvalidSize {
                name: "desired_size",
            });
        }
        if self.largest_dimension > self.desired_size {
            return Err(TransformError::NegativePadding {
                size: self.largest_dimension,
                desired_size: self.desired_size,
            });
        }
        if !(self.fwhm > 0.0 && self.fwhm.is_finite()) {
            return Err(TransformError::InvalidFwhm(self.fwhm));
        }
        Ok(())
    }
}
