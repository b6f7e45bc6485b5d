//! UnetPreprocessor -- the primary entry point for the crate.
//!
//! [`UnetPreprocessor`] validates [`TransformOptions`] once, caches the
//! Gaussian channel, and then turns any number of raw image/mask pairs into
//! fixed-size five-channel tensors.

use image::{GrayImage, Luma, Rgb, RgbImage};
use ndarray::{Array2, Array3};

use super::error::TransformError;
use crate::color::{Hls, Srgb};
use crate::output::{ProcessedSample, CHANNELS};
use crate::preprocess::{
    equalize_histogram, gaussian_field, pad_constant, resize_exact, scaled_dimensions, Padding,
    TransformOptions,
};

/// Fill for padded image and intensity pixels.
const WHITE: u8 = 255;
/// Fill for padded mask pixels.
const BACKGROUND: u8 = 0;

/// Five-channel transform for dermoscopic images.
///
/// # Design
///
/// - Construction validates the options, so a preprocessor in hand can
///   always produce a `desired_size` square without cropping
/// - The Gaussian field is computed once and shared by every output
/// - Transform methods take `&self`; one preprocessor serves a whole run and
///   can be shared across threads
///
/// # Example
///
/// ```
/// use derm_transform::{TransformOptions, UnetPreprocessor};
/// use image::{GrayImage, Luma, Rgb, RgbImage};
///
/// let options = TransformOptions::new().largest_dimension(50).desired_size(64);
/// let preprocessor = UnetPreprocessor::new(options).unwrap();
///
/// let image = RgbImage::from_pixel(80, 40, Rgb([180, 120, 90]));
/// let mask = GrayImage::from_pixel(80, 40, Luma([255]));
/// let sample = preprocessor.transform(&image, &mask).unwrap();
///
/// assert_eq!(sample.image().dim(), (64, 64, 5));
/// assert_eq!(sample.mask().dimensions(), (64, 64));
/// ```
#[derive(Debug, Clone)]
pub struct UnetPreprocessor {
    options: TransformOptions,
    gaussian: Array2<f32>,
}

impl UnetPreprocessor {
    /// Validate `options` and precompute the Gaussian channel.
    pub fn new(options: TransformOptions) -> Result<Self, TransformError> {
        options.validate()?;
        let gaussian = gaussian_field(options.desired_size as usize, options.fwhm, options.center);
        Ok(Self { options, gaussian })
    }

    #[inline]
    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// The cached Gaussian channel, `[row, column]`.
    #[inline]
    pub fn gaussian(&self) -> &Array2<f32> {
        &self.gaussian
    }

    /// Transform a labeled pair.
    ///
    /// The mask must have the image's original dimensions; it is resized and
    /// padded onto the same grid as the tensor.
    pub fn transform(
        &self,
        image: &RgbImage,
        mask: &GrayImage,
    ) -> Result<ProcessedSample, TransformError> {
        check_aligned(image.dimensions(), mask.dimensions())?;
        let (tensor, (width, height), padding) = self.run(image)?;

        let mask = resize_exact(mask, width, height);
        check_aligned((width, height), mask.dimensions())?;
        let mask = pad_constant(&mask, padding, Luma([BACKGROUND]));

        Ok(ProcessedSample::new(tensor, mask))
    }

    /// Transform an unlabeled image (no mask to carry along).
    pub fn transform_image(&self, image: &RgbImage) -> Result<Array3<f32>, TransformError> {
        self.run(image).map(|(tensor, _, _)| tensor)
    }

    /// Applies the image pipeline and returns the tensor together with the
    /// resized dimensions and padding a mask has to follow:
    /// 1. Aspect-preserving resize
    /// 2. RGB -> HLS, keeping the pre-equalization lightness plane
    /// 3. Centered padding geometry
    /// 4. Lightness equalization, HLS -> RGB
    /// 5. Padding: image and intensity white
    /// 6. Channel assembly `[R, G, B, intensity, gaussian]`
    fn run(&self, image: &RgbImage) -> Result<(Array3<f32>, (u32, u32), Padding), TransformError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(TransformError::EmptyImage { width, height });
        }

        // 1. Resize
        let (width, height) = scaled_dimensions(width, height, self.options.largest_dimension);
        let resized = resize_exact(image, width, height);

        // 2. HLS and the untouched lightness plane
        let hls: Vec<Hls> = resized
            .pixels()
            .map(|p| Hls::from(Srgb::from_bytes(p.0)))
            .collect();
        let mut lightness: Vec<u8> = hls.iter().map(|c| c.lightness_u8()).collect();
        let row_stride = width as usize;
        let original_intensity = GrayImage::from_fn(width, height, |x, y| {
            Luma([lightness[y as usize * row_stride + x as usize]])
        });

        // 3. Padding geometry
        let padding = Padding::centered(width, height, self.options.desired_size)?;

        // 4. Equalize lightness only
        equalize_histogram(&mut lightness);
        let equalized = RgbImage::from_fn(width, height, |x, y| {
            let i = y as usize * row_stride + x as usize;
            Rgb(Srgb::from(hls[i].with_lightness_u8(lightness[i])).to_bytes())
        });

        // 5. Pad
        let intensity = pad_constant(&original_intensity, padding, Luma([WHITE]));
        let rgb = pad_constant(&equalized, padding, Rgb([WHITE; 3]));

        // 6. Assemble
        let size = self.options.desired_size as usize;
        let tensor = Array3::from_shape_fn((size, size, CHANNELS), |(row, column, channel)| {
            let (x, y) = (column as u32, row as u32);
            match channel {
                0..=2 => rgb.get_pixel(x, y).0[channel] as f32 / 255.0,
                3 => intensity.get_pixel(x, y).0[0] as f32 / 255.0,
                _ => self.gaussian[[row, column]],
            }
        });

        Ok((tensor, (width, height), padding))
    }
}

fn check_aligned(image: (u32, u32), mask: (u32, u32)) -> Result<(), TransformError> {
    if image != mask {
        return Err(TransformError::DimensionMismatch { image, mask });
    }
    Ok(())
}
