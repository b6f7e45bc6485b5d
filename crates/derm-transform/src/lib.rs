//! derm-transform: five-channel preprocessing for lesion segmentation
//!
//! This library turns a decoded dermoscopic RGB image (and, for labeled
//! data, its binary lesion mask) into a fixed-size tensor a U-Net can
//! consume directly.
//!
//! # Quick Start
//!
//! The [`UnetPreprocessor`] is the primary entry point:
//!
//! ```
//! use derm_transform::{TransformOptions, UnetPreprocessor};
//! use image::{GrayImage, Luma, Rgb, RgbImage};
//!
//! let preprocessor = UnetPreprocessor::new(TransformOptions::default()).unwrap();
//!
//! let image = RgbImage::from_pixel(600, 450, Rgb([170, 110, 90]));
//! let mask = GrayImage::from_pixel(600, 450, Luma([0]));
//! let sample = preprocessor.transform(&image, &mask).unwrap();
//!
//! assert_eq!(sample.image().dim(), (320, 320, 5));
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! RGB input (any size)          mask (same size)
//!     |                             |
//!     v                             v
//! resize: longest side -> largest_dimension, ratio kept, short side truncated
//!     |                             |
//!     v                             |
//! RGB -> HLS                        |
//!     |                             |
//!     +---> L plane (kept as "original intensity")
//!     |                             |
//!     v                             |
//! equalize L histogram              |
//!     |                             |
//!     v                             |
//! HLS -> RGB                        |
//!     |                             |
//!     v                             v
//! center-pad to desired_size:  RGB & intensity with 255, mask with 0
//!     |
//!     v
//! [R/255, G/255, B/255, intensity/255, gaussian]   shape (size, size, 5)
//! ```
//!
//! # Why HLS
//!
//! Dermoscopy images vary widely in exposure. Equalizing the lightness plane
//! alone spreads contrast without shifting lesion hue. The untouched
//! lightness is still handed to the network as channel 3 so nothing is lost
//! when equalization over-stretches a flat image.
//!
//! # Gaussian Prior
//!
//! Lesions are usually photographed near the frame center. Channel 4 is a
//! static 2D Gaussian (FWHM 125 by default) that encodes that prior. It does
//! not depend on the sample, so it is computed once per [`UnetPreprocessor`]
//! and every output carries a bit-identical copy.
//!
//! # Augmentation
//!
//! [`Augmentation`] flips a [`ProcessedSample`] (tensor and mask together)
//! for the training copies: `hflip_`, `vflip_` and `rot_`.

pub mod api;
pub mod color;
pub mod output;
pub mod preprocess;

pub use api::{TransformError, UnetPreprocessor};
pub use color::{Hls, Srgb};
pub use output::{Augmentation, ProcessedSample, CHANNELS};
pub use preprocess::{Padding, TransformOptions};
