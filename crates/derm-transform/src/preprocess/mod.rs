//! Building blocks of the five-channel transform.
//!
//! Each step is exposed on its own so callers (and tests) can check the
//! geometry without running the whole pipeline:
//!
//! 1. **Resize** ([`scaled_dimensions`], [`resize_exact`]) - longest side to
//!    `largest_dimension`, aspect preserved
//! 2. **Padding** ([`Padding::centered`], [`pad_constant`]) - center inside a
//!    `desired_size` square
//! 3. **Equalization** ([`equalize_histogram`]) - applied to the HLS lightness
//!    plane only
//! 4. **Gaussian prior** ([`gaussian_field`]) - the static fifth channel
//!
//! [`UnetPreprocessor`](crate::UnetPreprocessor) strings them together.
//!
//! # Example
//!
//! ```
//! use derm_transform::preprocess::{scaled_dimensions, Padding};
//!
//! // 400 rows x 200 columns, longest side to 250, square of 320
//! let (width, height) = scaled_dimensions(200, 400, 250);
//! let padding = Padding::centered(width, height, 320).unwrap();
//!
//! assert_eq!((width, height), (125, 250));
//! assert_eq!(padding.top + height + padding.bottom, 320);
//! assert_eq!(padding.left + width + padding.right, 320);
//! ```

mod equalize;
mod gaussian;
mod options;
mod pad;
mod resize;

pub use equalize::{equalization_lut, equalize_histogram};
pub use gaussian::gaussian_field;
pub use options::TransformOptions;
pub use pad::{pad_constant, Padding};
pub use resize::{resize_exact, scaled_dimensions};
