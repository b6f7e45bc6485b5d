//! Color types and conversion utilities
//!
//! The pipeline only ever needs two representations of a pixel:
//!
//! - **Srgb**: the decoded 8-bit RGB value, normalized to 0.0..=1.0
//! - **Hls**: hue/lightness/saturation, so contrast work can touch brightness
//!   without shifting hue
//!
//! # Example
//!
//! ```
//! use derm_transform::{Hls, Srgb};
//!
//! let srgb = Srgb::from_u8(200, 120, 40);
//! let hls = Hls::from(srgb);
//!
//! // Brighten the pixel, then go back to RGB for output
//! let brighter = Srgb::from(hls.with_lightness_u8(220));
//! assert!(brighter.to_bytes()[0] >= 200);
//! ```

mod hls;
mod srgb;

pub use hls::Hls;
pub use srgb::Srgb;
