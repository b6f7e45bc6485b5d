//! Output types for the transform pipeline.
//!
//! [`ProcessedSample`] pairs the five-channel tensor with its padded mask.
//! [`Augmentation`] produces the flipped copies written for training ids.
//!
//! # Channel Layout
//!
//! | index | content |
//! |-------|---------|
//! | 0..=2 | equalized R, G, B / 255 |
//! | 3     | original HLS lightness / 255 |
//! | 4     | Gaussian prior |

mod augment;
mod sample;

pub use augment::Augmentation;
pub use sample::{ProcessedSample, CHANNELS};
