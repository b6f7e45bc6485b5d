//! derm-dataset - lesion segmentation dataset builder
//!
//! Turns a directory of dermoscopic RGB images and their ground-truth masks
//! into a seeded train/test split of five-channel `.npy` tensors and PNG
//! masks, with flipped copies of every training sample.
//! The per-image pipeline lives in the `derm-transform` crate.

pub mod error;
pub mod models;
pub mod services;

use error::BuildError;
use models::BuildConfig;
use services::{BuildSummary, DatasetBuilder};

/// Build the dataset described by `config` from and into the filesystem.
///
/// Re-running overwrites previous outputs; an interrupted run is not resumed.
pub fn build_training_set(config: &BuildConfig) -> Result<BuildSummary, BuildError> {
    tracing::info!(
        img_dir = %config.img_dir.display(),
        mask_dir = %config.mask_dir.display(),
        output_dir = %config.output_dir.display(),
        "Building training set"
    );
    DatasetBuilder::from_config(config.clone())?.build()
}
