use derm_transform::TransformOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::sample::SampleId;
use crate::error::ConfigError;

/// Ids kept out of training so they can be inspected on every run.
pub const DEFAULT_MUST_BE_IN_TEST: [&str; 11] = [
    "ISIC_0000031",
    "ISIC_0000060",
    "ISIC_0000073",
    "ISIC_0000074",
    "ISIC_0000121",
    "ISIC_0000166",
    "ISIC_0000355",
    "ISIC_0000395",
    "ISIC_0009944",
    "ISIC_0010047",
    "ISIC_0016064",
];

/// Dataset build configuration, loadable from YAML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Directory holding the raw RGB images
    #[serde(default = "default_img_dir")]
    pub img_dir: PathBuf,

    /// Directory holding the ground-truth masks
    #[serde(default = "default_mask_dir")]
    pub mask_dir: PathBuf,

    /// Root of the generated dataset (`train/` and `test/` are created here)
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Share of ids assigned to training
    #[serde(default = "default_train_ratio")]
    pub train_ratio: f64,

    /// Longest side after resizing, before padding
    #[serde(default = "default_largest_dimension")]
    pub largest_dimension: u32,

    /// Side of the padded square output
    #[serde(default = "default_desired_size")]
    pub desired_size: u32,

    /// Raw image file suffix, e.g. `ISIC_0000000.jpg`
    #[serde(default = "default_img_suffix")]
    pub img_suffix: String,

    /// Mask file suffix, used for both input and output masks
    #[serde(default = "default_mask_suffix")]
    pub mask_suffix: String,

    /// Extension of the written five-channel tensors
    #[serde(default = "default_image_ext")]
    pub image_ext: String,

    /// Ids that must end up in the test split
    #[serde(default = "default_must_be_in_test")]
    pub must_be_in_test: Vec<SampleId>,

    /// Files in `img_dir` that are not samples
    #[serde(default = "default_excluded_files")]
    pub excluded_files: Vec<String>,

    /// Seed for the train/test permutation
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Gaussian channel spread
    #[serde(default = "default_fwhm")]
    pub fwhm: f64,

    /// Write flipped copies of every training sample
    #[serde(default = "default_augment")]
    pub augment: bool,
}

fn default_img_dir() -> PathBuf {
    PathBuf::from("./ISIC2018_Task1-2_Training_Input/")
}

fn default_mask_dir() -> PathBuf {
    PathBuf::from("./ISIC2018_Task1_Training_GroundTruth/")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./ISIC2018_data/")
}

fn default_train_ratio() -> f64 {
    0.8
}

fn default_largest_dimension() -> u32 {
    250
}

fn default_desired_size() -> u32 {
    320
}

fn default_img_suffix() -> String {
    ".jpg".to_string()
}

fn default_mask_suffix() -> String {
    "_segmentation.png".to_string()
}

fn default_image_ext() -> String {
    "npy".to_string()
}

fn default_must_be_in_test() -> Vec<SampleId> {
    DEFAULT_MUST_BE_IN_TEST
        .iter()
        .map(|id| SampleId::new(*id))
        .collect()
}

fn default_excluded_files() -> Vec<String> {
    vec!["LICENSE.txt".to_string(), "ATTRIBUTION.txt".to_string()]
}

fn default_seed() -> u64 {
    42
}

fn default_fwhm() -> f64 {
    125.0
}

fn default_augment() -> bool {
    true
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            img_dir: default_img_dir(),
            mask_dir: default_mask_dir(),
            output_dir: default_output_dir(),
            train_ratio: default_train_ratio(),
            largest_dimension: default_largest_dimension(),
            desired_size: default_desired_size(),
            img_suffix: default_img_suffix(),
            mask_suffix: default_mask_suffix(),
            image_ext: default_image_ext(),
            must_be_in_test: default_must_be_in_test(),
            excluded_files: default_excluded_files(),
            seed: default_seed(),
            fwhm: default_fwhm(),
            augment: default_augment(),
        }
    }
}

impl BuildConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            img_dir = %config.img_dir.display(),
            output_dir = %config.output_dir.display(),
            "Loaded build configuration"
        );
        Ok(config)
    }

    /// Options for the per-image transform
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions::new()
            .largest_dimension(self.largest_dimension)
            .desired_size(self.desired_size)
            .fwhm(self.fwhm)
    }

    /// Reject configurations that cannot produce a consistent dataset
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.train_ratio) {
            return Err(ConfigError::Invalid(format!(
                "train_ratio must be within [0, 1], got {}",
                self.train_ratio
            )));
        }
        for (name, value) in [
            ("img_suffix", &self.img_suffix),
            ("mask_suffix", &self.mask_suffix),
            ("image_ext", &self.image_ext),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Invalid(format!("{} must not be empty", name)));
            }
        }
        if self.mask_suffix == format!(".{}", self.image_ext) {
            return Err(ConfigError::Invalid(format!(
                "mask_suffix {} collides with image extension",
                self.mask_suffix
            )));
        }
        self.transform_options().validate()?;
        Ok(())
    }
}
