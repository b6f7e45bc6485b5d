use std::path::PathBuf;

use derm_transform::TransformError;
use thiserror::Error;

use crate::models::SampleId;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Invalid transform options: {0}")]
    Transform(#[from] TransformError),
}

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("Train ratio must be within [0, 1], got {0}")]
    InvalidRatio(f64),

    #[error("{required} samples must be in the test set but it only holds {available}")]
    TestSetTooSmall { required: usize, available: usize },
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Missing file for sample {id}: {}", .path.display())]
    MissingFile { id: SampleId, path: PathBuf },

    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Transform failed for sample {id}: {source}")]
    Transform {
        id: SampleId,
        source: TransformError,
    },

    #[error("Failed to list {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode {}: {message}", .path.display())]
    Encode { path: PathBuf, message: String },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Split error: {0}")]
    Split(#[from] SplitError),
}
