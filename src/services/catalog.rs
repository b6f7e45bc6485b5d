use image::{GrayImage, RgbImage};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::BuildError;
use crate::models::{BuildConfig, SampleId};

/// Source of raw samples
pub trait SampleCatalog {
    /// Every sample id, in a stable order
    fn list_ids(&self) -> Result<Vec<SampleId>, BuildError>;

    /// Decoded RGB image for `id`
    fn load_image(&self, id: &SampleId) -> Result<RgbImage, BuildError>;

    /// Decoded lesion mask for `id`
    fn load_mask(&self, id: &SampleId) -> Result<GrayImage, BuildError>;
}

/// Catalog backed by an image directory and a mask directory
///
/// Ids are file names in `img_dir` with `img_suffix` stripped. The mask of
/// `id` is `mask_dir/{id}{mask_suffix}`.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    img_dir: PathBuf,
    mask_dir: PathBuf,
    img_suffix: String,
    mask_suffix: String,
    excluded_files: Vec<String>,
}

impl DirectoryCatalog {
    pub fn new(
        img_dir: impl Into<PathBuf>,
        mask_dir: impl Into<PathBuf>,
        img_suffix: impl Into<String>,
        mask_suffix: impl Into<String>,
    ) -> Self {
        Self {
            img_dir: img_dir.into(),
            mask_dir: mask_dir.into(),
            img_suffix: img_suffix.into(),
            mask_suffix: mask_suffix.into(),
            excluded_files: Vec::new(),
        }
    }

    pub fn from_config(config: &BuildConfig) -> Self {
        Self::new(
            &config.img_dir,
            &config.mask_dir,
            &config.img_suffix,
            &config.mask_suffix,
        )
        .with_excluded_files(config.excluded_files.clone())
    }

    /// File names in `img_dir` that are never treated as samples
    pub fn with_excluded_files(mut self, names: Vec<String>) -> Self {
        self.excluded_files = names;
        self
    }

    pub fn image_path(&self, id: &SampleId) -> PathBuf {
        self.img_dir.join(format!("{}{}", id, self.img_suffix))
    }

    pub fn mask_path(&self, id: &SampleId) -> PathBuf {
        self.mask_dir.join(format!("{}{}", id, self.mask_suffix))
    }
}

fn decode(id: &SampleId, path: &Path) -> Result<image::DynamicImage, BuildError> {
    if !path.is_file() {
        return Err(BuildError::MissingFile {
            id: id.clone(),
            path: path.to_path_buf(),
        });
    }
    image::open(path).map_err(|source| BuildError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

impl SampleCatalog for DirectoryCatalog {
    fn list_ids(&self) -> Result<Vec<SampleId>, BuildError> {
        let read_dir_error = |source| BuildError::ReadDir {
            path: self.img_dir.clone(),
            source,
        };

        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.img_dir).map_err(read_dir_error)? {
            let entry = entry.map_err(read_dir_error)?;
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                tracing::warn!(name = ?file_name, "Skipping non UTF-8 file name");
                continue;
            };

            if self.excluded_files.iter().any(|excluded| excluded == name) {
                tracing::debug!(name, "Skipping excluded file");
                continue;
            }

            match name.strip_suffix(self.img_suffix.as_str()) {
                Some(stem) if !stem.is_empty() => ids.push(SampleId::new(stem)),
                _ => {
                    tracing::warn!(
                        name,
                        suffix = %self.img_suffix,
                        "Skipping file without image suffix"
                    );
                }
            }
        }

        ids.sort();
        tracing::info!(
            count = ids.len(),
            dir = %self.img_dir.display(),
            "Enumerated samples"
        );
        Ok(ids)
    }

    fn load_image(&self, id: &SampleId) -> Result<RgbImage, BuildError> {
        Ok(decode(id, &self.image_path(id))?.to_rgb8())
    }

    fn load_mask(&self, id: &SampleId) -> Result<GrayImage, BuildError> {
        Ok(decode(id, &self.mask_path(id))?.to_luma8())
    }
}

/// In-memory catalog for tests and synthetic data
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    samples: BTreeMap<SampleId, (RgbImage, Option<GrayImage>)>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a labeled sample
    pub fn insert(&mut self, id: SampleId, image: RgbImage, mask: GrayImage) {
        self.samples.insert(id, (image, Some(mask)));
    }

    /// Add a sample that has no mask
    pub fn insert_unlabeled(&mut self, id: SampleId, image: RgbImage) {
        self.samples.insert(id, (image, None));
    }

    pub fn with_sample(mut self, id: impl Into<SampleId>, image: RgbImage, mask: GrayImage) -> Self {
        self.insert(id.into(), image, mask);
        self
    }

    fn missing(id: &SampleId) -> BuildError {
        BuildError::MissingFile {
            id: id.clone(),
            path: PathBuf::from(id.as_str()),
        }
    }
}

impl SampleCatalog for InMemoryCatalog {
    fn list_ids(&self) -> Result<Vec<SampleId>, BuildError> {
        Ok(self.samples.keys().cloned().collect())
    }

    fn load_image(&self, id: &SampleId) -> Result<RgbImage, BuildError> {
        self.samples
            .get(id)
            .map(|(image, _)| image.clone())
            .ok_or_else(|| Self::missing(id))
    }

    fn load_mask(&self, id: &SampleId) -> Result<GrayImage, BuildError> {
        self.samples
            .get(id)
            .and_then(|(_, mask)| mask.clone())
            .ok_or_else(|| Self::missing(id))
    }
}
