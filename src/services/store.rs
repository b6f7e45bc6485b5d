use derm_transform::ProcessedSample;
use ndarray_npy::WriteNpyExt;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::BuildError;
use crate::models::{BuildConfig, Partition, Split};

/// Name of the partition manifest written next to `train/` and `test/`
pub const PARTITION_FILE: &str = "partition.json";

/// Destination for processed samples
pub trait SampleStore {
    /// Create the split directories. Calling it again is a no-op.
    fn prepare(&mut self) -> Result<(), BuildError>;

    /// Persist one image/mask pair under `name` (augmentation prefix + id)
    fn write_sample(
        &mut self,
        split: Split,
        name: &str,
        sample: &ProcessedSample,
    ) -> Result<(), BuildError>;

    /// Persist the train/test assignment
    fn write_partition(&mut self, partition: &Partition) -> Result<(), BuildError>;
}

/// Store writing `.npy` tensors and PNG masks under `root/{train,test}`
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
    image_ext: String,
    mask_suffix: String,
}

impl DirectoryStore {
    pub fn new(
        root: impl Into<PathBuf>,
        image_ext: impl Into<String>,
        mask_suffix: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            image_ext: image_ext.into(),
            mask_suffix: mask_suffix.into(),
        }
    }

    pub fn from_config(config: &BuildConfig) -> Self {
        Self::new(&config.output_dir, &config.image_ext, &config.mask_suffix)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn split_dir(&self, split: Split) -> PathBuf {
        self.root.join(split.dir_name())
    }

    /// `{name}.{image_ext}`
    pub fn image_file_name(&self, name: &str) -> String {
        format!("{}.{}", name, self.image_ext)
    }

    /// `{name}{mask_suffix}`
    pub fn mask_file_name(&self, name: &str) -> String {
        format!("{}{}", name, self.mask_suffix)
    }
}

/// Hidden sibling used while a file is being written
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

fn write_error(path: &Path) -> impl Fn(std::io::Error) -> BuildError + '_ {
    move |source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    }
}

fn write_tensor(path: &Path, sample: &ProcessedSample) -> Result<(), BuildError> {
    let file = File::create(path).map_err(write_error(path))?;
    let mut writer = BufWriter::new(file);
    sample
        .image()
        .write_npy(&mut writer)
        .map_err(|e| BuildError::Encode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    writer.flush().map_err(write_error(path))
}

fn encode_mask(path: &Path, sample: &ProcessedSample) -> Result<Vec<u8>, BuildError> {
    let mask = sample.mask();
    let encode_error = |e: png::EncodingError| BuildError::Encode {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, mask.width(), mask.height());
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().map_err(encode_error)?;
        writer.write_image_data(mask.as_raw()).map_err(encode_error)?;
    }
    Ok(buf)
}

fn rename_into_place(from: &Path, to: &Path) -> Result<(), BuildError> {
    std::fs::rename(from, to).map_err(write_error(to))
}

/// Best-effort removal after a failed write
fn discard(paths: &[&Path]) {
    for path in paths {
        match std::fs::remove_file(path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to remove partial output");
            }
        }
    }
}

impl SampleStore for DirectoryStore {
    fn prepare(&mut self) -> Result<(), BuildError> {
        for split in [Split::Train, Split::Test] {
            let dir = self.split_dir(split);
            std::fs::create_dir_all(&dir).map_err(|source| BuildError::DirectoryCreation {
                path: dir.clone(),
                source,
            })?;
        }
        tracing::debug!(root = %self.root.display(), "Output directories ready");
        Ok(())
    }

    fn write_sample(
        &mut self,
        split: Split,
        name: &str,
        sample: &ProcessedSample,
    ) -> Result<(), BuildError> {
        let dir = self.split_dir(split);
        let image_path = dir.join(self.image_file_name(name));
        let mask_path = dir.join(self.mask_file_name(name));
        let image_tmp = temp_path(&image_path);
        let mask_tmp = temp_path(&mask_path);

        let png_bytes = encode_mask(&mask_path, sample)?;
        let staged = write_tensor(&image_tmp, sample).and_then(|()| {
            std::fs::write(&mask_tmp, &png_bytes).map_err(write_error(&mask_tmp))
        });
        if let Err(e) = staged {
            discard(&[image_tmp.as_path(), mask_tmp.as_path()]);
            return Err(e);
        }

        // Neither file may stay visible without the other
        if let Err(e) = rename_into_place(&image_tmp, &image_path) {
            discard(&[image_tmp.as_path(), mask_tmp.as_path()]);
            return Err(e);
        }
        if let Err(e) = rename_into_place(&mask_tmp, &mask_path) {
            discard(&[mask_tmp.as_path(), image_path.as_path()]);
            return Err(e);
        }

        tracing::debug!(
            split = %split,
            image = %image_path.display(),
            mask = %mask_path.display(),
            "Wrote sample"
        );
        Ok(())
    }

    fn write_partition(&mut self, partition: &Partition) -> Result<(), BuildError> {
        let path = self.root.join(PARTITION_FILE);
        let json = serde_json::to_vec_pretty(partition).map_err(|e| BuildError::Encode {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, json).map_err(write_error(&path))?;
        tracing::info!(
            path = %path.display(),
            train = partition.train.len(),
            test = partition.test.len(),
            "Wrote partition manifest"
        );
        Ok(())
    }
}

/// Store keeping everything in memory, for tests
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    prepared: usize,
    samples: BTreeMap<Split, BTreeMap<String, ProcessedSample>>,
    partition: Option<Partition>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `prepare` was called
    pub fn prepare_calls(&self) -> usize {
        self.prepared
    }

    /// Sample names written to `split`, sorted
    pub fn names(&self, split: Split) -> Vec<String> {
        self.samples
            .get(&split)
            .map(|m| m.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn get(&self, split: Split, name: &str) -> Option<&ProcessedSample> {
        self.samples.get(&split).and_then(|m| m.get(name))
    }

    pub fn partition(&self) -> Option<&Partition> {
        self.partition.as_ref()
    }
}

impl SampleStore for InMemoryStore {
    fn prepare(&mut self) -> Result<(), BuildError> {
        self.prepared += 1;
        Ok(())
    }

    fn write_sample(
        &mut self,
        split: Split,
        name: &str,
        sample: &ProcessedSample,
    ) -> Result<(), BuildError> {
        self.samples
            .entry(split)
            .or_default()
            .insert(name.to_string(), sample.clone());
        Ok(())
    }

    fn write_partition(&mut self, partition: &Partition) -> Result<(), BuildError> {
        self.partition = Some(partition.clone());
        Ok(())
    }
}
