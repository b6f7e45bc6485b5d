use derm_transform::{Augmentation, ProcessedSample, UnetPreprocessor};

use super::catalog::{DirectoryCatalog, SampleCatalog};
use super::splitter::DatasetSplitter;
use super::store::{DirectoryStore, SampleStore};
use crate::error::{BuildError, ConfigError};
use crate::models::{BuildConfig, Partition, SampleId, Split};

/// Outcome of a completed build
#[derive(Debug, Clone, PartialEq)]
pub struct BuildSummary {
    pub partition: Partition,
    /// Image and mask files written across both splits
    pub files_written: usize,
}

impl BuildSummary {
    pub fn train_count(&self) -> usize {
        self.partition.train.len()
    }

    pub fn test_count(&self) -> usize {
        self.partition.test.len()
    }
}

/// Orchestrates enumerate, split, transform and persist
///
/// The Gaussian channel is computed once when the builder is created and
/// shared by every sample of the run. Any error aborts the build; outputs
/// already written are left in place and overwritten by the next run.
///
/// The split directories are never cleared. Files from an earlier run with a
/// different seed, ratio or `must_be_in_test` stay in `train/` and `test/`,
/// so a test id of this run may still have stale copies in `train/`. Point
/// `output_dir` at an empty directory, or use `partition.json`, which always
/// describes the latest run, to select files.
pub struct DatasetBuilder<C, S> {
    config: BuildConfig,
    catalog: C,
    store: S,
    preprocessor: UnetPreprocessor,
    splitter: DatasetSplitter,
}

impl DatasetBuilder<DirectoryCatalog, DirectoryStore> {
    /// Builder reading from and writing to the directories in `config`
    pub fn from_config(config: BuildConfig) -> Result<Self, BuildError> {
        let catalog = DirectoryCatalog::from_config(&config);
        let store = DirectoryStore::from_config(&config);
        Self::new(config, catalog, store)
    }
}

impl<C: SampleCatalog, S: SampleStore> DatasetBuilder<C, S> {
    pub fn new(config: BuildConfig, catalog: C, store: S) -> Result<Self, BuildError> {
        config.validate()?;
        let preprocessor =
            UnetPreprocessor::new(config.transform_options()).map_err(ConfigError::from)?;
        let splitter = DatasetSplitter::new(config.train_ratio, config.seed)?;
        Ok(Self {
            config,
            catalog,
            store,
            preprocessor,
            splitter,
        })
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn preprocessor(&self) -> &UnetPreprocessor {
        &self.preprocessor
    }

    /// Enumerate the catalog and split it
    pub fn partition(&self) -> Result<Partition, BuildError> {
        let ids = self.catalog.list_ids()?;
        Ok(self.splitter.split(&ids, &self.config.must_be_in_test)?)
    }

    /// Load and transform one labeled sample
    pub fn process(&self, id: &SampleId) -> Result<ProcessedSample, BuildError> {
        let image = self.catalog.load_image(id)?;
        let mask = self.catalog.load_mask(id)?;
        self.preprocessor
            .transform(&image, &mask)
            .map_err(|source| BuildError::Transform {
                id: id.clone(),
                source,
            })
    }

    /// Run the whole pipeline
    ///
    /// Training ids get the original plus (with `augment`) the `hflip_`,
    /// `vflip_` and `rot_` copies; test ids get the original only.
    pub fn build(&mut self) -> Result<BuildSummary, BuildError> {
        self.store.prepare()?;
        let partition = self.partition()?;
        tracing::info!(
            train = partition.train.len(),
            test = partition.test.len(),
            seed = self.config.seed,
            "Split dataset"
        );

        let augmentations: &[Augmentation] = if self.config.augment {
            &Augmentation::ALL
        } else {
            &[Augmentation::Identity]
        };

        let mut files_written = 0;
        for id in &partition.train {
            let sample = self.process(id)?;
            for &augmentation in augmentations {
                let name = format!("{}{}", augmentation.prefix(), id);
                if augmentation == Augmentation::Identity {
                    self.store.write_sample(Split::Train, &name, &sample)?;
                } else {
                    let augmented = sample.augment(augmentation);
                    self.store.write_sample(Split::Train, &name, &augmented)?;
                }
                files_written += 2;
            }
            tracing::debug!(id = %id, copies = augmentations.len(), "Processed training sample");
        }

        for id in &partition.test {
            let sample = self.process(id)?;
            self.store
                .write_sample(Split::Test, id.as_str(), &sample)?;
            files_written += 2;
            tracing::debug!(id = %id, "Processed test sample");
        }

        self.store.write_partition(&partition)?;

        tracing::info!(
            train = partition.train.len(),
            test = partition.test.len(),
            files = files_written,
            "Dataset build complete"
        );
        Ok(BuildSummary {
            partition,
            files_written,
        })
    }
}
