pub mod catalog;
pub mod dataset_builder;
pub mod splitter;
pub mod store;

pub use catalog::{DirectoryCatalog, InMemoryCatalog, SampleCatalog};
pub use dataset_builder::{BuildSummary, DatasetBuilder};
pub use splitter::DatasetSplitter;
pub use store::{DirectoryStore, InMemoryStore, SampleStore, PARTITION_FILE};
