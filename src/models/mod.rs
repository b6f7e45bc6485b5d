pub mod config;
pub mod partition;
pub mod sample;

pub use config::{BuildConfig, DEFAULT_MUST_BE_IN_TEST};
pub use partition::Partition;
pub use sample::{SampleId, Split};
