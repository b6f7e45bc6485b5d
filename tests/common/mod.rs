//! Common test infrastructure for derm-dataset integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod assertions;
pub mod fixtures;

pub use assertions::*;
pub use fixtures::DatasetFixture;

/// Install a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "derm_dataset=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer().without_time())
        .try_init();
}
