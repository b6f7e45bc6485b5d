use serde::{Deserialize, Serialize};

use super::sample::{SampleId, Split};

/// Train/test assignment of every sample id.
///
/// The two lists are disjoint and together hold every enumerated id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    pub train: Vec<SampleId>,
    pub test: Vec<SampleId>,
}

impl Partition {
    /// Ids assigned to `split`
    pub fn ids(&self, split: Split) -> &[SampleId] {
        match split {
            Split::Train => &self.train,
            Split::Test => &self.test,
        }
    }

    /// Total number of ids across both splits
    pub fn len(&self) -> usize {
        self.train.len() + self.test.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Which split holds `id`, if any
    pub fn split_of(&self, id: &SampleId) -> Option<Split> {
        if self.train.contains(id) {
            Some(Split::Train)
        } else if self.test.contains(id) {
            Some(Split::Test)
        } else {
            None
        }
    }
}
