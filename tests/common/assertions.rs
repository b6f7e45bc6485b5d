//! Assertion helpers for tests.

use derm_dataset::models::{Partition, SampleId};
use ndarray::Array3;
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::path::Path;

/// Sorted file names in `dir`
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("Failed to list {}: {}", dir.display(), e))
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Assert the tensor at `path` has shape `(size, size, 5)` and returns it
pub fn assert_npy_tensor(path: &Path, size: usize) -> Array3<f32> {
    let tensor: Array3<f32> = ndarray_npy::read_npy(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    assert_eq!(tensor.dim(), (size, size, 5), "shape of {}", path.display());
    assert!(
        tensor.iter().all(|v| (0.0..=1.0).contains(v)),
        "values of {} outside [0, 1]",
        path.display()
    );
    tensor
}

/// Assert the mask at `path` is a `size` x `size` greyscale PNG
pub fn assert_mask_png(path: &Path, size: u32) {
    let mask = image::open(path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {}", path.display(), e));
    assert_eq!(mask.color(), image::ColorType::L8, "color of {}", path.display());
    assert_eq!((mask.width(), mask.height()), (size, size));
}

/// Assert the partition is disjoint and covers exactly `ids`
pub fn assert_partition_covers(partition: &Partition, ids: &[SampleId]) {
    let train: HashSet<_> = partition.train.iter().collect();
    let test: HashSet<_> = partition.test.iter().collect();
    assert!(train.is_disjoint(&test), "train and test overlap");
    assert_eq!(partition.len(), ids.len());

    let mut all: Vec<_> = partition.train.iter().chain(&partition.test).cloned().collect();
    all.sort();
    let mut expected = ids.to_vec();
    expected.sort();
    assert_eq!(all, expected);
}
