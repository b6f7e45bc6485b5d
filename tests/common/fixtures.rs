//! Test fixtures: a scratch ISIC-style layout on disk.

use derm_dataset::models::BuildConfig;
use image::{GrayImage, Luma, Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const IMG_SUFFIX: &str = ".jpg";
pub const MASK_SUFFIX: &str = "_segmentation.png";

/// Temporary input/output directories laid out like the ISIC 2018 release
pub struct DatasetFixture {
    dir: TempDir,
}

impl DatasetFixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir(dir.path().join("images")).expect("Failed to create image dir");
        std::fs::create_dir(dir.path().join("masks")).expect("Failed to create mask dir");
        Self { dir }
    }

    pub fn img_dir(&self) -> PathBuf {
        self.dir.path().join("images")
    }

    pub fn mask_dir(&self) -> PathBuf {
        self.dir.path().join("masks")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    /// Write `{id}.jpg` and `{id}_segmentation.png` of the given size
    pub fn add_sample(&self, id: &str, width: u32, height: u32) -> &Self {
        self.add_image(id, width, height);
        lesion_mask(width, height)
            .save(self.mask_dir().join(format!("{}{}", id, MASK_SUFFIX)))
            .expect("Failed to write mask");
        self
    }

    /// Write only the image, leaving the mask missing
    pub fn add_image(&self, id: &str, width: u32, height: u32) -> &Self {
        skin_image(width, height)
            .save(self.img_dir().join(format!("{}{}", id, IMG_SUFFIX)))
            .expect("Failed to write image");
        self
    }

    /// Drop an arbitrary file into the image directory
    pub fn add_image_dir_file(&self, name: &str) -> &Self {
        std::fs::write(self.img_dir().join(name), b"not an image").expect("Failed to write file");
        self
    }

    /// Default configuration pointed at the fixture directories
    pub fn config(&self) -> BuildConfig {
        BuildConfig {
            img_dir: self.img_dir(),
            mask_dir: self.mask_dir(),
            output_dir: self.output_dir(),
            must_be_in_test: Vec::new(),
            ..Default::default()
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Brownish radial blob on lighter skin
pub fn skin_image(width: u32, height: u32) -> RgbImage {
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let radius = width.min(height) as f32 / 3.0;
    RgbImage::from_fn(width, height, |x, y| {
        let d = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
        if d < radius {
            Rgb([120, 70, 50])
        } else {
            Rgb([220, 170, 150])
        }
    })
}

/// Binary mask matching [`skin_image`]
pub fn lesion_mask(width: u32, height: u32) -> GrayImage {
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let radius = width.min(height) as f32 / 3.0;
    GrayImage::from_fn(width, height, |x, y| {
        let d = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
        Luma([if d < radius { 255 } else { 0 }])
    })
}
