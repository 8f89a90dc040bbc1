//! Test fixtures: images built in memory and written into scratch directories.

use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Named colors used across tests
pub mod colors {
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const GREEN: [u8; 3] = [0, 255, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
}

/// Build an image from rows of pixels
pub fn image_from_rows(rows: &[&[[u8; 3]]]) -> RgbImage {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    RgbImage::from_fn(width, height, |x, y| Rgb(rows[y as usize][x as usize]))
}

/// The canonical 2x2 image: red, red / green, blue
pub fn two_by_two() -> RgbImage {
    use colors::*;
    image_from_rows(&[&[RED, RED], &[GREEN, BLUE]])
}

/// A solid-color image
pub fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb(color))
}

/// Scratch input/output directories for a batch run
pub struct TestDir {
    root: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir(root.path().join("parts")).expect("create input dir");
        std::fs::create_dir(root.path().join("out")).expect("create output dir");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Directory the batch reads from (basename `parts`)
    pub fn input(&self) -> PathBuf {
        self.root.path().join("parts")
    }

    /// Directory the output folder is created in
    pub fn output(&self) -> PathBuf {
        self.root.path().join("out")
    }

    /// Expected output folder for a batch over `input()`
    pub fn output_folder(&self) -> PathBuf {
        self.output().join("parts_colour_analysis")
    }

    /// Save `img` as PNG under the input directory
    pub fn add_png(&self, name: &str, img: &RgbImage) -> PathBuf {
        let path = self.input().join(name);
        img.save_with_format(&path, image::ImageFormat::Png)
            .expect("write png fixture");
        path
    }

    /// Write a non-image file under the input directory
    pub fn add_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.input().join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    /// Write a config file at the root and return its path
    pub fn add_config(&self, yaml: &str) -> PathBuf {
        let path = self.root.path().join("config.yaml");
        std::fs::write(&path, yaml).expect("write config");
        path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
