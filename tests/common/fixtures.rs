//! Picture and gallery fixtures

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use picroll::{AppStateStore, Config, Database, Gallery, ImageLibrary, RecordStore};
use tempfile::TempDir;

/// Encode a small translucent PNG
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([30, 60, 90, 200]));
    let mut png = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .expect("Failed to encode PNG fixture");
    png
}

/// Write a PNG fixture into `dir` and return its path
pub fn write_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, png_bytes(8, 6)).expect("Failed to write PNG fixture");
    path
}

/// A data directory with its own database and image library
pub struct TestGallery {
    pub dir: TempDir,
}

impl TestGallery {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("picroll.db")
    }

    pub fn images_dir(&self) -> PathBuf {
        self.dir.path().join("images")
    }

    pub fn store(&self, config: &Config) -> RecordStore<AppStateStore> {
        let db = Database::open(self.db_path()).expect("Failed to open database");
        RecordStore::with_key(AppStateStore::new(db.connection()), &config.slot_key)
    }

    /// Open the gallery as a fresh launch would
    pub fn open(&self, config: &Config) -> Gallery<AppStateStore> {
        let images = ImageLibrary::new(self.images_dir(), config.jpeg_quality)
            .expect("Failed to open image library");
        Gallery::open(self.store(config), images, config)
    }
}
