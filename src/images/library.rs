//! On-disk store for imported pictures

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use thiserror::Error;
use uuid::Uuid;

/// JPEG quality used when none is configured
pub const DEFAULT_JPEG_QUALITY: u8 = 80;

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Could not decode picked image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("Could not encode image as JPEG: {0}")]
    Encode(#[source] image::ImageError),
    #[error("Image IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid image reference: {0:?}")]
    InvalidReference(String),
}

/// Application-private directory of imported pictures.
///
/// Every picture is re-encoded as JPEG and written exactly once under a new
/// random filename; that filename is what records keep as their reference.
#[derive(Debug, Clone)]
pub struct ImageLibrary {
    dir: PathBuf,
    quality: u8,
}

impl ImageLibrary {
    /// Open the library at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>, quality: u8) -> Result<Self, ImageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            quality: quality.clamp(1, 100),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Compress `bytes` and write them under a fresh filename.
    /// Returns the filename to store in a record.
    pub fn store(&self, bytes: &[u8]) -> Result<String, ImageError> {
        let picture = image::load_from_memory(bytes).map_err(ImageError::Decode)?;
        let jpeg = self.encode_jpeg(&picture)?;

        let reference = format!("{}.jpg", Uuid::new_v4());
        let path = self.dir.join(&reference);

        // create_new: a reference names one file, written once
        let mut file = OpenOptions::new().write(true).create_new(true).open(&path)?;
        file.write_all(&jpeg)?;
        file.sync_all()?;

        tracing::info!(
            reference = %reference,
            width = picture.width(),
            height = picture.height(),
            bytes = jpeg.len(),
            "Stored picture"
        );
        Ok(reference)
    }

    fn encode_jpeg(&self, picture: &DynamicImage) -> Result<Vec<u8>, ImageError> {
        let mut jpeg = Vec::new();
        let encoder = JpegEncoder::new_with_quality(&mut jpeg, self.quality);
        // JPEG has no alpha channel
        DynamicImage::ImageRgb8(picture.to_rgb8())
            .write_with_encoder(encoder)
            .map_err(ImageError::Encode)?;
        Ok(jpeg)
    }

    /// Resolve a record's reference to a path inside the library.
    pub fn path_for(&self, reference: &str) -> Result<PathBuf, ImageError> {
        let is_plain_name = !reference.is_empty()
            && Path::new(reference).file_name().and_then(|n| n.to_str()) == Some(reference);
        if !is_plain_name {
            return Err(ImageError::InvalidReference(reference.to_string()));
        }
        Ok(self.dir.join(reference))
    }

    pub fn exists(&self, reference: &str) -> bool {
        self.path_for(reference)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }
}
