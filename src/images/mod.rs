//! Imported picture storage

mod library;

pub use library::{ImageError, ImageLibrary, DEFAULT_JPEG_QUALITY};
