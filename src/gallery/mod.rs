//! Gallery controller: turns user actions into record store operations.

mod capabilities;
mod controller;

pub use capabilities::{FilePicker, ImagePicker, LinePrompt, TextPrompt};
pub use controller::{Gallery, GalleryError, RENAME_TITLE};
