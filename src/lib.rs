pub mod cli;
pub mod config;
pub mod data;
pub mod gallery;
pub mod images;
pub mod store;
pub mod util;

pub use config::Config;
pub use data::{AppStateStore, Collection, Database, Record};
pub use gallery::{FilePicker, Gallery, GalleryError, ImagePicker, LinePrompt, TextPrompt};
pub use images::ImageLibrary;
pub use store::{MemorySlot, RecordStore, Slot, StoreError};
