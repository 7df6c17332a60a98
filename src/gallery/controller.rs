use std::path::PathBuf;

use thiserror::Error;

use super::capabilities::{ImagePicker, TextPrompt};
use crate::config::Config;
use crate::data::{AppStateStore, Collection, Database, DatabaseError, Record};
use crate::images::{ImageError, ImageLibrary};
use crate::store::{RecordStore, Slot, StoreError};

/// Title shown when asking for a new name
pub const RENAME_TITLE: &str = "Rename person";

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("No picture at index {index} (gallery has {len})")]
    NoSuchRecord { index: usize, len: usize },
    #[error(transparent)]
    Image(#[from] ImageError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Database(#[from] DatabaseError),
    #[error("Image picker failed: {0}")]
    Picker(#[source] std::io::Error),
    #[error("Text prompt failed: {0}")]
    Prompt(#[source] std::io::Error),
}

/// The in-memory list of named pictures plus everything needed to keep it
/// saved. Every mutation is flushed to the store before returning.
pub struct Gallery<S> {
    store: RecordStore<S>,
    images: ImageLibrary,
    people: Collection,
    default_name: String,
}

impl Gallery<AppStateStore> {
    /// Open the gallery kept in the data directory.
    pub fn open_default(config: &Config) -> Result<Self, GalleryError> {
        let db = Database::open_default()?;
        let store = RecordStore::with_key(AppStateStore::new(db.connection()), &config.slot_key);
        let images = ImageLibrary::new(crate::util::images_dir(), config.jpeg_quality)?;
        Ok(Self::open(store, images, config))
    }
}

impl<S: Slot> Gallery<S> {
    /// Load the saved list once and wrap it.
    pub fn open(store: RecordStore<S>, images: ImageLibrary, config: &Config) -> Self {
        let people = store.load();
        tracing::info!(count = people.len(), key = %store.key(), "Gallery opened");
        Self {
            store,
            images,
            people,
            default_name: config.default_name.clone(),
        }
    }

    pub fn records(&self) -> &Collection {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.people.get(index)
    }

    pub fn images(&self) -> &ImageLibrary {
        &self.images
    }

    /// Ask the picker for a picture and add it. `Ok(None)` if the user cancelled.
    pub fn import(
        &mut self,
        picker: &mut impl ImagePicker,
    ) -> Result<Option<&Record>, GalleryError> {
        let Some(bytes) = picker.pick().map_err(GalleryError::Picker)? else {
            tracing::debug!("Import cancelled");
            return Ok(None);
        };
        self.import_bytes(&bytes).map(Some)
    }

    /// Copy a picked picture into the library and append a record for it.
    ///
    /// Nothing is appended if the picture cannot be stored. If saving fails
    /// afterwards the record stays in memory and the error is returned.
    pub fn import_bytes(&mut self, bytes: &[u8]) -> Result<&Record, GalleryError> {
        let reference = self.images.store(bytes)?;
        self.people
            .push(Record::new(self.default_name.clone(), reference));
        self.store.save(&self.people)?;

        let index = self.people.len() - 1;
        tracing::info!(index, "Picture added");
        Ok(&self.people.as_slice()[index])
    }

    /// Ask for a new name for the record at `index`. Returns whether it changed.
    pub fn rename(
        &mut self,
        index: usize,
        prompt: &mut impl TextPrompt,
    ) -> Result<bool, GalleryError> {
        let current = self.record_at(index)?.display_name.clone();
        let Some(name) = prompt
            .prompt(RENAME_TITLE, &current)
            .map_err(GalleryError::Prompt)?
        else {
            tracing::debug!(index, "Rename cancelled");
            return Ok(false);
        };
        self.rename_to(index, name)?;
        Ok(true)
    }

    /// Set the name of the record at `index` and save.
    pub fn rename_to(&mut self, index: usize, name: impl Into<String>) -> Result<(), GalleryError> {
        let len = self.people.len();
        let record = self
            .people
            .get_mut(index)
            .ok_or(GalleryError::NoSuchRecord { index, len })?;
        record.rename(name);
        tracing::info!(index, name = %record.display_name, "Picture renamed");

        self.store.save(&self.people)?;
        Ok(())
    }

    /// Where the picture for the record at `index` lives on disk
    pub fn image_path(&self, index: usize) -> Result<PathBuf, GalleryError> {
        let record = self.record_at(index)?;
        Ok(self.images.path_for(record.image_reference())?)
    }

    fn record_at(&self, index: usize) -> Result<&Record, GalleryError> {
        self.people.get(index).ok_or(GalleryError::NoSuchRecord {
            index,
            len: self.people.len(),
        })
    }
}
