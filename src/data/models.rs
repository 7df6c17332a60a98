//! Data models for named pictures

use serde::{Deserialize, Serialize};

/// Name given to a picture until someone renames it
pub const DEFAULT_DISPLAY_NAME: &str = "Unknown";

/// One named reference to an imported image.
///
/// The record never holds image bytes, only the filename the image library
/// wrote them under. That filename is fixed for the life of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Label shown under the picture
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "image")]
    image_reference: String,
}

impl Record {
    pub fn new(display_name: impl Into<String>, image_reference: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            image_reference: image_reference.into(),
        }
    }

    /// Create a record for a freshly imported image with the placeholder name
    pub fn unnamed(image_reference: impl Into<String>) -> Self {
        Self::new(DEFAULT_DISPLAY_NAME, image_reference)
    }

    /// Filename of the image inside the image library
    pub fn image_reference(&self) -> &str {
        &self.image_reference
    }

    pub fn rename(&mut self, display_name: impl Into<String>) {
        self.display_name = display_name.into();
    }
}

/// Every record in insertion order. Persisted as a single unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    records: Vec<Record>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end; the collection only grows.
    pub fn push(&mut self, record: Record) -> &Record {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Record> {
        self.records.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }
}

impl From<Vec<Record>> for Collection {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for Collection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
