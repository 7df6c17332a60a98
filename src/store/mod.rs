//! Record persistence through an injected key-value slot

mod record_store;
mod slot;

pub use record_store::{RecordStore, StoreError, DEFAULT_SLOT_KEY};
pub use slot::{MemorySlot, Slot, SlotError};
