//! Storage layer for bounded stacks.

mod slot_storage;

pub use slot_storage::SlotStorage;
