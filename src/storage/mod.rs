pub mod json_backend;
pub mod memory;

use crate::errors::ExpenseError;

pub type Result<T> = std::result::Result<T, ExpenseError>;

/// Abstraction over persistence backends that hold serialized blobs by key.
///
/// The record store treats values as opaque strings; backends decide where
/// and how they live.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;
