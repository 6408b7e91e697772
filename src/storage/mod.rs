use crate::error::Result;

pub mod file;
pub mod memory;

pub use file::JsonFilePreferences;
pub use memory::MemoryPreferences;

/// Read side of the shared key-value store the host app writes into.
pub trait PreferenceReader: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
}

pub trait PreferenceWriter: PreferenceReader {
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
