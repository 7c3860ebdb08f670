use std::collections::BTreeMap;

use super::Storage;
use crate::error::Result;

/// In-memory storage, used by tests and throwaway agencies.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys currently stored, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.files.get(key).cloned())
    }

    fn save(&mut self, key: &str, contents: &[u8]) -> Result<()> {
        self.files.insert(key.to_string(), contents.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.files.remove(key);
        Ok(())
    }
}
