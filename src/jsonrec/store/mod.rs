//! # Storage Layer
//!
//! The whole collection lives in one backing file holding a JSON array of
//! [`Record`]s. The [`RecordStore`] trait is the only way commands touch it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage bound to a single file path
//!   - a missing file is created empty on first read
//!   - writes truncate and rewrite the file in place, keeping symlinks and mode
//!
//! - [`memory::InMemoryStore`]: byte buffer for testing
//!   - no persistence
//!   - counts writes so tests can assert a command left storage untouched
//!
//! ## Storage Format
//!
//! ```text
//! [{"id":"1","email":"a@b.com","age":30},{"id":"2","email":"c@d.com","age":41}]
//! ```
//!
//! An empty file is an empty collection. Anything else must parse as an
//! array of records or the load fails.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Whole-collection access to a backing file.
pub trait RecordStore {
    /// Read the stored bytes exactly as they are, creating the store if absent.
    fn read_raw(&mut self) -> Result<Vec<u8>>;

    /// Replace the stored collection.
    fn persist(&mut self, records: &[Record]) -> Result<()>;

    /// Read and parse the stored collection.
    fn load(&mut self) -> Result<Vec<Record>> {
        let bytes = self.read_raw()?;
        decode(&bytes)
    }
}

pub fn decode(bytes: &[u8]) -> Result<Vec<Record>> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_slice(bytes)?)
}

pub fn encode(records: &[Record]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(records)?)
}
