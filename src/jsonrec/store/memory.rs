use super::{encode, RecordStore};
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contents: Option<Vec<u8>>,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose backing "file" already holds `bytes`.
    pub fn with_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Some(bytes.into()),
            writes: 0,
        }
    }

    pub fn with_records(records: &[Record]) -> Result<Self> {
        Ok(Self::with_bytes(encode(records)?))
    }

    /// Current stored bytes, or `None` if nothing has created the store yet.
    pub fn contents(&self) -> Option<&[u8]> {
        self.contents.as_deref()
    }

    /// Number of successful `persist` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl RecordStore for InMemoryStore {
    fn read_raw(&mut self) -> Result<Vec<u8>> {
        Ok(self.contents.get_or_insert_with(Vec::new).clone())
    }

    fn persist(&mut self, records: &[Record]) -> Result<()> {
        self.contents = Some(encode(records)?);
        self.writes += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn sample_records() -> Vec<Record> {
        vec![
            Record::new("1", "a@b.com", 30),
            Record::new("2", "c@d.com", 41),
            Record::new("3", "e@f.com", 19),
        ]
    }

    pub fn sample_store() -> InMemoryStore {
        InMemoryStore::with_records(&sample_records()).expect("sample records encode")
    }
}
