use super::{encode, RecordStore};
use crate::error::{RecError, Result};
use crate::model::Record;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Storage bound to one user-named file.
///
/// Writes truncate and rewrite the file in place, so symlinks, permissions
/// and ownership of the backing file are kept.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for FileStore {
    fn read_raw(&mut self) -> Result<Vec<u8>> {
        let mut file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(false)
                    .open(&self.path)
                    .map_err(RecError::Io)?;
                tracing::debug!(path = %self.path.display(), "created empty store");
                return Ok(Vec::new());
            }
            Err(e) => return Err(RecError::Io(e)),
        };

        let mut buf = Vec::new();
        file.read_to_end(&mut buf).map_err(RecError::Io)?;
        tracing::debug!(path = %self.path.display(), bytes = buf.len(), "read store");
        Ok(buf)
    }

    fn persist(&mut self, records: &[Record]) -> Result<()> {
        let content = encode(records)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(RecError::Io)?;
        file.write_all(&content).map_err(RecError::Io)?;
        file.flush().map_err(RecError::Io)?;

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            bytes = content.len(),
            "persisted store"
        );
        Ok(())
    }
}
