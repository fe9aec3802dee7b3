use super::error::DictionaryError;
use memmap2::Mmap;
use std::fs::File;
use std::ops::Deref;
use std::path::Path;

/// Raw bytes of a dictionary file.
///
/// Non-empty files are memory-mapped; zero-length files are not mapped at
/// all since there is nothing to scan.
pub enum DictionarySource {
    Mapped(Mmap),
    Empty,
}

impl DictionarySource {
    pub fn open(path: &Path) -> Result<Self, DictionaryError> {
        let file = File::open(path).map_err(|e| DictionaryError::io(path, e))?;
        let len = file
            .metadata()
            .map_err(|e| DictionaryError::io(path, e))?
            .len();

        if len == 0 {
            return Ok(DictionarySource::Empty);
        }

        // SAFETY: the map is read-only and lives no longer than the load.
        // Concurrent truncation of the file by another process is not
        // guarded against, same as any mmap reader.
        let mmap = unsafe { Mmap::map(&file) }.map_err(|e| DictionaryError::io(path, e))?;
        Ok(DictionarySource::Mapped(mmap))
    }
}

impl Deref for DictionarySource {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            DictionarySource::Mapped(mmap) => &mmap[..],
            DictionarySource::Empty => &[],
        }
    }
}
