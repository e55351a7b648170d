//! Single-record file backend.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;
use crate::traits::SnapshotStore;

/// Options for record writing.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Whether to fsync the record and its directory on save (default: false).
    pub sync: bool,
    /// Whether to create missing parent directories on save (default: true).
    pub create_dirs: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            sync: false,
            create_dirs: true,
        }
    }
}

/// Snapshot store backed by one file holding the raw record.
///
/// Saves go to a sibling `.tmp` file which is then renamed over the record,
/// so readers see either the old record or the new one, never a torn write.
///
/// # Example
///
/// ```rust
/// use ledgersnap_store::{FileStore, SnapshotStore, WriteOptions};
///
/// let dir = tempfile::tempdir()?;
/// let store = FileStore::new(dir.path().join("snapshot.info"), WriteOptions::default());
/// assert!(store.load()?.is_none());
///
/// store.save(&[0u8; 115])?;
/// assert_eq!(store.load()?.map(|b| b.len()), Some(115));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    options: WriteOptions,
}

impl FileStore {
    /// Creates a store for the record at `path`. Nothing is touched on disk
    /// until the first save.
    pub fn new<P: AsRef<Path>>(path: P, options: WriteOptions) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            options,
        }
    }

    /// Path of the record file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name: OsString = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_temp(&self, temp_path: &Path, bytes: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(temp_path)?;
        file.write_all(bytes)?;
        file.flush()?;
        if self.options.sync {
            file.sync_all()?;
        }
        Ok(())
    }

    fn sync_parent(&self) -> io::Result<()> {
        #[cfg(unix)]
        {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::File::open(parent)?.sync_all()?;
            }
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                debug!(path = %self.path.display(), len = bytes.len(), "Loaded snapshot record");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, bytes: &[u8]) -> Result<(), StoreError> {
        if self.options.create_dirs {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        let replaced = self
            .write_temp(&temp_path, bytes)
            .and_then(|()| fs::rename(&temp_path, &self.path));
        if let Err(e) = replaced {
            // The record itself is untouched; only the partial temp file goes.
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        if self.options.sync {
            self.sync_parent()?;
        }

        debug!(path = %self.path.display(), len = bytes.len(), "Saved snapshot record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_is_sibling() {
        let store = FileStore::new("/var/lib/node/snapshot.info", WriteOptions::default());
        assert_eq!(
            store.temp_path(),
            PathBuf::from("/var/lib/node/snapshot.info.tmp")
        );
    }

    #[test]
    fn default_options() {
        let options = WriteOptions::default();
        assert!(!options.sync);
        assert!(options.create_dirs);
    }
}
