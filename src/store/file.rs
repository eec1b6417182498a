use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::{KeyValueStore, StoreError, StoreResult};

/// One JSON document per key, stored as `<dir>/<key>.json`.
///
/// The directory is created lazily on the first write, so a read-only
/// session never touches the filesystem.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> StoreResult<PathBuf> {
        // Keys are fixed constants today; reject separators anyway so a key
        // can never escape the data directory.
        if key.is_empty() || key.chars().any(|c| matches!(c, '/' | '\\' | '.')) {
            return Err(StoreError::Unavailable(format!("invalid store key: {key}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => Err(StoreError::Unavailable(
                format!("{}: permission denied", path.display()),
            )),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, value)?;
        Ok(())
    }
}
