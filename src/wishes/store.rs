//! Storage backends for the persisted wish record
//!
//! `WishStore` mirrors the browser Storage API: string values under string
//! keys. The board only ever reads and overwrites one key.

use std::collections::HashMap;

use super::error::WishResult;

/// Key/value storage holding the serialized wish list
pub trait WishStore {
    /// Read the record stored under `key`, `None` if absent
    fn get_item(&self, key: &str) -> WishResult<Option<String>>;

    /// Overwrite the record stored under `key`
    fn set_item(&mut self, key: &str, value: &str) -> WishResult<()>;
}

/// In-memory store, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: seed a record
    pub fn with_item(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.insert(key.into(), value.into());
        self
    }
}

impl WishStore for MemoryStore {
    fn get_item(&self, key: &str) -> WishResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> WishResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: WishStore + ?Sized> WishStore for Box<S> {
    fn get_item(&self, key: &str) -> WishResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> WishResult<()> {
        (**self).set_item(key, value)
    }
}

#[cfg(feature = "native")]
pub use file::FileStore;

#[cfg(feature = "native")]
mod file {
    use std::fs;
    use std::io::{ErrorKind, Write};
    use std::path::{Path, PathBuf};

    use super::WishStore;
    use crate::wishes::error::WishResult;

    /// Directory-backed store: one `<key>.json` file per key
    ///
    /// Writes go to a temporary file that is renamed over the record, so a
    /// crash mid-write leaves the previous record intact.
    #[derive(Debug, Clone)]
    pub struct FileStore {
        dir: PathBuf,
    }

    impl FileStore {
        /// Open (creating if needed) a store rooted at `dir`
        pub fn open(dir: impl AsRef<Path>) -> WishResult<Self> {
            let dir = dir.as_ref().to_path_buf();
            fs::create_dir_all(&dir)?;
            Ok(Self { dir })
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        fn path_for(&self, key: &str) -> PathBuf {
            let file_name: String = key
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
                .collect();
            self.dir.join(format!("{}.json", file_name))
        }
    }

    impl WishStore for FileStore {
        fn get_item(&self, key: &str) -> WishResult<Option<String>> {
            match fs::read_to_string(self.path_for(key)) {
                Ok(content) => Ok(Some(content)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        fn set_item(&mut self, key: &str, value: &str) -> WishResult<()> {
            let path = self.path_for(key);
            let tmp_path = path.with_extension("json.tmp");

            {
                let mut file = fs::File::create(&tmp_path)?;
                file.write_all(value.as_bytes())?;
                file.sync_all()?;
            }
            fs::rename(&tmp_path, &path)?;

            tracing::debug!(path = ?path, bytes = value.len(), "Wrote wish record");
            Ok(())
        }
    }
}
