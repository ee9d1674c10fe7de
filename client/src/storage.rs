//! Key-value backends the cart is persisted to.

use std::collections::HashMap;

use crate::error::StorageError;

/// Minimal string key-value store, shaped after the browser's `localStorage`.
pub trait CartStorage {
    /// `Ok(None)` when nothing has been stored under `key` yet.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local storage. Nothing survives the process, but the contents can
/// be handed to a new store to simulate a later session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl CartStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_family = "wasm"))]
pub use self::file::FileStorage;

#[cfg(not(target_family = "wasm"))]
mod file {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::CartStorage;
    use crate::error::StorageError;

    /// One JSON file per key inside a data directory.
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        dir: PathBuf,
    }

    impl FileStorage {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        /// `<platform data dir>/menu-storefront`, if the platform has one.
        pub fn default_dir() -> Option<PathBuf> {
            dirs::data_dir().map(|d| d.join("menu-storefront"))
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        /// `restaurant-cart/chez paul` → `restaurant-cart%2Fchez%20paul.json`.
        /// Every byte outside `[A-Za-z0-9_-]` is escaped, so distinct keys
        /// never share a file.
        fn path_for(&self, key: &str) -> PathBuf {
            let mut name = String::with_capacity(key.len());
            for b in key.bytes() {
                if b.is_ascii_alphanumeric() || b == b'-' || b == b'_' {
                    name.push(char::from(b));
                } else {
                    name.push('%');
                    name.push_str(&hex::encode_upper([b]));
                }
            }
            self.dir.join(format!("{name}.json"))
        }
    }

    impl CartStorage for FileStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            match fs::read_to_string(self.path_for(key)) {
                Ok(contents) => Ok(Some(contents)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            fs::create_dir_all(&self.dir)?;
            let path = self.path_for(key);
            // Readers never observe a half-written cart.
            let tmp = path.with_extension("json.tmp");
            fs::write(&tmp, value)?;
            fs::rename(&tmp, &path)?;
            Ok(())
        }
    }
}

#[cfg(target_family = "wasm")]
pub use self::web::LocalStorage;

#[cfg(target_family = "wasm")]
mod web {
    use super::CartStorage;
    use crate::error::StorageError;

    /// The browser's `window.localStorage`.
    pub struct LocalStorage {
        storage: web_sys::Storage,
    }

    impl LocalStorage {
        pub fn open() -> Result<Self, StorageError> {
            let window =
                web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
            let storage = window
                .local_storage()
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
                .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))?;
            Ok(Self { storage })
        }
    }

    impl CartStorage for LocalStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage
                .get_item(key)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            // Quota exhaustion surfaces here as a JS exception.
            self.storage
                .set_item(key, value)
                .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
        }
    }
}
