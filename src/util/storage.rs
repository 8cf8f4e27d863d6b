//! Key-value persistence for the session store.
//!
//! `BrowserStorage` talks to `window.localStorage`; every access is
//! best-effort and the non-browser build behaves as an always-empty store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Minimal string store abstraction over `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a description of the failure when the write is rejected
    /// (quota exceeded, storage disabled).
    fn set(&self, key: &str, value: &str) -> Result<(), String>;

    fn remove(&self, key: &str);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("storage: localStorage unavailable: {e:?}");
            None
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            match local_storage()?.get_item(key) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("storage: read of {key} failed: {e:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("storage: no browser storage for {key}");
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or_else(|| "localStorage unavailable".to_owned())?;
            storage.set_item(key, value).map_err(|e| format!("{e:?}"))
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("storage: dropping write of {} bytes to {key}", value.len());
            Err("localStorage unavailable".to_owned())
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.remove_item(key) {
                    log::warn!("storage: remove of {key} failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("storage: no browser storage to remove {key} from");
        }
    }
}

/// In-memory store used by native tests.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryStorage {
    entries: std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
    reject_writes: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub(crate) fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    pub(crate) fn rejecting_writes(mut self) -> Self {
        self.reject_writes = true;
        self
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        if self.reject_writes {
            return Err("quota exceeded".to_owned());
        }
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
