use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::warn;
use web_sys::{window, Storage};

use crate::error::StorageError;
use crate::preferences::model::CookiePreferences;

/// Where cookie preferences live between visits.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceRepository {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<CookiePreferences>, StorageError>;

    fn save(&self, preferences: &CookiePreferences) -> Result<(), StorageError>;
}

impl<R: PreferenceRepository + ?Sized> PreferenceRepository for Box<R> {
    fn load(&self) -> Result<Option<CookiePreferences>, StorageError> {
        (**self).load()
    }

    fn save(&self, preferences: &CookiePreferences) -> Result<(), StorageError> {
        (**self).save(preferences)
    }
}

/// `localStorage` when the browser allows it, otherwise an in-memory map
/// that lasts until the page is closed.
pub fn browser_repository(key: &str) -> Box<dyn PreferenceRepository> {
    let local = LocalStorageRepository::new(key);
    if local.storage().is_ok() {
        Box::new(local)
    } else {
        warn!("Local storage unavailable, cookie preferences will not persist");
        Box::new(MemoryRepository::new(key))
    }
}

fn decode(raw: &str) -> Result<CookiePreferences, StorageError> {
    serde_json::from_str::<CookiePreferences>(raw)
        .map(CookiePreferences::normalized)
        .map_err(|e| StorageError::Corrupt(e.to_string()))
}

fn encode(preferences: &CookiePreferences) -> Result<String, StorageError> {
    serde_json::to_string(preferences).map_err(|e| StorageError::Write(e.to_string()))
}

/// Browser `localStorage` under a single key.
pub struct LocalStorageRepository {
    key: String,
}

impl LocalStorageRepository {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceRepository for LocalStorageRepository {
    fn load(&self) -> Result<Option<CookiePreferences>, StorageError> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))?;
        raw.as_deref().map(decode).transpose()
    }

    fn save(&self, preferences: &CookiePreferences) -> Result<(), StorageError> {
        let raw = encode(preferences)?;
        self.storage()?
            .set_item(&self.key, &raw)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}

/// Keeps serialized records in memory, keyed like `localStorage`.
/// Clones share the same backing map.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    key: String,
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryRepository {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            entries: Rc::default(),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.entries.borrow().get(&self.key).cloned()
    }

    pub fn put_raw(&self, raw: &str) {
        self.entries
            .borrow_mut()
            .insert(self.key.clone(), raw.to_string());
    }
}

impl PreferenceRepository for MemoryRepository {
    fn load(&self) -> Result<Option<CookiePreferences>, StorageError> {
        self.raw().as_deref().map(decode).transpose()
    }

    fn save(&self, preferences: &CookiePreferences) -> Result<(), StorageError> {
        let raw = encode(preferences)?;
        self.put_raw(&raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_repository_loads_nothing() {
        let repo = MemoryRepository::new("cookie-preferences");
        assert_eq!(repo.load(), Ok(None));
    }

    #[test]
    fn test_save_then_load() {
        let repo = MemoryRepository::new("cookie-preferences");
        let prefs = CookiePreferences {
            marketing: true,
            analytics: false,
            ..CookiePreferences::default()
        };
        repo.save(&prefs).unwrap();
        assert_eq!(repo.load(), Ok(Some(prefs)));
    }

    #[test]
    fn test_stored_json_has_expected_fields() {
        let repo = MemoryRepository::new("cookie-preferences");
        repo.save(&CookiePreferences::essential_only()).unwrap();
        let stored: serde_json::Value = serde_json::from_str(&repo.raw().unwrap()).unwrap();
        assert_eq!(
            stored,
            serde_json::json!({
                "essential": true,
                "functional": false,
                "analytics": false,
                "personalization": false,
                "marketing": false
            })
        );
    }

    #[test]
    fn test_garbage_is_reported_as_corrupt() {
        let repo = MemoryRepository::new("cookie-preferences");
        repo.put_raw("{not json");
        assert!(matches!(repo.load(), Err(StorageError::Corrupt(_))));

        repo.put_raw(r#"{"essential":true}"#);
        assert!(matches!(repo.load(), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_clones_share_entries() {
        let repo = MemoryRepository::new("k");
        let other = repo.clone();
        repo.save(&CookiePreferences::all_enabled()).unwrap();
        assert_eq!(other.load(), Ok(Some(CookiePreferences::all_enabled())));
    }
}
