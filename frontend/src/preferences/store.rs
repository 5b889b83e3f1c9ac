use log::{info, warn};

use crate::error::StorageError;
use crate::preferences::model::{CookieCategory, CookiePreferences};
use crate::preferences::repository::PreferenceRepository;

/// A user action on the preference set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreferenceOp {
    Set(CookieCategory, bool),
    AcceptAll,
    RejectAll,
    Save,
}

/// In-memory cookie preferences backed by a repository.
pub struct PreferenceStore<R> {
    repository: R,
    current: CookiePreferences,
    decided: bool,
}

impl<R: PreferenceRepository> PreferenceStore<R> {
    /// Reads back what was stored last time, falling back to defaults when
    /// there is nothing usable.
    pub fn open(repository: R) -> Self {
        let (current, decided) = match repository.load() {
            Ok(Some(stored)) => (stored, true),
            Ok(None) => (CookiePreferences::default(), false),
            Err(err) => {
                warn!("Ignoring stored cookie preferences: {}", err);
                (CookiePreferences::default(), false)
            }
        };
        Self {
            repository,
            current,
            decided,
        }
    }

    pub fn preferences(&self) -> CookiePreferences {
        self.current
    }

    /// Whether the visitor has saved a choice at some point.
    pub fn has_decision(&self) -> bool {
        self.decided
    }

    pub fn set_category(&mut self, category: CookieCategory, enabled: bool) {
        if category.is_locked() {
            return;
        }
        self.current.set(category, enabled);
    }

    pub fn accept_all(&mut self) -> Result<(), StorageError> {
        self.current = CookiePreferences::all_enabled();
        self.save()
    }

    pub fn reject_all(&mut self) -> Result<(), StorageError> {
        self.current = CookiePreferences::essential_only();
        self.save()
    }

    pub fn save(&mut self) -> Result<(), StorageError> {
        self.repository.save(&self.current)?;
        self.decided = true;
        info!("Saved cookie preferences");
        Ok(())
    }

    pub fn apply(&mut self, op: PreferenceOp) -> Result<(), StorageError> {
        match op {
            PreferenceOp::Set(category, enabled) => {
                self.set_category(category, enabled);
                Ok(())
            }
            PreferenceOp::AcceptAll => self.accept_all(),
            PreferenceOp::RejectAll => self.reject_all(),
            PreferenceOp::Save => self.save(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::repository::{MemoryRepository, MockPreferenceRepository};

    const KEY: &str = "cookie-preferences";

    #[test]
    fn test_fresh_store_uses_defaults() {
        let store = PreferenceStore::open(MemoryRepository::new(KEY));
        assert_eq!(store.preferences(), CookiePreferences::default());
        assert!(!store.has_decision());
    }

    #[test]
    fn test_accept_all_enables_everything() {
        let repo = MemoryRepository::new(KEY);
        let mut store = PreferenceStore::open(repo.clone());
        store.accept_all().unwrap();

        for category in CookieCategory::ALL {
            assert!(store.preferences().get(category));
        }
        assert_eq!(repo.load(), Ok(Some(CookiePreferences::all_enabled())));
        assert!(store.has_decision());
    }

    #[test]
    fn test_reject_all_keeps_only_essential() {
        let repo = MemoryRepository::new(KEY);
        let mut store = PreferenceStore::open(repo.clone());
        assert_eq!(store.preferences(), CookiePreferences::default());

        store.reject_all().unwrap();

        let expected = CookiePreferences {
            essential: true,
            functional: false,
            analytics: false,
            personalization: false,
            marketing: false,
        };
        assert_eq!(store.preferences(), expected);
        assert_eq!(repo.load(), Ok(Some(expected)));
    }

    #[test]
    fn test_essential_toggle_is_ignored() {
        let mut store = PreferenceStore::open(MemoryRepository::new(KEY));
        store.set_category(CookieCategory::Essential, false);
        assert!(store.preferences().essential);
    }

    #[test]
    fn test_set_category_does_not_persist_until_save() {
        let repo = MemoryRepository::new(KEY);
        let mut store = PreferenceStore::open(repo.clone());
        store.set_category(CookieCategory::Marketing, true);

        assert!(store.preferences().marketing);
        assert_eq!(repo.load(), Ok(None));

        store.save().unwrap();
        assert_eq!(repo.load(), Ok(Some(store.preferences())));
    }

    #[test]
    fn test_saved_preferences_are_read_back() {
        let repo = MemoryRepository::new(KEY);
        let mut store = PreferenceStore::open(repo.clone());
        store.set_category(CookieCategory::Analytics, false);
        store.set_category(CookieCategory::Marketing, true);
        store.save().unwrap();
        let saved = store.preferences();

        let reopened = PreferenceStore::open(repo);
        assert_eq!(reopened.preferences(), saved);
        assert!(reopened.has_decision());
    }

    #[test]
    fn test_apply_dispatches_ops() {
        let repo = MemoryRepository::new(KEY);
        let mut store = PreferenceStore::open(repo.clone());

        store.apply(PreferenceOp::Set(CookieCategory::Functional, false)).unwrap();
        assert_eq!(repo.load(), Ok(None));
        store.apply(PreferenceOp::Save).unwrap();
        assert_eq!(repo.load().unwrap().map(|p| p.functional), Some(false));

        store.apply(PreferenceOp::AcceptAll).unwrap();
        assert_eq!(repo.load(), Ok(Some(CookiePreferences::all_enabled())));
        store.apply(PreferenceOp::RejectAll).unwrap();
        assert_eq!(repo.load(), Ok(Some(CookiePreferences::essential_only())));
    }

    #[test]
    fn test_corrupt_storage_falls_back_to_defaults() {
        let repo = MemoryRepository::new(KEY);
        repo.put_raw("[]");
        let store = PreferenceStore::open(repo);
        assert_eq!(store.preferences(), CookiePreferences::default());
        assert!(!store.has_decision());
    }

    #[test]
    fn test_write_failure_is_returned() {
        let mut repo = MockPreferenceRepository::new();
        repo.expect_load().returning(|| Ok(None));
        repo.expect_save()
            .times(1)
            .returning(|_| Err(StorageError::Write("QuotaExceededError".into())));

        let mut store = PreferenceStore::open(repo);
        let result = store.accept_all();

        assert_eq!(result, Err(StorageError::Write("QuotaExceededError".into())));
        assert!(store.preferences().marketing);
        assert!(!store.has_decision());
    }

    #[test]
    fn test_unavailable_storage_on_open() {
        let mut repo = MockPreferenceRepository::new();
        repo.expect_load().returning(|| Err(StorageError::Unavailable));
        let store = PreferenceStore::open(repo);
        assert_eq!(store.preferences(), CookiePreferences::default());
    }
}
