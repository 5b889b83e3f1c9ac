use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CookieCategory {
    Essential,
    Functional,
    Analytics,
    Personalization,
    Marketing,
}

impl CookieCategory {
    pub const ALL: [CookieCategory; 5] = [
        CookieCategory::Essential,
        CookieCategory::Functional,
        CookieCategory::Analytics,
        CookieCategory::Personalization,
        CookieCategory::Marketing,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CookieCategory::Essential => "essential",
            CookieCategory::Functional => "functional",
            CookieCategory::Analytics => "analytics",
            CookieCategory::Personalization => "personalization",
            CookieCategory::Marketing => "marketing",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CookieCategory::Essential => "Essential cookies",
            CookieCategory::Functional => "Functional cookies",
            CookieCategory::Analytics => "Analytics cookies",
            CookieCategory::Personalization => "Personalization cookies",
            CookieCategory::Marketing => "Marketing cookies",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CookieCategory::Essential => {
                "Required for signing in, keeping your session secure and remembering this choice. They cannot be switched off."
            }
            CookieCategory::Functional => {
                "Remember settings such as language and region so pages behave the way you left them."
            }
            CookieCategory::Analytics => {
                "Aggregate, anonymous statistics about which pages are visited so we can improve the site."
            }
            CookieCategory::Personalization => {
                "Tailor recommended articles, courses and events to what you have looked at before."
            }
            CookieCategory::Marketing => {
                "Measure our campaigns on other sites and show you relevant offers there."
            }
        }
    }

    pub fn is_locked(self) -> bool {
        self == CookieCategory::Essential
    }
}

/// Consent per cookie category, stored as a flat JSON object of five booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookiePreferences {
    pub essential: bool,
    pub functional: bool,
    pub analytics: bool,
    pub personalization: bool,
    pub marketing: bool,
}

impl Default for CookiePreferences {
    fn default() -> Self {
        Self {
            essential: true,
            functional: true,
            analytics: true,
            personalization: true,
            marketing: false,
        }
    }
}

impl CookiePreferences {
    pub fn all_enabled() -> Self {
        Self {
            essential: true,
            functional: true,
            analytics: true,
            personalization: true,
            marketing: true,
        }
    }

    pub fn essential_only() -> Self {
        Self {
            essential: true,
            functional: false,
            analytics: false,
            personalization: false,
            marketing: false,
        }
    }

    pub fn get(&self, category: CookieCategory) -> bool {
        match category {
            CookieCategory::Essential => self.essential,
            CookieCategory::Functional => self.functional,
            CookieCategory::Analytics => self.analytics,
            CookieCategory::Personalization => self.personalization,
            CookieCategory::Marketing => self.marketing,
        }
    }

    /// Essential cookies stay on whatever is asked.
    pub fn set(&mut self, category: CookieCategory, enabled: bool) {
        match category {
            CookieCategory::Essential => {}
            CookieCategory::Functional => self.functional = enabled,
            CookieCategory::Analytics => self.analytics = enabled,
            CookieCategory::Personalization => self.personalization = enabled,
            CookieCategory::Marketing => self.marketing = enabled,
        }
    }

    /// Repairs a record read from storage.
    pub fn normalized(mut self) -> Self {
        self.essential = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_policy_page() {
        let prefs = CookiePreferences::default();
        assert!(prefs.essential);
        assert!(prefs.functional);
        assert!(prefs.analytics);
        assert!(prefs.personalization);
        assert!(!prefs.marketing);
    }

    #[test]
    fn test_essential_cannot_be_disabled() {
        let mut prefs = CookiePreferences::default();
        prefs.set(CookieCategory::Essential, false);
        assert!(prefs.get(CookieCategory::Essential));
        assert_eq!(prefs, CookiePreferences::default());
    }

    #[test]
    fn test_set_touches_only_one_category() {
        let mut prefs = CookiePreferences::essential_only();
        prefs.set(CookieCategory::Analytics, true);
        for category in CookieCategory::ALL {
            let expected = matches!(category, CookieCategory::Essential | CookieCategory::Analytics);
            assert_eq!(prefs.get(category), expected, "{}", category.key());
        }
    }

    #[test]
    fn test_serialized_shape_is_five_booleans() {
        let json = serde_json::to_value(CookiePreferences::default()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 5);
        for category in CookieCategory::ALL {
            assert!(object[category.key()].is_boolean());
        }
    }

    #[test]
    fn test_normalized_forces_essential() {
        let stored: CookiePreferences = serde_json::from_str(
            r#"{"essential":false,"functional":false,"analytics":true,"personalization":false,"marketing":true}"#,
        )
        .unwrap();
        let prefs = stored.normalized();
        assert!(prefs.essential);
        assert!(prefs.analytics);
        assert!(prefs.marketing);
    }
}
