use log::error;
use yew::prelude::*;

use crate::config;
use crate::error::StorageError;
use crate::preferences::model::CookiePreferences;
use crate::preferences::repository::browser_repository;
use crate::preferences::store::{PreferenceOp, PreferenceStore};

/// Snapshot of the site-wide cookie preferences plus a way to change them.
#[derive(Clone, PartialEq)]
pub struct PreferencesContext {
    pub preferences: CookiePreferences,
    pub decided: bool,
    pub last_error: Option<StorageError>,
    pub dispatch: Callback<PreferenceOp>,
}

impl PreferencesContext {
    pub fn apply(&self, op: PreferenceOp) {
        self.dispatch.emit(op);
    }
}

#[derive(Properties, PartialEq)]
pub struct PreferencesProviderProps {
    pub children: Children,
}

#[function_component(PreferencesProvider)]
pub fn preferences_provider(props: &PreferencesProviderProps) -> Html {
    let store = use_mut_ref(|| PreferenceStore::open(browser_repository(config::COOKIE_PREFERENCES_KEY)));
    let last_error = use_state(|| None::<StorageError>);
    let trigger = use_force_update();

    let dispatch = {
        let store = store.clone();
        let last_error = last_error.clone();
        Callback::from(move |op: PreferenceOp| {
            let result = store.borrow_mut().apply(op);
            if let Err(err) = &result {
                error!("Cookie preference update failed: {}", err);
            }
            last_error.set(result.err());
            trigger.force_update();
        })
    };

    let context = {
        let store = store.borrow();
        PreferencesContext {
            preferences: store.preferences(),
            decided: store.has_decision(),
            last_error: (*last_error).clone(),
            dispatch,
        }
    };

    html! {
        <ContextProvider<PreferencesContext> {context}>
            { for props.children.iter() }
        </ContextProvider<PreferencesContext>>
    }
}

#[hook]
pub fn use_cookie_preferences() -> Option<PreferencesContext> {
    use_context::<PreferencesContext>()
}
