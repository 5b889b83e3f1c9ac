use yew::prelude::*;
use yew_router::prelude::*;

use crate::preferences::context::use_cookie_preferences;
use crate::preferences::store::PreferenceOp;
use crate::Route;

/// Asks for consent until the visitor has made a choice once.
#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let prefs = use_cookie_preferences();
    let route = use_route::<Route>();

    let Some(prefs) = prefs else {
        return html! {};
    };

    if prefs.decided || route == Some(Route::Cookies) {
        return html! {};
    }

    let accept = {
        let prefs = prefs.clone();
        Callback::from(move |_: MouseEvent| prefs.apply(PreferenceOp::AcceptAll))
    };
    let reject = {
        let prefs = prefs.clone();
        Callback::from(move |_: MouseEvent| prefs.apply(PreferenceOp::RejectAll))
    };

    html! {
        <div class="cookie-banner" role="dialog" aria-label="Cookie consent">
            <style>
                {r#"
                .cookie-banner {
                    position: fixed;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    width: min(720px, calc(100% - 2rem));
                    background: rgba(30, 30, 30, 0.95);
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 16px;
                    padding: 1.5rem;
                    color: #ddd;
                    z-index: 100;
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
                }
                .cookie-banner-actions {
                    display: flex;
                    gap: 0.75rem;
                    flex-wrap: wrap;
                    margin-top: 1rem;
                }
                "#}
            </style>
            <p>
                {"We use cookies to keep the site working and, with your permission, to understand how it is used. "}
                <Link<Route> to={Route::Cookies}>{"Read the cookie policy"}</Link<Route>>
            </p>
            if let Some(err) = &prefs.last_error {
                <p class="error-message">{format!("Your choice could not be saved: {}", err)}</p>
            }
            <div class="cookie-banner-actions">
                <button class="primary-button" onclick={accept}>{"Accept all"}</button>
                <button class="secondary-button" onclick={reject}>{"Essential only"}</button>
                <Link<Route> to={Route::Cookies} classes="text-link">{"Manage preferences"}</Link<Route>>
            </div>
        </div>
    }
}
