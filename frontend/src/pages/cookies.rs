use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::hero::PageHero;
use crate::icons::{Icon, IconView};
use crate::preferences::context::use_cookie_preferences;
use crate::preferences::model::CookieCategory;
use crate::preferences::store::PreferenceOp;

struct CookieRow {
    name: &'static str,
    provider: &'static str,
    category: CookieCategory,
    lifetime: &'static str,
}

const COOKIE_TABLE: &[CookieRow] = &[
    CookieRow { name: "session_id", provider: "northwind.io", category: CookieCategory::Essential, lifetime: "Session" },
    CookieRow { name: "csrf_token", provider: "northwind.io", category: CookieCategory::Essential, lifetime: "Session" },
    CookieRow { name: "locale", provider: "northwind.io", category: CookieCategory::Functional, lifetime: "1 year" },
    CookieRow { name: "_stats", provider: "northwind.io", category: CookieCategory::Analytics, lifetime: "13 months" },
    CookieRow { name: "recently_viewed", provider: "northwind.io", category: CookieCategory::Personalization, lifetime: "30 days" },
    CookieRow { name: "_campaign", provider: "ads partner", category: CookieCategory::Marketing, lifetime: "90 days" },
];

#[function_component(CookiePolicy)]
pub fn cookie_policy() -> Html {
    let prefs = use_cookie_preferences();
    let notice = use_state(|| None::<&'static str>);

    let Some(prefs) = prefs else {
        return html! {};
    };

    let run = {
        let prefs = prefs.clone();
        let notice = notice.clone();
        move |op: PreferenceOp, message: &'static str| {
            let prefs = prefs.clone();
            let notice = notice.clone();
            Callback::from(move |_: MouseEvent| {
                prefs.apply(op);
                notice.set(Some(message));
            })
        }
    };

    let status = match (&prefs.last_error, *notice) {
        (Some(err), _) => html! {
            <p class="error-message">{format!("Your preferences could not be saved: {}", err)}</p>
        },
        (None, Some(message)) => html! { <p class="success-message">{message}</p> },
        (None, None) => html! {},
    };

    html! {
        <div class="cookies-page">
            <PageHero
                title="Cookie policy"
                subtitle="What we store in your browser, why, and how to change your mind at any time."
            />
            <section class="page-section">
                <div class="card">
                    <IconView icon={Icon::Cookie} />
                    <h3>{"What cookies are"}</h3>
                    <p>
                        {"Cookies are small text files a site stores in your browser. Some are needed for the site to work at all; \
                          others help us understand usage or tailor what you see. You decide which of the optional ones we may use."}
                    </p>
                </div>
            </section>

            <section class="page-section">
                <h2>{"Your preferences"}</h2>
                { for CookieCategory::ALL.iter().map(|category| {
                    let category = *category;
                    let enabled = prefs.preferences.get(category);
                    let onchange = {
                        let prefs = prefs.clone();
                        let notice = notice.clone();
                        Callback::from(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            prefs.apply(PreferenceOp::Set(category, input.checked()));
                            notice.set(None);
                        })
                    };
                    html! {
                        <div class="preference-row card" key={category.key()}>
                            <div>
                                <h3>{category.title()}</h3>
                                <p>{category.description()}</p>
                            </div>
                            <label class="switch">
                                <input
                                    type="checkbox"
                                    checked={enabled}
                                    disabled={category.is_locked()}
                                    {onchange}
                                />
                                <span class="slider"></span>
                            </label>
                        </div>
                    }
                }) }
                {status}
                <div class="preference-actions">
                    <button class="primary-button" onclick={run(PreferenceOp::AcceptAll, "All cookies accepted.")}>
                        {"Accept all"}
                    </button>
                    <button class="secondary-button" onclick={run(PreferenceOp::RejectAll, "Only essential cookies will be used.")}>
                        {"Reject all"}
                    </button>
                    <button class="secondary-button" onclick={run(PreferenceOp::Save, "Your preferences have been saved.")}>
                        {"Save preferences"}
                    </button>
                </div>
            </section>

            <section class="page-section">
                <h2>{"Cookies we use"}</h2>
                <table class="cookie-table">
                    <thead>
                        <tr>
                            <th>{"Name"}</th>
                            <th>{"Provider"}</th>
                            <th>{"Category"}</th>
                            <th>{"Lifetime"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for COOKIE_TABLE.iter().map(|row| html! {
                            <tr>
                                <td><code>{row.name}</code></td>
                                <td>{row.provider}</td>
                                <td>{row.category.key()}</td>
                                <td>{row.lifetime}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </section>

            <style>
                {r#"
                .preference-row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1.5rem;
                    margin-bottom: 1rem;
                }
                .switch input {
                    width: 44px;
                    height: 24px;
                }
                .preference-actions {
                    display: flex;
                    gap: 0.75rem;
                    flex-wrap: wrap;
                    margin-top: 1.5rem;
                }
                .cookie-table {
                    width: 100%;
                    border-collapse: collapse;
                    color: #ccc;
                }
                .cookie-table th, .cookie-table td {
                    text-align: left;
                    padding: 0.6rem;
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                }
                "#}
            </style>
        </div>
    }
}
