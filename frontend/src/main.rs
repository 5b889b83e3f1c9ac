use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn, Level};
use web_sys::MouseEvent;

mod config;
mod error;
mod filters;
mod icons;
mod styles;
mod forms {
    pub mod hook;
    pub mod schema;
    pub mod service;
    pub mod state;
}
mod preferences {
    pub mod context;
    pub mod model;
    pub mod repository;
    pub mod store;
}
mod components {
    pub mod cookie_banner;
    pub mod fields;
    pub mod footer;
    pub mod form_status;
    pub mod hero;
    pub mod tabs;
}
mod pages {
    pub mod academy;
    pub mod affiliate;
    pub mod community;
    pub mod contact;
    pub mod cookies;
    pub mod demo_request;
    pub mod enterprise;
    pub mod events;
    pub mod home;
    pub mod knowledge_base;
    pub mod not_found;
    pub mod security;
    pub mod whitepapers;
}

use components::{cookie_banner::CookieBanner, footer::Footer};
use forms::hook::SubmissionContext;
use pages::{
    academy::Academy,
    affiliate::Affiliate,
    community::Community,
    contact::Contact,
    cookies::CookiePolicy,
    demo_request::DemoRequest,
    enterprise::Enterprise,
    events::Events,
    home::Home,
    knowledge_base::KnowledgeBase,
    not_found::NotFound,
    security::Security,
    whitepapers::Whitepapers,
};
use preferences::context::PreferencesProvider;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[at("/demo-request")]
    DemoRequest,
    #[at("/affiliate")]
    Affiliate,
    #[at("/academy")]
    Academy,
    #[at("/knowledge-base")]
    KnowledgeBase,
    #[at("/community")]
    Community,
    #[at("/events")]
    Events,
    #[at("/whitepapers")]
    Whitepapers,
    #[at("/enterprise")]
    Enterprise,
    #[at("/security")]
    Security,
    #[at("/cookies")]
    Cookies,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Page identifiers used by links in the page content ("contact",
    /// "demo-request", ...).
    pub fn from_page_id(page_id: &str) -> Option<Route> {
        let route = match page_id.trim().trim_start_matches('/') {
            "" | "home" => Route::Home,
            "contact" => Route::Contact,
            "demo-request" => Route::DemoRequest,
            "affiliate" => Route::Affiliate,
            "academy" => Route::Academy,
            "knowledge-base" => Route::KnowledgeBase,
            "community" => Route::Community,
            "events" => Route::Events,
            "whitepapers" => Route::Whitepapers,
            "enterprise" => Route::Enterprise,
            "security" => Route::Security,
            "cookies" => Route::Cookies,
            _ => return None,
        };
        Some(route)
    }

    pub fn page_id(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Contact => "contact",
            Route::DemoRequest => "demo-request",
            Route::Affiliate => "affiliate",
            Route::Academy => "academy",
            Route::KnowledgeBase => "knowledge-base",
            Route::Community => "community",
            Route::Events => "events",
            Route::Whitepapers => "whitepapers",
            Route::Enterprise => "enterprise",
            Route::Security => "security",
            Route::Cookies => "cookies",
            Route::NotFound => "not-found",
        }
    }
}

/// Resolves a page identifier and moves there.
pub fn navigate(navigator: &Navigator, page_id: &str) {
    match Route::from_page_id(page_id) {
        Some(route) => navigator.push(&route),
        None => {
            warn!("Unknown page '{}', showing not found", page_id);
            navigator.push(&Route::NotFound);
        }
    }
}

fn switch(routes: Route) -> Html {
    info!("Rendering {} page", routes.page_id());
    match routes {
        Route::Home => html! { <Home /> },
        Route::Contact => html! { <Contact /> },
        Route::DemoRequest => html! { <DemoRequest /> },
        Route::Affiliate => html! { <Affiliate /> },
        Route::Academy => html! { <Academy /> },
        Route::KnowledgeBase => html! { <KnowledgeBase /> },
        Route::Community => html! { <Community /> },
        Route::Events => html! { <Events /> },
        Route::Whitepapers => html! { <Whitepapers /> },
        Route::Enterprise => html! { <Enterprise /> },
        Route::Security => html! { <Security /> },
        Route::Cookies => html! { <CookiePolicy /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

const NAV_LINKS: &[(Route, &str)] = &[
    (Route::Enterprise, "Enterprise"),
    (Route::Academy, "Academy"),
    (Route::KnowledgeBase, "Knowledge Base"),
    (Route::Community, "Community"),
    (Route::Events, "Events"),
    (Route::Affiliate, "Partners"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"northwind"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(route, label)| html! {
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={*route} classes="nav-link">
                                {*label}
                            </Link<Route>>
                        </div>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::DemoRequest} classes="nav-cta">
                            {"Book a demo"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let submissions = use_memo(|_| SubmissionContext(config::submission_service()), ());

    html! {
        <BrowserRouter>
            <ContextProvider<SubmissionContext> context={(*submissions).clone()}>
                <PreferencesProvider>
                    <style>{styles::BASE_CSS}</style>
                    <Nav />
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                    <CookieBanner />
                </PreferencesProvider>
            </ContextProvider<SubmissionContext>>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROUTES: [Route; 13] = [
        Route::Home,
        Route::Contact,
        Route::DemoRequest,
        Route::Affiliate,
        Route::Academy,
        Route::KnowledgeBase,
        Route::Community,
        Route::Events,
        Route::Whitepapers,
        Route::Enterprise,
        Route::Security,
        Route::Cookies,
        Route::NotFound,
    ];

    #[test]
    fn test_page_ids_round_trip() {
        for route in ALL_ROUTES.into_iter().filter(|r| *r != Route::NotFound) {
            assert_eq!(Route::from_page_id(route.page_id()), Some(route));
        }
    }

    #[test]
    fn test_page_ids_match_paths() {
        for route in ALL_ROUTES
            .into_iter()
            .filter(|r| !matches!(r, Route::Home | Route::NotFound))
        {
            assert_eq!(route.to_path(), format!("/{}", route.page_id()));
        }
    }

    #[test]
    fn test_from_page_id_accepts_paths_and_home_aliases() {
        assert_eq!(Route::from_page_id("/demo-request"), Some(Route::DemoRequest));
        assert_eq!(Route::from_page_id(""), Some(Route::Home));
        assert_eq!(Route::from_page_id("home"), Some(Route::Home));
    }

    #[test]
    fn test_unknown_page_id() {
        assert_eq!(Route::from_page_id("careers"), None);
        assert_eq!(Route::from_page_id("not-found"), None);
    }
}
