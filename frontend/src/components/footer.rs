use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const COLUMNS: &[(&str, &[(Route, &str)])] = &[
    (
        "Product",
        &[
            (Route::Enterprise, "Enterprise"),
            (Route::Security, "Security"),
            (Route::DemoRequest, "Request a demo"),
        ],
    ),
    (
        "Learn",
        &[
            (Route::Academy, "Academy"),
            (Route::KnowledgeBase, "Knowledge base"),
            (Route::Whitepapers, "Whitepapers"),
            (Route::Events, "Events"),
        ],
    ),
    (
        "Company",
        &[
            (Route::Community, "Community"),
            (Route::Affiliate, "Affiliate program"),
            (Route::Contact, "Contact"),
        ],
    ),
    (
        "Legal",
        &[(Route::Cookies, "Cookie settings"), (Route::Security, "Responsible disclosure")],
    ),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-columns">
                { for COLUMNS.iter().map(|(heading, links)| html! {
                    <div>
                        <h4>{*heading}</h4>
                        { for links.iter().map(|(route, label)| html! {
                            <Link<Route> to={*route}>{*label}</Link<Route>>
                        }) }
                    </div>
                }) }
            </div>
        </footer>
    }
}
