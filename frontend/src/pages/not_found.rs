use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hero::PageHero;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <PageHero title="Page not found" subtitle="The page you were looking for has moved or never existed.">
                <p>
                    <Link<Route> to={Route::Home} classes="text-link">{"Back to the front page"}</Link<Route>>
                </p>
            </PageHero>
        </div>
    }
}
