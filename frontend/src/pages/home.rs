use yew::prelude::*;
use yew_router::prelude::*;

use crate::icons::{Icon, IconView};
use crate::{navigate, Route};

struct Tile {
    icon: Icon,
    title: &'static str,
    text: &'static str,
    page_id: &'static str,
}

const TILES: &[Tile] = &[
    Tile { icon: Icon::Briefcase, title: "Enterprise", text: "SSO, audit logs and a 99.95% SLA for large organisations.", page_id: "enterprise" },
    Tile { icon: Icon::GraduationCap, title: "Academy", text: "Free courses from first login to platform admin.", page_id: "academy" },
    Tile { icon: Icon::Book, title: "Knowledge base", text: "Step-by-step answers to the most common questions.", page_id: "knowledge-base" },
    Tile { icon: Icon::Users, title: "Community", text: "Ask, share and learn with eighteen thousand other builders.", page_id: "community" },
    Tile { icon: Icon::Calendar, title: "Events", text: "Conferences, meetups and live webinars near you.", page_id: "events" },
    Tile { icon: Icon::Document, title: "Whitepapers", text: "Research and playbooks from our experts.", page_id: "whitepapers" },
    Tile { icon: Icon::Handshake, title: "Partners", text: "Earn recurring commission by recommending us.", page_id: "affiliate" },
    Tile { icon: Icon::Shield, title: "Security", text: "How we keep your data safe, and how to report issues.", page_id: "security" },
];

const STEPS: &[(&str, &str)] = &[
    ("Connect your tools", "Plug in the apps your team already uses in a few clicks, no code needed."),
    ("Describe the workflow", "Drag, drop and describe the steps. We take care of retries and scheduling."),
    ("Watch it run", "Every run is logged and measurable, so you always know what happened and why."),
];

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator();

    html! {
        <div class="landing-page">
            // Hero Section
            <section class="hero page-hero">
                <h1>{"Automate the busywork. Keep the judgement."}</h1>
                <p class="hero-subtitle">
                    {"Northwind connects your tools and runs the repetitive steps between them, so your team can focus on the work that needs a human."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::DemoRequest} classes="primary-button">
                        {"Book a demo"}
                    </Link<Route>>
                    <Link<Route> to={Route::Contact} classes="secondary-button">
                        {"Talk to us"}
                    </Link<Route>>
                </div>
            </section>

            // Explore Section
            <section class="page-section">
                <h2>{"Explore"}</h2>
                <div class="card-grid">
                    { for TILES.iter().map(|tile| {
                        let onclick = {
                            let navigator = navigator.clone();
                            let page_id = tile.page_id;
                            Callback::from(move |_: MouseEvent| {
                                if let Some(navigator) = &navigator {
                                    navigate(navigator, page_id);
                                }
                            })
                        };
                        html! {
                            <div class="card tile" {onclick} key={tile.page_id}>
                                <IconView icon={tile.icon} />
                                <h3>{tile.title}</h3>
                                <p>{tile.text}</p>
                            </div>
                        }
                    }) }
                </div>
            </section>

            // How It Works section
            <section class="page-section how-it-works">
                <h2>{"How it works"}</h2>
                <div class="steps-grid">
                    { for STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                        <div class="step">
                            <span class="step-number">{i + 1}</span>
                            <h3>{*title}</h3>
                            <p class="muted">{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="page-section footer-cta">
                <h2>{"Ready to give your team its afternoons back?"}</h2>
                <Link<Route> to={Route::DemoRequest} classes="primary-button">
                    {"Get started"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .hero-actions {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 2rem;
                }
                .tile {
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .tile:hover {
                    transform: translateY(-4px);
                }
                .steps-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }
                .step-number {
                    display: inline-flex;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    align-items: center;
                    justify-content: center;
                    background: #1E90FF;
                }
                .footer-cta {
                    text-align: center;
                    padding-bottom: 4rem;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tile_points_at_a_page() {
        for tile in TILES {
            assert!(Route::from_page_id(tile.page_id).is_some(), "{}", tile.page_id);
        }
    }
}
