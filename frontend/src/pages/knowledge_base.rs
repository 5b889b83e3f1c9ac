use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hero::PageHero;
use crate::components::tabs::Tabs;
use crate::filters::{category_tabs, matches_category, matches_query, ALL_CATEGORIES};
use crate::icons::{Icon, IconView};
use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Article {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub read_minutes: u32,
}

pub const ARTICLES: &[Article] = &[
    Article {
        title: "Inviting your team",
        excerpt: "Send invitations, assign roles and set a default workspace for new members.",
        category: "Getting started",
        read_minutes: 3,
    },
    Article {
        title: "Importing data from spreadsheets",
        excerpt: "Map columns, fix validation errors and schedule recurring imports.",
        category: "Getting started",
        read_minutes: 6,
    },
    Article {
        title: "Configuring single sign-on",
        excerpt: "Step-by-step SAML setup for Okta, Entra ID and Google Workspace.",
        category: "Security",
        read_minutes: 8,
    },
    Article {
        title: "Two-factor authentication",
        excerpt: "Require 2FA for everyone and recover access when a device is lost.",
        category: "Security",
        read_minutes: 4,
    },
    Article {
        title: "Understanding your invoice",
        excerpt: "Seats, usage add-ons and how proration works when you change plans.",
        category: "Billing",
        read_minutes: 5,
    },
    Article {
        title: "Updating payment details",
        excerpt: "Change the card on file or switch to invoiced billing.",
        category: "Billing",
        read_minutes: 2,
    },
    Article {
        title: "Webhook delivery and retries",
        excerpt: "Payload format, signature verification and the retry schedule.",
        category: "Integrations",
        read_minutes: 7,
    },
    Article {
        title: "Connecting your CRM",
        excerpt: "Two-way sync with the most common CRMs, including field mapping.",
        category: "Integrations",
        read_minutes: 6,
    },
];

pub fn search_articles(category: &str, query: &str) -> Vec<Article> {
    ARTICLES
        .iter()
        .filter(|a| matches_category(a.category, category))
        .filter(|a| matches_query(&[a.title, a.excerpt, a.category], query))
        .copied()
        .collect()
}

fn category_icon(category: &str) -> Icon {
    match category {
        "Getting started" => Icon::Rocket,
        "Security" => Icon::Lock,
        "Billing" => Icon::Money,
        "Integrations" => Icon::Code,
        _ => Icon::Document,
    }
}

#[function_component(KnowledgeBase)]
pub fn knowledge_base() -> Html {
    let category = use_state(|| AttrValue::Static(ALL_CATEGORIES));
    let query = use_state(String::new);

    let tabs: Vec<AttrValue> = category_tabs(ARTICLES.iter().map(|a| a.category))
        .into_iter()
        .map(AttrValue::Static)
        .collect();

    let on_select = {
        let category = category.clone();
        Callback::from(move |tab: AttrValue| category.set(tab))
    };
    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let results = search_articles(&category, &query);

    html! {
        <div class="kb-page">
            <PageHero title="Knowledge base" subtitle="Answers to the questions our support team hears most.">
                <input
                    class="search-input kb-search"
                    type="search"
                    placeholder="Search articles, e.g. \"sso\" or \"invoice\""
                    value={(*query).clone()}
                    oninput={on_search}
                />
            </PageHero>
            <section class="page-section">
                <Tabs tabs={tabs} active={(*category).clone()} {on_select} />
                <p class="muted">{format!("{} article(s)", results.len())}</p>
                <div class="article-list">
                    { for results.iter().map(|article| html! {
                        <article class="card article" key={article.title}>
                            <IconView icon={category_icon(article.category)} />
                            <div>
                                <h3>{article.title}</h3>
                                <p>{article.excerpt}</p>
                                <span class="muted">
                                    {format!("{} · {} min read", article.category, article.read_minutes)}
                                </span>
                            </div>
                        </article>
                    }) }
                </div>
                if results.is_empty() {
                    <div class="card">
                        <h3>{"Nothing found"}</h3>
                        <p>
                            {"Try fewer words, ask the "}
                            <Link<Route> to={Route::Community} classes="text-link">{"community"}</Link<Route>>
                            {", or "}
                            <Link<Route> to={Route::Contact} classes="text-link">{"contact support"}</Link<Route>>
                            {"."}
                        </p>
                    </div>
                }
            </section>
            <style>
                {r#"
                .kb-search {
                    max-width: 560px;
                    margin-top: 1.5rem;
                }
                .article-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .article {
                    display: flex;
                    gap: 1rem;
                }
                .article h3 {
                    margin: 0;
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
    fn test_search_spans_title_excerpt_and_category() {
        let hits = search_articles(ALL_CATEGORIES, "saml");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Configuring single sign-on");

        let billing = search_articles(ALL_CATEGORIES, "billing");
        assert!(billing.iter().any(|a| a.title == "Updating payment details"));
    }

    #[test]
    fn test_category_narrows_results() {
        let security = search_articles("Security", "");
        assert_eq!(security.len(), 2);
        assert!(search_articles("Billing", "saml").is_empty());
    }

    #[test]
    fn test_every_category_has_an_icon() {
        for article in ARTICLES {
            assert_ne!(category_icon(article.category), Icon::Document, "{}", article.category);
        }
    }
}
