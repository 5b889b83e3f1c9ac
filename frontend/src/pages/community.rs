use yew::prelude::*;

use crate::components::fields::form_fields;
use crate::components::form_status::{SubmissionError, SubmitButton};
use crate::components::hero::PageHero;
use crate::components::tabs::Tabs;
use crate::forms::hook::use_form;
use crate::forms::schema::{FieldKind, FieldSpec, FormSchema};
use crate::forms::state::SubmissionStatus;
use crate::icons::{Icon, IconView};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Topic {
    pub title: &'static str,
    pub author: &'static str,
    pub board: &'static str,
    pub replies: u32,
    pub views: u32,
    /// Hours since the last post.
    pub last_activity_hours: u32,
}

pub const TOPICS: &[Topic] = &[
    Topic { title: "Share your favourite automation recipe", author: "mika", board: "Show & tell", replies: 48, views: 3120, last_activity_hours: 2 },
    Topic { title: "SCIM provisioning with nested groups?", author: "d.okafor", board: "Admins", replies: 0, views: 87, last_activity_hours: 5 },
    Topic { title: "Webhook retries firing twice", author: "samira", board: "Integrations", replies: 12, views: 640, last_activity_hours: 1 },
    Topic { title: "Dashboard filters reset after refresh", author: "tomasz", board: "Bugs", replies: 3, views: 210, last_activity_hours: 30 },
    Topic { title: "Best way to model approvals with three levels", author: "lee", board: "Workflows", replies: 0, views: 54, last_activity_hours: 12 },
    Topic { title: "Monthly community call: November", author: "community-team", board: "Announcements", replies: 21, views: 1980, last_activity_hours: 48 },
];

pub const LATEST: &str = "Latest";
pub const POPULAR: &str = "Popular";
pub const UNANSWERED: &str = "Unanswered";

pub fn topics_for(tab: &str) -> Vec<Topic> {
    let mut topics: Vec<Topic> = TOPICS.to_vec();
    match tab {
        POPULAR => topics.sort_by(|a, b| b.replies.cmp(&a.replies).then(b.views.cmp(&a.views))),
        UNANSWERED => {
            topics.retain(|t| t.replies == 0);
            topics.sort_by_key(|t| t.last_activity_hours);
        }
        _ => topics.sort_by_key(|t| t.last_activity_hours),
    }
    topics
}

fn activity_label(hours: u32) -> String {
    match hours {
        0 => "just now".to_string(),
        1..=23 => format!("{}h ago", hours),
        _ => format!("{}d ago", hours / 24),
    }
}

pub static NEWSLETTER_FORM: FormSchema = FormSchema {
    id: "community-digest",
    fields: &[FieldSpec::new("email", "Email", FieldKind::Email).required()],
    agreement: None,
};

const STATS: &[(Icon, &str, &str)] = &[
    (Icon::Users, "18,400", "members"),
    (Icon::Chat, "52,000", "answers"),
    (Icon::Globe, "64", "countries"),
];

#[function_component(Community)]
pub fn community() -> Html {
    let tab = use_state(|| AttrValue::Static(LATEST));
    let form = use_form(&NEWSLETTER_FORM);
    let status = form.form().status().clone();
    let topics = topics_for(&tab);

    let on_select = {
        let tab = tab.clone();
        Callback::from(move |selected: AttrValue| tab.set(selected))
    };

    html! {
        <div class="community-page">
            <PageHero
                title="Community"
                subtitle="Ask questions, share what you've built and meet the people behind thousands of workflows."
            />
            <section class="page-section stats">
                { for STATS.iter().map(|(icon, value, label)| html! {
                    <div class="stat">
                        <IconView icon={*icon} />
                        <strong>{*value}</strong>
                        <span class="muted">{*label}</span>
                    </div>
                }) }
            </section>
            <section class="page-section">
                <Tabs
                    tabs={vec![AttrValue::Static(LATEST), AttrValue::Static(POPULAR), AttrValue::Static(UNANSWERED)]}
                    active={(*tab).clone()}
                    {on_select}
                />
                <table class="topic-table">
                    <tbody>
                        { for topics.iter().map(|topic| html! {
                            <tr key={topic.title}>
                                <td>
                                    <strong>{topic.title}</strong>
                                    <div class="muted">{format!("{} · by {}", topic.board, topic.author)}</div>
                                </td>
                                <td>{format!("{} replies", topic.replies)}</td>
                                <td>{format!("{} views", topic.views)}</td>
                                <td class="muted">{activity_label(topic.last_activity_hours)}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </section>
            <section class="page-section">
                <div class="form-panel">
                    <h2>{"The weekly digest"}</h2>
                    <p class="muted">{"The best threads of the week, every Friday. No spam, unsubscribe any time."}</p>
                    if status == SubmissionStatus::Submitted {
                        <p class="success-message">{"You're subscribed. See you on Friday!"}</p>
                    } else {
                        <form onsubmit={form.on_submit()} novalidate=true>
                            { form_fields(&form) }
                            <SubmissionError status={status.clone()} />
                            <SubmitButton status={status.clone()} label="Subscribe" busy_label="Subscribing..." />
                        </form>
                    }
                </div>
            </section>
            <style>
                {r#"
                .stats {
                    display: flex;
                    justify-content: center;
                    gap: 3rem;
                }
                .stat {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .topic-table {
                    width: 100%;
                    border-collapse: collapse;
                }
                .topic-table td {
                    padding: 0.8rem;
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
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
    fn test_latest_is_most_recent_first() {
        let hours: Vec<u32> = topics_for(LATEST).iter().map(|t| t.last_activity_hours).collect();
        let mut sorted = hours.clone();
        sorted.sort();
        assert_eq!(hours, sorted);
        assert_eq!(hours.len(), TOPICS.len());
    }

    #[test]
    fn test_popular_orders_by_replies() {
        let popular = topics_for(POPULAR);
        assert_eq!(popular[0].title, "Share your favourite automation recipe");
        assert!(popular.windows(2).all(|w| w[0].replies >= w[1].replies));
    }

    #[test]
    fn test_unanswered_only_has_zero_replies() {
        let unanswered = topics_for(UNANSWERED);
        assert_eq!(unanswered.len(), 2);
        assert!(unanswered.iter().all(|t| t.replies == 0));
        assert_eq!(unanswered[0].title, "SCIM provisioning with nested groups?");
    }

    #[test]
    fn test_activity_label() {
        assert_eq!(activity_label(0), "just now");
        assert_eq!(activity_label(5), "5h ago");
        assert_eq!(activity_label(48), "2d ago");
    }
}
