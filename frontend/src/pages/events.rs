use chrono::{Local, NaiveDate};
use log::warn;
use yew::prelude::*;

use crate::components::fields::form_fields;
use crate::components::form_status::{Confirmation, SubmissionError, SubmitButton};
use crate::components::hero::PageHero;
use crate::components::tabs::Tabs;
use crate::forms::hook::use_form;
use crate::forms::schema::{FieldKind, FieldSpec, FormSchema};
use crate::forms::state::{FieldValue, SubmissionStatus};
use crate::icons::{Icon, IconView};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub title: &'static str,
    pub date: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub blurb: &'static str,
}

impl Event {
    pub fn day(&self) -> Option<NaiveDate> {
        match NaiveDate::parse_from_str(self.date, "%Y-%m-%d") {
            Ok(day) => Some(day),
            Err(e) => {
                warn!("Event '{}' has an unreadable date '{}': {}", self.title, self.date, e);
                None
            }
        }
    }

    fn icon(&self) -> Icon {
        match self.kind {
            "Webinar" => Icon::Cloud,
            "Conference" => Icon::Users,
            _ => Icon::Calendar,
        }
    }
}

pub const EVENTS: &[Event] = &[
    Event {
        title: "Automation Summit",
        date: "2026-11-18",
        location: "Amsterdam",
        kind: "Conference",
        blurb: "Two days of customer talks, roadmap sessions and hands-on labs.",
    },
    Event {
        title: "Webhooks in practice",
        date: "2026-12-03",
        location: "Online",
        kind: "Webinar",
        blurb: "Designing reliable integrations, with live debugging of real payloads.",
    },
    Event {
        title: "Admin office hours",
        date: "2027-01-14",
        location: "Online",
        kind: "Webinar",
        blurb: "Bring your SSO, SCIM and permission questions to our solutions engineers.",
    },
    Event {
        title: "Nordic user meetup",
        date: "2026-09-24",
        location: "Helsinki",
        kind: "Meetup",
        blurb: "Lightning talks from local teams followed by sauna, as tradition requires.",
    },
    Event {
        title: "Reporting masterclass",
        date: "2026-06-11",
        location: "Online",
        kind: "Webinar",
        blurb: "Recorded session on building dashboards executives actually open.",
    },
];

/// Upcoming events (today included) soonest first, past events latest first.
pub fn partition_events(events: &[Event], today: NaiveDate) -> (Vec<Event>, Vec<Event>) {
    let mut dated: Vec<(NaiveDate, Event)> = events
        .iter()
        .filter_map(|event| event.day().map(|day| (day, *event)))
        .collect();
    dated.sort_by_key(|(day, _)| *day);

    let (upcoming, mut past): (Vec<_>, Vec<_>) =
        dated.into_iter().partition(|(day, _)| *day >= today);
    past.reverse();

    (
        upcoming.into_iter().map(|(_, e)| e).collect(),
        past.into_iter().map(|(_, e)| e).collect(),
    )
}

fn display_date(event: &Event) -> String {
    event
        .day()
        .map(|day| day.format("%a %-d %B %Y").to_string())
        .unwrap_or_else(|| event.date.to_string())
}

pub static REGISTRATION_FORM: FormSchema = FormSchema {
    id: "event-registration",
    fields: &[
        FieldSpec::new("event", "Event", FieldKind::Text).required(),
        FieldSpec::new("name", "Full name", FieldKind::Text).required(),
        FieldSpec::new("email", "Email", FieldKind::Email).required(),
        FieldSpec::new("company", "Company", FieldKind::Text),
        FieldSpec::new(
            "guests",
            "Additional guests",
            FieldKind::Number { min: Some(0.0), max: Some(3.0), default: 0.0 },
        ),
    ],
    agreement: None,
};

const UPCOMING: &str = "Upcoming";
const PAST: &str = "Past";

#[function_component(Events)]
pub fn events() -> Html {
    let tab = use_state(|| AttrValue::Static(UPCOMING));
    let form = use_form(&REGISTRATION_FORM);
    let status = form.form().status().clone();

    let (upcoming, past) = partition_events(EVENTS, Local::now().date_naive());
    let showing_upcoming = &**tab == UPCOMING;
    let listed = if showing_upcoming { upcoming } else { past };

    let on_select = {
        let tab = tab.clone();
        Callback::from(move |selected: AttrValue| tab.set(selected))
    };

    let registration = if status == SubmissionStatus::Submitted {
        let reset = {
            let form = form.clone();
            Callback::from(move |_: MouseEvent| form.reset())
        };
        html! {
            <Confirmation
                title="You're registered"
                message={format!("A calendar invite for {} is on its way to your inbox.", form.form().values().text("event"))}
                on_reset={reset}
                reset_label="Register for another event"
            />
        }
    } else {
        html! {
            <form onsubmit={form.on_submit()} novalidate=true>
                { form_fields(&form) }
                <SubmissionError status={status.clone()} />
                <SubmitButton status={status.clone()} label="Save my seat" />
            </form>
        }
    };

    html! {
        <div class="events-page">
            <PageHero
                title="Events"
                subtitle="Conferences, meetups and live webinars with the people who build and use the platform."
            />
            <section class="page-section">
                <Tabs
                    tabs={vec![AttrValue::Static(UPCOMING), AttrValue::Static(PAST)]}
                    active={(*tab).clone()}
                    {on_select}
                />
                if listed.is_empty() {
                    <p class="muted">{"Nothing here right now. Check back soon."}</p>
                }
                <div class="card-grid">
                    { for listed.iter().map(|event| {
                        let register = {
                            let form = form.clone();
                            let title = event.title;
                            Callback::from(move |_: MouseEvent| {
                                form.set_field("event", FieldValue::Text(title.to_string()));
                            })
                        };
                        html! {
                            <div class="card event-card" key={event.title}>
                                <IconView icon={event.icon()} />
                                <span class="event-kind">{event.kind}</span>
                                <h3>{event.title}</h3>
                                <p class="muted">{format!("{} · {}", display_date(event), event.location)}</p>
                                <p>{event.blurb}</p>
                                if showing_upcoming && status.accepts_submit() {
                                    <a class="text-link" href="#register" onclick={register}>{"Register →"}</a>
                                }
                            </div>
                        }
                    }) }
                </div>
            </section>
            <section class="page-section" id="register">
                <h2>{"Register"}</h2>
                <div class="form-panel">{registration}</div>
            </section>
            <style>
                {r#"
                .event-kind {
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    color: #1E90FF;
                    margin-left: 0.5rem;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_partition_orders_both_halves() {
        let (upcoming, past) = partition_events(EVENTS, day("2026-10-16"));
        let upcoming: Vec<_> = upcoming.iter().map(|e| e.title).collect();
        let past: Vec<_> = past.iter().map(|e| e.title).collect();

        assert_eq!(upcoming, vec!["Automation Summit", "Webhooks in practice", "Admin office hours"]);
        assert_eq!(past, vec!["Nordic user meetup", "Reporting masterclass"]);
    }

    #[test]
    fn test_event_on_today_is_upcoming() {
        let (upcoming, _) = partition_events(EVENTS, day("2026-11-18"));
        assert_eq!(upcoming[0].title, "Automation Summit");
    }

    #[test]
    fn test_unreadable_dates_are_dropped() {
        let events = [Event {
            title: "TBA",
            date: "sometime",
            location: "Online",
            kind: "Webinar",
            blurb: "",
        }];
        let (upcoming, past) = partition_events(&events, day("2026-01-01"));
        assert!(upcoming.is_empty());
        assert!(past.is_empty());
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date(&EVENTS[0]), "Wed 18 November 2026");
    }
}
