use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::hero::PageHero;
use crate::components::tabs::Tabs;
use crate::filters::{category_tabs, matches_category, matches_query, ALL_CATEGORIES};
use crate::icons::{Icon, IconView};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Course {
    pub title: &'static str,
    pub summary: &'static str,
    pub level: &'static str,
    pub lessons: u32,
    pub minutes: u32,
    pub icon: Icon,
}

pub const COURSES: &[Course] = &[
    Course {
        title: "Platform fundamentals",
        summary: "Workspaces, roles and the first automation, start to finish.",
        level: "Beginner",
        lessons: 8,
        minutes: 55,
        icon: Icon::Rocket,
    },
    Course {
        title: "Reporting that people read",
        summary: "Build dashboards around decisions instead of data dumps.",
        level: "Beginner",
        lessons: 6,
        minutes: 40,
        icon: Icon::Chart,
    },
    Course {
        title: "Integrations and webhooks",
        summary: "Connect your CRM, ticketing and data warehouse without glue scripts.",
        level: "Intermediate",
        lessons: 10,
        minutes: 90,
        icon: Icon::Code,
    },
    Course {
        title: "Admin essentials: SSO and provisioning",
        summary: "SAML, SCIM and permission models for growing organisations.",
        level: "Intermediate",
        lessons: 7,
        minutes: 60,
        icon: Icon::Key,
    },
    Course {
        title: "Scaling automations",
        summary: "Rate limits, retries and observability for high-volume workflows.",
        level: "Advanced",
        lessons: 12,
        minutes: 120,
        icon: Icon::Lightning,
    },
    Course {
        title: "Security and compliance deep dive",
        summary: "Audit trails, data residency and preparing for SOC 2 reviews.",
        level: "Advanced",
        lessons: 9,
        minutes: 95,
        icon: Icon::Shield,
    },
];

pub fn visible_courses(level: &str, query: &str) -> Vec<Course> {
    COURSES
        .iter()
        .filter(|c| matches_category(c.level, level))
        .filter(|c| matches_query(&[c.title, c.summary], query))
        .copied()
        .collect()
}

fn format_duration(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{} min", m),
        (h, 0) => format!("{} h", h),
        (h, m) => format!("{} h {} min", h, m),
    }
}

#[function_component(Academy)]
pub fn academy() -> Html {
    let level = use_state(|| AttrValue::Static(ALL_CATEGORIES));
    let query = use_state(String::new);

    let tabs: Vec<AttrValue> = category_tabs(COURSES.iter().map(|c| c.level))
        .into_iter()
        .map(AttrValue::Static)
        .collect();

    let on_select = {
        let level = level.clone();
        Callback::from(move |tab: AttrValue| level.set(tab))
    };
    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let courses = visible_courses(&level, &query);

    html! {
        <div class="academy-page">
            <PageHero
                title="Academy"
                subtitle="Free, self-paced courses that take you from first login to running the platform for your whole company."
            />
            <section class="page-section">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search courses"
                    value={(*query).clone()}
                    oninput={on_search}
                />
                <Tabs tabs={tabs} active={(*level).clone()} {on_select} />
                if courses.is_empty() {
                    <p class="muted">{"No courses match your search yet."}</p>
                } else {
                    <div class="card-grid">
                        { for courses.iter().map(|course| html! {
                            <div class="card course-card" key={course.title}>
                                <IconView icon={course.icon} />
                                <span class="course-level">{course.level}</span>
                                <h3>{course.title}</h3>
                                <p>{course.summary}</p>
                                <p class="muted">
                                    {format!("{} lessons · {}", course.lessons, format_duration(course.minutes))}
                                </p>
                            </div>
                        }) }
                    </div>
                }
            </section>
            <section class="page-section card certification">
                <IconView icon={Icon::GraduationCap} />
                <h3>{"Get certified"}</h3>
                <p>{"Finish any three courses and pass a short exam to earn a shareable certificate."}</p>
            </section>
            <style>
                {r#"
                .course-level {
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    color: #1E90FF;
                    margin-left: 0.5rem;
                }
                .certification {
                    margin-top: 2rem;
                    text-align: center;
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
    fn test_all_shows_every_course() {
        assert_eq!(visible_courses(ALL_CATEGORIES, "").len(), COURSES.len());
    }

    #[test]
    fn test_level_and_query_combine() {
        let advanced = visible_courses("Advanced", "");
        assert!(advanced.iter().all(|c| c.level == "Advanced"));
        assert_eq!(advanced.len(), 2);

        let found = visible_courses("Intermediate", "saml");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Admin essentials: SSO and provisioning");

        assert!(visible_courses("Beginner", "saml").is_empty());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(40), "40 min");
        assert_eq!(format_duration(120), "2 h");
        assert_eq!(format_duration(95), "1 h 35 min");
    }
}
