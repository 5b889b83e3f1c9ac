use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hero::PageHero;
use crate::icons::{Icon, IconView};
use crate::Route;

struct PolicySection {
    icon: Icon,
    title: &'static str,
    points: &'static [&'static str],
}

const SECTIONS: &[PolicySection] = &[
    PolicySection {
        icon: Icon::Lock,
        title: "Encryption",
        points: &[
            "TLS 1.2+ for all traffic, HSTS enforced on every domain.",
            "AES-256 encryption at rest for databases, backups and file storage.",
            "Customer-managed keys available on the Enterprise plan.",
        ],
    },
    PolicySection {
        icon: Icon::Key,
        title: "Access control",
        points: &[
            "Production access is limited to on-call engineers and requires hardware keys.",
            "All administrative actions are logged and reviewed weekly.",
            "Employees complete security training when they join and every year after.",
        ],
    },
    PolicySection {
        icon: Icon::Cloud,
        title: "Infrastructure",
        points: &[
            "Hosted in ISO 27001 certified data centers across three availability zones.",
            "Daily encrypted backups with 35-day retention and quarterly restore drills.",
            "Continuous vulnerability scanning and an annual third-party penetration test.",
        ],
    },
    PolicySection {
        icon: Icon::Document,
        title: "Compliance",
        points: &[
            "SOC 2 Type II report available under NDA.",
            "GDPR data processing agreement included with every plan.",
            "Sub-processor list published and updated 30 days before any change.",
        ],
    },
];

#[function_component(Security)]
pub fn security() -> Html {
    html! {
        <div class="security-page">
            <PageHero
                title="Security at Northwind"
                subtitle="How we protect your data, and how to tell us if you find a problem."
            />
            <section class="page-section card-grid">
                { for SECTIONS.iter().map(|section| html! {
                    <div class="card">
                        <IconView icon={section.icon} />
                        <h3>{section.title}</h3>
                        <ul>
                            { for section.points.iter().map(|point| html! { <li>{*point}</li> }) }
                        </ul>
                    </div>
                }) }
            </section>
            <section class="page-section">
                <div class="card">
                    <IconView icon={Icon::Shield} />
                    <h3>{"Responsible disclosure"}</h3>
                    <p>
                        {"Found a vulnerability? Email "}
                        <a href="mailto:security@northwind.io" class="text-link">{"security@northwind.io"}</a>
                        {" with steps to reproduce. We acknowledge reports within 48 hours, keep you updated until the issue is fixed, \
                          and credit researchers in our hall of fame if they wish."}
                    </p>
                    <p>
                        {"Please do not access other customers' data, run denial-of-service tests or use social engineering. "}
                        {"Questions about our practices? "}
                        <Link<Route> to={Route::Contact} classes="text-link">{"Contact us"}</Link<Route>>
                        {"."}
                    </p>
                </div>
            </section>
            <style>
                {r#"
                .security-page li {
                    color: #999;
                    line-height: 1.6;
                    margin-bottom: 0.5rem;
                }
                "#}
            </style>
        </div>
    }
}
