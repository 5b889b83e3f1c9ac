use yew::prelude::*;

/// Every pictogram used by the page data. Views never reference glyphs
/// directly, only these names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Book,
    Briefcase,
    Calendar,
    Chart,
    Chat,
    Cloud,
    Code,
    Cookie,
    Document,
    Globe,
    GraduationCap,
    Handshake,
    Key,
    Lightning,
    Lock,
    Money,
    Rocket,
    Search,
    Shield,
    Support,
    Users,
}

impl Icon {
    fn entry(self) -> (&'static str, &'static str) {
        match self {
            Icon::Book => ("📘", "book"),
            Icon::Briefcase => ("💼", "briefcase"),
            Icon::Calendar => ("📅", "calendar"),
            Icon::Chart => ("📈", "chart"),
            Icon::Chat => ("💬", "chat"),
            Icon::Cloud => ("☁️", "cloud"),
            Icon::Code => ("🧑‍💻", "code"),
            Icon::Cookie => ("🍪", "cookie"),
            Icon::Document => ("📄", "document"),
            Icon::Globe => ("🌍", "globe"),
            Icon::GraduationCap => ("🎓", "graduation-cap"),
            Icon::Handshake => ("🤝", "handshake"),
            Icon::Key => ("🔑", "key"),
            Icon::Lightning => ("⚡", "lightning"),
            Icon::Lock => ("🔒", "lock"),
            Icon::Money => ("💰", "money"),
            Icon::Rocket => ("🚀", "rocket"),
            Icon::Search => ("🔍", "search"),
            Icon::Shield => ("🛡️", "shield"),
            Icon::Support => ("🛟", "support"),
            Icon::Users => ("👥", "users"),
        }
    }

    pub fn glyph(self) -> &'static str {
        self.entry().0
    }

    pub fn css_class(self) -> String {
        format!("icon icon-{}", self.entry().1)
    }
}

#[derive(Properties, PartialEq)]
pub struct IconViewProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconViewProps) -> Html {
    html! {
        <i class={classes!(props.icon.css_class(), props.class.clone())} aria-hidden="true">
            {props.icon.glyph()}
        </i>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_class_is_kebab_case() {
        assert_eq!(Icon::GraduationCap.css_class(), "icon icon-graduation-cap");
        assert_eq!(Icon::Shield.css_class(), "icon icon-shield");
    }

    #[test]
    fn test_glyphs_are_not_empty() {
        for icon in [Icon::Book, Icon::Cookie, Icon::Users, Icon::Lock] {
            assert!(!icon.glyph().is_empty());
        }
    }
}
