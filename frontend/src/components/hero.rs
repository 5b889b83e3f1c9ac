use yew::prelude::*;
use yew_hooks::prelude::*;

pub const SITE_NAME: &str = "Northwind";

pub fn document_title(page: &str) -> String {
    format!("{} | {}", page, SITE_NAME)
}

#[derive(Properties, PartialEq)]
pub struct PageHeroProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PageHero)]
pub fn page_hero(props: &PageHeroProps) -> Html {
    use_title(document_title(&props.title));

    html! {
        <section class="page-hero">
            <h1>{props.title.clone()}</h1>
            if let Some(subtitle) = props.subtitle.clone() {
                <p>{subtitle}</p>
            }
            { for props.children.iter() }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_title_carries_site_name() {
        assert_eq!(document_title("Contact"), "Contact | Northwind");
    }
}
