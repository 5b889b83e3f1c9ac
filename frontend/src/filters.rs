//! Search and category filters over the static page catalogs.

pub const ALL_CATEGORIES: &str = "All";

/// True when every whitespace-separated term of `query` occurs,
/// case-insensitively, in at least one of `fields`.
pub fn matches_query(fields: &[&str], query: &str) -> bool {
    let haystacks: Vec<String> = fields.iter().map(|f| f.to_lowercase()).collect();
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .all(|term| haystacks.iter().any(|h| h.contains(&term)))
}

pub fn matches_category(item_category: &str, selected: &str) -> bool {
    selected.is_empty() || selected == ALL_CATEGORIES || item_category == selected
}

/// Distinct categories in first-seen order, prefixed with `All`.
pub fn category_tabs<'a>(categories: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut tabs = vec![ALL_CATEGORIES];
    for category in categories {
        if !tabs.contains(&category) {
            tabs.push(category);
        }
    }
    tabs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_matches_everything() {
        assert!(matches_query(&["Getting started"], ""));
        assert!(matches_query(&[], "   "));
    }

    #[test]
    fn test_query_is_case_insensitive() {
        assert!(matches_query(&["Single Sign-On with SAML"], "saml"));
        assert!(matches_query(&["Billing", "Invoices and receipts"], "INVOICES"));
    }

    #[test]
    fn test_every_term_must_match_some_field() {
        let fields = ["Webhooks guide", "Integrations"];
        assert!(matches_query(&fields, "webhooks integrations"));
        assert!(!matches_query(&fields, "webhooks billing"));
    }

    #[test]
    fn test_category_filter() {
        assert!(matches_category("Security", ALL_CATEGORIES));
        assert!(matches_category("Security", ""));
        assert!(matches_category("Security", "Security"));
        assert!(!matches_category("Billing", "Security"));
    }

    #[test]
    fn test_category_tabs_are_distinct_in_order() {
        let tabs = category_tabs(["Beginner", "Advanced", "Beginner", "Intermediate"]);
        assert_eq!(tabs, vec!["All", "Beginner", "Advanced", "Intermediate"]);
    }
}
