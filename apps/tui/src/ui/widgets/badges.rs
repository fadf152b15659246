use crate::domain::{flag_badge, Alternative};

/// Result counter text, pluralized like the page header.
pub fn results_count_label(count: usize) -> String {
    if count == 1 {
        "1 result".to_string()
    } else {
        format!("{count} results")
    }
}

/// Flag + name pairs, visually joined by `/` for multi-country records.
pub fn country_tags(countries: &[String]) -> String {
    countries
        .iter()
        .map(|country| flag_badge(country))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Terminal logo: the record's first-letter initial plus the hostname
/// derived from its link (the favicon fallback chain, flattened).
pub fn logo_badge(record: &Alternative) -> String {
    format!("[{}] {}", record.initial(), record.hostname())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::split_countries;

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(results_count_label(0), "0 results");
        assert_eq!(results_count_label(1), "1 result");
        assert_eq!(results_count_label(2), "2 results");
    }

    #[test]
    fn country_tags_join_with_a_slash() {
        let countries = split_countries("France/Germany");
        let tags = country_tags(&countries);
        assert!(tags.contains("France"));
        assert!(tags.contains("Germany"));
        assert!(tags.contains(" / "));

        let single = country_tags(&split_countries("Sweden"));
        assert!(!single.contains(" / "));
    }

    #[test]
    fn logo_badge_degrades_to_the_raw_link() {
        let record = Alternative {
            id: 1,
            name: "Proton Mail".to_string(),
            category: "Email".to_string(),
            countries: split_countries("Switzerland"),
            alternative_to: "Gmail".to_string(),
            description: String::new(),
            link: "not a url".to_string(),
        };

        assert_eq!(logo_badge(&record), "[P] not a url");
    }
}
