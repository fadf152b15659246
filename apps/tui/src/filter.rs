use crate::domain::{Alternative, ALL_CATEGORY};

/// The single active filter. Applying a new one replaces the old one
/// entirely; category, country and search are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveFilter {
    #[default]
    All,
    Category(String),
    Country(String),
    Search(String),
}

impl ActiveFilter {
    /// Header label shown above the result grid.
    pub fn title(&self) -> String {
        match self {
            Self::All => "All Alternatives".to_string(),
            Self::Category(category) => category.clone(),
            Self::Country(country) => format!("Made in {country}"),
            Self::Search(term) => format!("Search: \"{term}\""),
        }
    }
}

pub fn matches_category(record: &Alternative, category: &str) -> bool {
    category == ALL_CATEGORY || record.category == category
}

/// Exact segment match against the parsed country list.
pub fn matches_country(record: &Alternative, country: &str) -> bool {
    record.countries.iter().any(|c| c == country)
}

/// Case-insensitive substring over name, description and the replaced
/// product. The empty term matches everything.
pub fn matches_search(record: &Alternative, term: &str) -> bool {
    let term = term.to_lowercase();
    record.name.to_lowercase().contains(&term)
        || record.description.to_lowercase().contains(&term)
        || record.alternative_to.to_lowercase().contains(&term)
}

/// Positions of matching records, in dataset order. Never sorts.
pub fn apply(records: &[Alternative], filter: &ActiveFilter) -> Vec<usize> {
    let predicate = |record: &Alternative| match filter {
        ActiveFilter::All => true,
        ActiveFilter::Category(category) => matches_category(record, category),
        ActiveFilter::Country(country) => matches_country(record, country),
        ActiveFilter::Search(term) => matches_search(record, term),
    };

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| predicate(record))
        .map(|(index, _)| index)
        .collect()
}

/// Distinct categories, sorted lexicographically.
pub fn distinct_categories(records: &[Alternative]) -> Vec<String> {
    let mut categories: Vec<String> = records.iter().map(|r| r.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Sidebar category list: the forced "All" sentinel, then the sorted
/// distinct categories. Always exactly distinct-count + 1 entries.
pub fn sidebar_categories(records: &[Alternative]) -> Vec<String> {
    let mut entries = vec![ALL_CATEGORY.to_string()];
    entries.extend(distinct_categories(records));
    entries
}

/// Distinct individual country names across every record's list, sorted.
pub fn distinct_countries(records: &[Alternative]) -> Vec<String> {
    let mut countries: Vec<String> = records
        .iter()
        .flat_map(|r| r.countries.iter().cloned())
        .collect();
    countries.sort();
    countries.dedup();
    countries
}
