use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{split_countries, Alternative};

/// The dataset shipped with the binary; seeds the database on first run.
pub const BUNDLED_DATASET: &str = include_str!("../../data/alternatives.json");

/// One entry of the seed file, in the source dataset's field naming.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedRecord {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub country: String,
    pub alternative_to: String,
    pub description: String,
    pub link: String,
}

impl SeedRecord {
    /// Used when the database is unavailable and the directory runs
    /// straight off the bundled file.
    pub fn into_alternative(self) -> Alternative {
        Alternative {
            id: self.id,
            name: self.name,
            category: self.category,
            countries: split_countries(&self.country),
            alternative_to: self.alternative_to,
            description: self.description,
            link: self.link,
        }
    }
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset is empty")]
    Empty,
    #[error("duplicate record id {0}")]
    DuplicateId(i64),
}

/// Parses and validates a seed dataset. Record ids must be unique:
/// they address the detail view.
pub fn parse_seed(json: &str) -> Result<Vec<SeedRecord>, SeedError> {
    let records: Vec<SeedRecord> = serde_json::from_str(json)?;

    if records.is_empty() {
        return Err(SeedError::Empty);
    }

    let mut seen = HashSet::new();
    for record in &records {
        if !seen.insert(record.id) {
            return Err(SeedError::DuplicateId(record.id));
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_parses_and_has_unique_ids() {
        let records = parse_seed(BUNDLED_DATASET).unwrap();
        assert!(!records.is_empty());
    }

    #[test]
    fn bundled_dataset_contains_a_multi_country_record() {
        let records = parse_seed(BUNDLED_DATASET).unwrap();
        assert!(records.iter().any(|r| r.country.contains('/')));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id": 1, "name": "A", "category": "C", "country": "France",
             "alternativeTo": "X", "description": "", "link": "https://a.example"},
            {"id": 1, "name": "B", "category": "C", "country": "Spain",
             "alternativeTo": "Y", "description": "", "link": "https://b.example"}
        ]"#;

        assert!(matches!(parse_seed(json), Err(SeedError::DuplicateId(1))));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(parse_seed("[]"), Err(SeedError::Empty)));
    }

    #[test]
    fn camel_case_field_names_are_accepted() {
        let json = r#"[{"id": 9, "name": "Bolt", "category": "Ride Sharing",
            "country": "Estonia", "alternativeTo": "Uber",
            "description": "Rides", "link": "https://bolt.eu"}]"#;

        let records = parse_seed(json).unwrap();
        assert_eq!(records[0].alternative_to, "Uber");

        let record = records.into_iter().next().unwrap().into_alternative();
        assert_eq!(record.countries, vec!["Estonia"]);
    }
}
