use sqlx::FromRow;

use crate::domain::{split_countries, Alternative};

/// Raw `alternative` table row. The country list is stored in the
/// source `"A/B"` format; it is parsed into an ordered list exactly
/// once, here, when the row leaves the database layer.
#[derive(Debug, FromRow, Clone)]
pub struct AlternativeRow {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub country: String,
    pub alternative_to: String,
    pub description: String,
    pub link: String,
}

impl AlternativeRow {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_conversion_parses_the_country_list() {
        let row = AlternativeRow {
            id: 4,
            name: "Airbus".to_string(),
            category: "Aerospace".to_string(),
            country: "France/Germany".to_string(),
            alternative_to: "Boeing".to_string(),
            description: "Aircraft".to_string(),
            link: "https://www.airbus.com".to_string(),
        };

        let record = row.into_alternative();
        assert_eq!(record.countries, vec!["France", "Germany"]);
        assert_eq!(record.primary_country(), Some("France"));
    }
}
