use crate::domain::{country_centroid, Alternative};

/// Fixed initial view over Europe; markers never refit the bounds.
pub const LON_BOUNDS: [f64; 2] = [-27.0, 47.0];
pub const LAT_BOUNDS: [f64; 2] = [33.0, 72.0];

const MARKER_BASE_RADIUS: f64 = 0.9;
const MARKER_RADIUS_STEP: f64 = 0.22;
const MARKER_RADIUS_MAX: f64 = 3.5;

/// Records grouped under one primary country, in dataset order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryGroup {
    pub country: String,
    pub members: Vec<usize>,
}

/// One plotted marker. Only countries with a known centroid get one.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub country: String,
    pub lat: f64,
    pub lon: f64,
    pub members: Vec<usize>,
}

impl Marker {
    pub fn count(&self) -> usize {
        self.members.len()
    }
}

/// Groups record positions by primary country. A record listing
/// "France/Germany" is attributed to France only; groups appear in
/// first-encounter order so marker cycling stays stable.
pub fn group_by_primary(records: &[Alternative]) -> Vec<CountryGroup> {
    let mut groups: Vec<CountryGroup> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let Some(primary) = record.primary_country() else {
            continue;
        };

        if let Some(group) = groups.iter_mut().find(|g| g.country == primary) {
            group.members.push(index);
        } else {
            groups.push(CountryGroup {
                country: primary.to_string(),
                members: vec![index],
            });
        }
    }

    groups
}

/// Builds markers from the grouped records, silently skipping countries
/// without a centroid.
pub fn build_markers(records: &[Alternative]) -> Vec<Marker> {
    group_by_primary(records)
        .into_iter()
        .filter_map(|group| {
            let (lat, lon) = country_centroid(&group.country)?;
            Some(Marker {
                country: group.country,
                lat,
                lon,
                members: group.members,
            })
        })
        .collect()
}

/// Marker radius in map degrees: a base size plus a per-member
/// increment, capped so dense countries stay readable.
pub fn marker_radius(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let scaled = MARKER_RADIUS_STEP.mul_add(count as f64, MARKER_BASE_RADIUS);
    scaled.min(MARKER_RADIUS_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::split_countries;

    fn record(id: i64, name: &str, country: &str) -> Alternative {
        Alternative {
            id,
            name: name.to_string(),
            category: "Test".to_string(),
            countries: split_countries(country),
            alternative_to: String::new(),
            description: String::new(),
            link: format!("https://{}.example", name.to_lowercase()),
        }
    }

    #[test]
    fn grouping_uses_primary_country_only() {
        let records = vec![
            record(1, "Airbus", "France/Germany"),
            record(2, "Qwant", "France"),
            record(3, "Ecosia", "Germany"),
        ];

        let groups = group_by_primary(&records);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].country, "France");
        assert_eq!(groups[0].members, vec![0, 1]);
        assert_eq!(groups[1].country, "Germany");
        assert_eq!(groups[1].members, vec![2]);
    }

    #[test]
    fn groups_keep_first_encounter_order() {
        let records = vec![
            record(1, "Spotify", "Sweden"),
            record(2, "Proton", "Switzerland"),
            record(3, "Klarna", "Sweden"),
        ];

        let groups = group_by_primary(&records);
        let order: Vec<&str> = groups.iter().map(|g| g.country.as_str()).collect();
        assert_eq!(order, vec!["Sweden", "Switzerland"]);
    }

    #[test]
    fn unknown_centroids_are_skipped_silently() {
        let records = vec![
            record(1, "Qwant", "France"),
            record(2, "Ghost", "Atlantis"),
        ];

        let markers = build_markers(&records);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].country, "France");
    }

    #[test]
    fn records_without_countries_get_no_marker() {
        let records = vec![record(1, "Nowhere", "")];
        assert!(build_markers(&records).is_empty());
    }

    #[test]
    fn marker_radius_grows_with_count() {
        assert!(marker_radius(2) > marker_radius(1));
        assert!(marker_radius(10) > marker_radius(5));
        // Capped for very dense countries.
        assert!(marker_radius(1000) <= MARKER_RADIUS_MAX);
    }

    #[test]
    fn markers_carry_centroid_coordinates() {
        let records = vec![record(1, "Qwant", "France")];
        let markers = build_markers(&records);
        assert_eq!(markers[0].lat, 46.2276);
        assert_eq!(markers[0].lon, 2.2137);
    }
}
