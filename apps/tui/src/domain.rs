use ratatui::style::Color;
use serde::Serialize;

/// Sentinel category that selects the whole directory.
pub const ALL_CATEGORY: &str = "All";

/// One directory entry. Loaded once, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Alternative {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub countries: Vec<String>,
    pub alternative_to: String,
    pub description: String,
    pub link: String,
}

impl Alternative {
    /// First listed country; drives map placement only.
    pub fn primary_country(&self) -> Option<&str> {
        self.countries.first().map(String::as_str)
    }

    pub fn hostname(&self) -> String {
        link_hostname(&self.link)
    }

    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map_or_else(|| "?".to_string(), |c| c.to_uppercase().collect())
    }
}

/// Splits a raw `"A/B"` country field into trimmed names, once, at load.
pub fn split_countries(raw: &str) -> Vec<String> {
    raw.split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToString::to_string)
        .collect()
}

pub fn join_countries(countries: &[String]) -> String {
    countries.join("/")
}

/// Canonical country name -> ISO 3166-1 alpha-2 code. Case-insensitive;
/// anything unknown falls back to the generic "eu" badge.
pub fn region_code(country: &str) -> &'static str {
    match country.trim().to_lowercase().as_str() {
        "france" => "fr",
        "germany" => "de",
        "uk" => "gb",
        "italy" => "it",
        "spain" => "es",
        "sweden" => "se",
        "netherlands" => "nl",
        "switzerland" => "ch",
        "belgium" => "be",
        "austria" => "at",
        "denmark" => "dk",
        "norway" => "no",
        "finland" => "fi",
        "ireland" => "ie",
        "portugal" => "pt",
        "poland" => "pl",
        "czech republic" => "cz",
        "estonia" => "ee",
        "lithuania" => "lt",
        "latvia" => "lv",
        "slovakia" => "sk",
        "slovenia" => "si",
        "hungary" => "hu",
        "romania" => "ro",
        "bulgaria" => "bg",
        "greece" => "gr",
        "luxembourg" => "lu",
        "liechtenstein" => "li",
        "malta" => "mt",
        "cyprus" => "cy",
        "iceland" => "is",
        "uae" => "ae",
        _ => "eu",
    }
}

/// Renders an alpha-2 code as Unicode regional-indicator characters.
pub fn flag_glyph(code: &str) -> String {
    code.chars()
        .filter(char::is_ascii_lowercase)
        .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'a' as u32)))
        .collect()
}

pub fn flag_badge(country: &str) -> String {
    format!("{} {country}", flag_glyph(region_code(country)))
}

pub fn flag_image_url(code: &str, width: u32, height: u32) -> String {
    format!("https://flagcdn.com/{width}x{height}/{code}.png")
}

pub fn favicon_url(hostname: &str, size: u32) -> String {
    format!("https://www.google.com/s2/favicons?domain={hostname}&sz={size}")
}

/// Hostname of a record link, without a leading `www.`. An unparsable
/// link degrades to the raw string rather than failing the caller.
pub fn link_hostname(link: &str) -> String {
    url::Url::parse(link)
        .ok()
        .and_then(|parsed| {
            parsed
                .host_str()
                .map(|host| host.trim_start_matches("www.").to_string())
        })
        .unwrap_or_else(|| link.to_string())
}

/// Approximate country centroids (lat, lon). Countries absent from this
/// table get no map marker.
pub fn country_centroid(country: &str) -> Option<(f64, f64)> {
    let coords = match country {
        "France" => (46.2276, 2.2137),
        "Germany" => (51.1657, 10.4515),
        "UK" => (55.3781, -3.4360),
        "Italy" => (41.8719, 12.5674),
        "Spain" => (40.4637, -3.7492),
        "Sweden" => (60.1282, 18.6435),
        "Netherlands" => (52.1326, 5.2913),
        "Switzerland" => (46.8182, 8.2275),
        "Belgium" => (50.5039, 4.4699),
        "Austria" => (47.5162, 14.5501),
        "Denmark" => (56.2639, 9.5018),
        "Norway" => (60.4720, 8.4689),
        "Finland" => (61.9241, 25.7482),
        "Ireland" => (53.1424, -7.6921),
        "Portugal" => (39.3999, -8.2245),
        "Poland" => (51.9194, 19.1451),
        "Czech Republic" => (49.8175, 15.4730),
        "Estonia" => (58.5953, 25.0136),
        "Lithuania" => (55.1694, 23.8813),
        "Latvia" => (56.8796, 24.6032),
        "Slovakia" => (48.6690, 19.6990),
        "Slovenia" => (46.1512, 14.9955),
        "Hungary" => (47.1625, 19.5033),
        "Romania" => (45.9432, 24.9668),
        "Bulgaria" => (42.7339, 25.4858),
        "Greece" => (39.0742, 21.8243),
        "Luxembourg" => (49.8153, 6.1296),
        "Liechtenstein" => (47.1660, 9.5554),
        "Malta" => (35.9375, 14.3754),
        "Cyprus" => (35.1264, 33.4299),
        "Iceland" => (64.9631, -19.0208),
        _ => return None,
    };
    Some(coords)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Anything that is not exactly "dark" reads as light.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label for the toggle affordance: names the mode you would switch to.
    pub const fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Dark mode",
            Self::Dark => "Light mode",
        }
    }

    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: Color::White,
                text: Color::Black,
                muted: Color::DarkGray,
                title: Color::Blue,
                border: Color::Gray,
                accent: Color::Rgb(0, 0, 238),
                highlight_fg: Color::White,
                highlight_bg: Color::Rgb(0, 0, 238),
                map_land: Color::Gray,
                marker: Color::Rgb(0, 0, 238),
                marker_selected: Color::Red,
            },
            Self::Dark => Palette {
                background: Color::Black,
                text: Color::White,
                muted: Color::Gray,
                title: Color::Cyan,
                border: Color::DarkGray,
                accent: Color::Yellow,
                highlight_fg: Color::Black,
                highlight_bg: Color::Yellow,
                map_land: Color::DarkGray,
                marker: Color::Cyan,
                marker_selected: Color::LightYellow,
            },
        }
    }
}

/// Colors every render path draws with; the tile-source analog.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub title: Color,
    pub border: Color,
    pub accent: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub map_land: Color,
    pub marker: Color,
    pub marker_selected: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_countries_trims_segments() {
        assert_eq!(split_countries("France/Germany"), vec!["France", "Germany"]);
        assert_eq!(split_countries(" France / Germany "), vec!["France", "Germany"]);
        assert_eq!(split_countries("Sweden"), vec!["Sweden"]);
        assert!(split_countries("").is_empty());
    }

    #[test]
    fn region_code_is_case_insensitive() {
        assert_eq!(region_code("France"), "fr");
        assert_eq!(region_code("FRANCE"), "fr");
        assert_eq!(region_code(" uk "), "gb");
    }

    #[test]
    fn region_code_falls_back_to_eu() {
        assert_eq!(region_code("Atlantis"), "eu");
        assert_eq!(region_code(""), "eu");
    }

    #[test]
    fn flag_glyph_builds_regional_indicators() {
        assert_eq!(flag_glyph("fr"), "\u{1F1EB}\u{1F1F7}");
        assert_eq!(flag_glyph("eu"), "\u{1F1EA}\u{1F1FA}");
    }

    #[test]
    fn link_hostname_strips_scheme_and_www() {
        assert_eq!(link_hostname("https://www.qwant.com"), "qwant.com");
        assert_eq!(link_hostname("https://bolt.eu/ride"), "bolt.eu");
    }

    #[test]
    fn link_hostname_falls_back_to_raw_string() {
        assert_eq!(link_hostname("not a url"), "not a url");
        assert_eq!(link_hostname(""), "");
    }

    #[test]
    fn centroid_lookup_is_exact() {
        assert!(country_centroid("France").is_some());
        assert!(country_centroid("france").is_none());
        assert!(country_centroid("Atlantis").is_none());
    }

    #[test]
    fn primary_country_is_first_listed() {
        let record = Alternative {
            id: 4,
            name: "Airbus".to_string(),
            category: "Aerospace".to_string(),
            countries: split_countries("France/Germany"),
            alternative_to: "Boeing".to_string(),
            description: String::new(),
            link: "https://www.airbus.com".to_string(),
        };
        assert_eq!(record.primary_country(), Some("France"));
    }

    #[test]
    fn theme_defaults_to_light_and_toggles() {
        assert_eq!(Theme::parse(""), Theme::Light);
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("DARK"), Theme::Dark);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggle_label(), "Dark mode");
    }
}
