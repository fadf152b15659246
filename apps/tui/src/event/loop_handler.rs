use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

use crate::app::{handle_input, App};
use crate::domain::{favicon_url, region_code, Alternative};
use crate::filter::{distinct_categories, matches_category, matches_country};
use crate::ui;

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        // Update animations
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    // Handler errors (a failed preference write, say)
                    // surface in the status line instead of ending the
                    // session.
                    if let Err(e) = handle_input(app, key.code).await {
                        app.status_message = format!("Error: {e}");
                    }
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events
                }
            }
        }
    }

    Ok(())
}

/// Run without a UI: print directory stats, or emit the JSON export
/// consumed by the web dashboard.
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    app.initialize().await?;

    if json {
        render_headless_json(app)?;
    } else {
        render_headless_stats(app);
    }

    Ok(())
}

fn render_headless_stats(app: &App) {
    let stats = build_directory_stats(app);

    println!("\nEuropean Alternatives Directory");
    println!("================================");
    println!("Total alternatives: {}", stats.total);
    println!("Countries listed: {}", stats.by_country.len());
    println!("Countries on the map: {}", stats.mapped_countries);
    println!("Theme: {}", stats.theme);

    println!("\nBy category:");
    for (category, count) in &stats.by_category {
        println!("- {category}: {count}");
    }

    println!("\nBy country:");
    for (country, count) in &stats.by_country {
        println!("- {country}: {count}");
    }
}

fn render_headless_json(app: &App) -> Result<()> {
    let export = build_directory_export(app);
    let json = serde_json::to_string_pretty(&export)?;
    println!("{json}");
    Ok(())
}

struct DirectoryStats {
    total: usize,
    by_category: Vec<(String, usize)>,
    by_country: Vec<(String, usize)>,
    mapped_countries: usize,
    theme: String,
}

fn build_directory_stats(app: &App) -> DirectoryStats {
    let by_category = distinct_categories(&app.records)
        .into_iter()
        .map(|category| {
            let count = app
                .records
                .iter()
                .filter(|r| matches_category(r, &category))
                .count();
            (category, count)
        })
        .collect();

    let by_country = app
        .countries
        .iter()
        .map(|country| {
            let count = app
                .records
                .iter()
                .filter(|r| matches_country(r, country))
                .count();
            (country.clone(), count)
        })
        .collect();

    DirectoryStats {
        total: app.records.len(),
        by_category,
        by_country,
        mapped_countries: app.markers.len(),
        theme: app.theme.as_str().to_string(),
    }
}

#[derive(serde::Serialize)]
struct DirectoryExport {
    generated: String,
    theme: String,
    total: usize,
    categories: Vec<CategoryExport>,
    countries: Vec<CountryExport>,
    markers: Vec<MarkerExport>,
    records: Vec<RecordExport>,
}

#[derive(serde::Serialize)]
struct CategoryExport {
    name: String,
    count: usize,
}

/// Sidebar semantics: a multi-country record counts for every country.
#[derive(serde::Serialize)]
struct CountryExport {
    name: String,
    code: String,
    count: usize,
}

/// Map semantics: primary country only, with its centroid.
#[derive(serde::Serialize)]
struct MarkerExport {
    country: String,
    code: String,
    count: usize,
    lat: f64,
    lon: f64,
}

#[derive(serde::Serialize)]
struct RecordExport {
    id: i64,
    name: String,
    category: String,
    countries: Vec<String>,
    alternative_to: String,
    description: String,
    link: String,
    hostname: String,
    logo_url: String,
    flag_codes: Vec<String>,
}

fn build_directory_export(app: &App) -> DirectoryExport {
    let stats = build_directory_stats(app);

    let categories = stats
        .by_category
        .into_iter()
        .map(|(name, count)| CategoryExport { name, count })
        .collect();

    let countries = stats
        .by_country
        .into_iter()
        .map(|(name, count)| CountryExport {
            code: region_code(&name).to_string(),
            name,
            count,
        })
        .collect();

    let markers = app
        .markers
        .iter()
        .map(|marker| MarkerExport {
            country: marker.country.clone(),
            code: region_code(&marker.country).to_string(),
            count: marker.count(),
            lat: marker.lat,
            lon: marker.lon,
        })
        .collect();

    let records = app.records.iter().map(export_record).collect();

    DirectoryExport {
        generated: chrono::Utc::now().to_rfc3339(),
        theme: stats.theme,
        total: stats.total,
        categories,
        countries,
        markers,
        records,
    }
}

fn export_record(record: &Alternative) -> RecordExport {
    let hostname = record.hostname();
    RecordExport {
        id: record.id,
        name: record.name.clone(),
        category: record.category.clone(),
        countries: record.countries.clone(),
        alternative_to: record.alternative_to.clone(),
        description: record.description.clone(),
        link: record.link.clone(),
        logo_url: favicon_url(&hostname, 128),
        hostname,
        flag_codes: record
            .countries
            .iter()
            .map(|country| region_code(country).to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::build_markers;
    use crate::domain::split_countries;
    use crate::filter::{distinct_countries, ActiveFilter};

    fn test_app() -> App {
        let mut app = App::new();
        app.records = vec![
            Alternative {
                id: 1,
                name: "Airbus".to_string(),
                category: "Aerospace".to_string(),
                countries: split_countries("France/Germany"),
                alternative_to: "Boeing".to_string(),
                description: String::new(),
                link: "https://www.airbus.com".to_string(),
            },
            Alternative {
                id: 2,
                name: "Qwant".to_string(),
                category: "Search Engine".to_string(),
                countries: split_countries("France"),
                alternative_to: "Google Search".to_string(),
                description: String::new(),
                link: "https://www.qwant.com".to_string(),
            },
        ];
        app.countries = distinct_countries(&app.records);
        app.markers = build_markers(&app.records);
        app.apply_filter(ActiveFilter::All);
        app
    }

    #[test]
    fn stats_count_sidebar_and_map_differently() {
        let app = test_app();
        let stats = build_directory_stats(&app);

        // Sidebar semantics: the France/Germany record counts for both.
        let germany = stats
            .by_country
            .iter()
            .find(|(country, _)| country == "Germany")
            .map(|(_, count)| *count);
        assert_eq!(germany, Some(1));

        // Map semantics: only France gets a marker.
        assert_eq!(stats.mapped_countries, 1);
    }

    #[test]
    fn export_derives_hostnames_and_flag_codes() {
        let app = test_app();
        let export = build_directory_export(&app);

        assert_eq!(export.total, 2);
        assert_eq!(export.records[0].hostname, "airbus.com");
        assert_eq!(export.records[0].flag_codes, vec!["fr", "de"]);
        assert!(export.records[0].logo_url.contains("airbus.com"));

        assert_eq!(export.markers.len(), 1);
        assert_eq!(export.markers[0].country, "France");
        assert_eq!(export.markers[0].count, 2);
    }
}
