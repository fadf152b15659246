use std::time::Instant;

use color_eyre::Result;

use crate::app::actions::DirectoryActions;
use crate::atlas::{build_markers, Marker};
use crate::domain::{Alternative, Palette, Theme, ALL_CATEGORY};
use crate::filter::{apply, distinct_countries, sidebar_categories, ActiveFilter};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Directory,
    Details,
    Map,
}

/// Which directory panel owns navigation keys.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PanelFocus {
    Categories,
    Countries,
    Results,
    Search,
}

impl PanelFocus {
    /// Tab order within the directory screen.
    pub const fn next(self) -> Self {
        match self {
            Self::Categories => Self::Countries,
            Self::Countries => Self::Results,
            Self::Results | Self::Search => Self::Categories,
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub screen: AppScreen,
    pub focus: PanelFocus,

    // The dataset and what is derived from it, all loaded once.
    pub records: Vec<Alternative>,
    pub categories: Vec<String>,
    pub countries: Vec<String>,
    pub markers: Vec<Marker>,

    // Explicit filter state; exactly one mode active at a time.
    pub active_filter: ActiveFilter,
    pub visible: Vec<usize>,
    pub search_input: String,

    // Navigation cursors.
    pub selected_category_index: usize,
    pub selected_country_index: usize,
    pub selected_result_index: usize,
    pub selected_marker_index: usize,
    pub popup_member_index: usize,
    pub marker_popup_open: bool,

    pub detail_index: Option<usize>,
    pub detail_return: AppScreen,

    pub sidebar_visible: bool,
    pub theme: Theme,
    pub show_help: bool,
    pub status_message: String,

    pub animation_counter: f64,
    pub last_frame: Instant,

    pub actions: DirectoryActions,
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            screen: AppScreen::Directory,
            focus: PanelFocus::Categories,
            records: Vec::new(),
            categories: Vec::new(),
            countries: Vec::new(),
            markers: Vec::new(),
            active_filter: ActiveFilter::All,
            visible: Vec::new(),
            search_input: String::new(),
            selected_category_index: 0,
            selected_country_index: 0,
            selected_result_index: 0,
            selected_marker_index: 0,
            popup_member_index: 0,
            marker_popup_open: false,
            detail_index: None,
            detail_return: AppScreen::Directory,
            sidebar_visible: true,
            theme: Theme::default(),
            show_help: false,
            status_message: String::new(),
            animation_counter: 0.0,
            last_frame: Instant::now(),
            actions: DirectoryActions::new(),
        }
    }

    /// Loads the dataset, derives the sidebar lists and map markers,
    /// and restores the persisted theme. A failed database open is not
    /// fatal: the bundled dataset still drives the session.
    pub async fn initialize(&mut self) -> Result<()> {
        if let Err(e) = self.actions.initialize().await {
            eprintln!("Error initializing database: {e}");
            eprintln!("Continuing with the bundled dataset; preferences will not persist");
        }

        self.records = self.actions.load_alternatives().await?;
        self.categories = sidebar_categories(&self.records);
        self.countries = distinct_countries(&self.records);
        self.markers = build_markers(&self.records);
        self.theme = self.actions.load_theme().await?;
        self.apply_filter(ActiveFilter::All);

        Ok(())
    }

    pub fn update(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        // Cycles between 0 and 2*PI; drives the cursor blink and the
        // selected-marker pulse.
        self.animation_counter += delta.as_secs_f64() * 2.0;
        if self.animation_counter > 2.0 * std::f64::consts::PI {
            self.animation_counter -= 2.0 * std::f64::consts::PI;
        }
    }

    /// Replaces the active filter wholesale and recomputes the visible
    /// subsequence. Any non-search filter clears the search field.
    pub fn apply_filter(&mut self, filter: ActiveFilter) {
        if !matches!(filter, ActiveFilter::Search(_)) {
            self.search_input.clear();
        }

        self.visible = apply(&self.records, &filter);
        self.active_filter = filter;
        self.selected_result_index = 0;
    }

    /// Re-applies the search filter from the current input; called on
    /// every keystroke while the search field is focused.
    pub fn apply_search(&mut self) {
        self.apply_filter(ActiveFilter::Search(self.search_input.clone()));
    }

    pub fn select_category(&mut self) {
        let Some(entry) = self.categories.get(self.selected_category_index) else {
            return;
        };

        let filter = if entry == ALL_CATEGORY {
            ActiveFilter::All
        } else {
            ActiveFilter::Category(entry.clone())
        };
        self.apply_filter(filter);
    }

    pub fn select_country(&mut self) {
        let Some(country) = self.countries.get(self.selected_country_index) else {
            return;
        };
        self.apply_filter(ActiveFilter::Country(country.clone()));
    }

    pub fn results_title(&self) -> String {
        self.active_filter.title()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Record at a position in the visible subsequence.
    pub fn visible_record(&self, position: usize) -> Option<&Alternative> {
        self.visible
            .get(position)
            .and_then(|&index| self.records.get(index))
    }

    pub fn selected_record(&self) -> Option<&Alternative> {
        self.visible_record(self.selected_result_index)
    }

    pub fn detail_record(&self) -> Option<&Alternative> {
        self.detail_index.and_then(|index| self.records.get(index))
    }

    pub fn open_details(&mut self, record_index: usize, from: AppScreen) {
        if self.records.get(record_index).is_some() {
            self.detail_index = Some(record_index);
            self.detail_return = from;
            self.screen = AppScreen::Details;
        }
    }

    pub fn close_details(&mut self) {
        self.detail_index = None;
        self.screen = self.detail_return;
    }

    pub fn selected_marker(&self) -> Option<&Marker> {
        self.markers.get(self.selected_marker_index)
    }

    pub async fn toggle_theme(&mut self) -> Result<()> {
        self.theme = self.theme.toggled();
        self.actions.store_theme(self.theme).await?;
        self.status_message = format!("Theme: {}", self.theme.as_str());
        Ok(())
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::split_countries;

    fn app_with_records() -> App {
        let mut app = App::new();
        app.records = vec![
            Alternative {
                id: 1,
                name: "Proton Mail".to_string(),
                category: "Email".to_string(),
                countries: split_countries("Switzerland"),
                alternative_to: "Gmail".to_string(),
                description: "Encrypted email".to_string(),
                link: "https://proton.me".to_string(),
            },
            Alternative {
                id: 2,
                name: "Airbus".to_string(),
                category: "Aerospace".to_string(),
                countries: split_countries("France/Germany"),
                alternative_to: "Boeing".to_string(),
                description: "Aircraft".to_string(),
                link: "https://www.airbus.com".to_string(),
            },
        ];
        app.categories = sidebar_categories(&app.records);
        app.countries = distinct_countries(&app.records);
        app.markers = build_markers(&app.records);
        app.apply_filter(ActiveFilter::All);
        app
    }

    #[test]
    fn applying_a_sidebar_filter_clears_the_search_field() {
        let mut app = app_with_records();
        app.search_input = "proton".to_string();
        app.apply_search();
        assert_eq!(app.visible_len(), 1);

        app.selected_category_index = 1; // "Aerospace" after the sentinel
        app.select_category();

        assert!(app.search_input.is_empty());
        assert_eq!(app.active_filter, ActiveFilter::Category("Aerospace".to_string()));
        assert_eq!(app.visible_len(), 1);
    }

    #[test]
    fn selecting_the_sentinel_restores_the_full_directory() {
        let mut app = app_with_records();
        app.selected_country_index = 0;
        app.select_country();
        assert_eq!(app.visible_len(), 1);

        app.selected_category_index = 0;
        app.select_category();
        assert_eq!(app.active_filter, ActiveFilter::All);
        assert_eq!(app.visible_len(), app.records.len());
        assert_eq!(app.results_title(), "All Alternatives");
    }

    #[test]
    fn detail_navigation_round_trips() {
        let mut app = app_with_records();
        app.open_details(1, AppScreen::Directory);
        assert_eq!(app.screen, AppScreen::Details);
        assert_eq!(app.detail_record().map(|r| r.id), Some(2));

        app.close_details();
        assert_eq!(app.screen, AppScreen::Directory);
        assert!(app.detail_record().is_none());
    }

    #[test]
    fn map_markers_follow_primary_country_only() {
        let app = app_with_records();
        let countries: Vec<&str> = app.markers.iter().map(|m| m.country.as_str()).collect();
        assert_eq!(countries, vec!["Switzerland", "France"]);
    }

    #[test]
    fn focus_cycles_through_the_directory_panels() {
        assert_eq!(PanelFocus::Categories.next(), PanelFocus::Countries);
        assert_eq!(PanelFocus::Countries.next(), PanelFocus::Results);
        assert_eq!(PanelFocus::Results.next(), PanelFocus::Categories);
        assert_eq!(PanelFocus::Search.next(), PanelFocus::Categories);
    }
}
