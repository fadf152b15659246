use crate::app::input::helpers::{step_down, step_up};
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_details_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.close_details();
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        // Walk the current result set without leaving the detail view;
        // only meaningful when the view was opened from the grid.
        KeyCode::Up if app.detail_return == AppScreen::Directory => {
            app.selected_result_index = step_up(app.selected_result_index, 1);
            refresh_detail(app);
        }
        KeyCode::Down if app.detail_return == AppScreen::Directory => {
            app.selected_result_index =
                step_down(app.selected_result_index, 1, app.visible_len());
            refresh_detail(app);
        }
        _ => {}
    }
}

fn refresh_detail(app: &mut App) {
    if let Some(&record_index) = app.visible.get(app.selected_result_index) {
        app.detail_index = Some(record_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{split_countries, Alternative};
    use crate::filter::ActiveFilter;

    fn test_app() -> App {
        let mut app = App::new();
        app.records = (1..=3)
            .map(|id| Alternative {
                id,
                name: format!("Record {id}"),
                category: "Test".to_string(),
                countries: split_countries("France"),
                alternative_to: String::new(),
                description: String::new(),
                link: format!("https://r{id}.example"),
            })
            .collect();
        app.apply_filter(ActiveFilter::All);
        app
    }

    #[test]
    fn arrows_walk_the_result_set_in_place() {
        let mut app = test_app();
        app.open_details(0, AppScreen::Directory);

        handle_details_input(&mut app, KeyCode::Down);
        assert_eq!(app.detail_record().map(|r| r.id), Some(2));

        handle_details_input(&mut app, KeyCode::Up);
        assert_eq!(app.detail_record().map(|r| r.id), Some(1));
    }

    #[test]
    fn escape_returns_to_the_opening_screen() {
        let mut app = test_app();
        app.open_details(2, AppScreen::Map);

        // Arrows do nothing when opened from the map popup.
        handle_details_input(&mut app, KeyCode::Down);
        assert_eq!(app.detail_record().map(|r| r.id), Some(3));

        handle_details_input(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, AppScreen::Map);
    }
}
