use crate::app::input::helpers::{step_down, step_up, wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub async fn handle_map_input(app: &mut App, key: KeyCode) -> color_eyre::Result<()> {
    if app.marker_popup_open {
        handle_popup_input(app, key);
        return Ok(());
    }

    match key {
        KeyCode::Esc | KeyCode::Char('m') => {
            app.screen = AppScreen::Directory;
        }
        KeyCode::Left | KeyCode::Up => {
            app.selected_marker_index =
                wrap_decrement(app.selected_marker_index, app.markers.len());
        }
        KeyCode::Right | KeyCode::Down => {
            app.selected_marker_index =
                wrap_increment(app.selected_marker_index, app.markers.len());
        }
        KeyCode::Enter => {
            if app.selected_marker().is_some() {
                app.marker_popup_open = true;
                app.popup_member_index = 0;
            }
        }
        KeyCode::Char('t') => {
            app.toggle_theme().await?;
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        _ => {}
    }

    Ok(())
}

fn handle_popup_input(app: &mut App, key: KeyCode) {
    let member_count = app.selected_marker().map_or(0, crate::atlas::Marker::count);

    match key {
        KeyCode::Esc => {
            app.marker_popup_open = false;
        }
        KeyCode::Up => {
            app.popup_member_index = step_up(app.popup_member_index, 1);
        }
        KeyCode::Down => {
            app.popup_member_index = step_down(app.popup_member_index, 1, member_count);
        }
        KeyCode::Enter => {
            let record_index = app
                .selected_marker()
                .and_then(|marker| marker.members.get(app.popup_member_index))
                .copied();
            if let Some(record_index) = record_index {
                app.open_details(record_index, AppScreen::Map);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::build_markers;
    use crate::domain::{split_countries, Alternative};
    use crate::filter::ActiveFilter;

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
            Alternative {
                id: 3,
                name: "Ecosia".to_string(),
                category: "Search Engine".to_string(),
                countries: split_countries("Germany"),
                alternative_to: "Google Search".to_string(),
                description: String::new(),
                link: "https://www.ecosia.org".to_string(),
            },
        ];
        app.markers = build_markers(&app.records);
        app.apply_filter(ActiveFilter::All);
        app.screen = AppScreen::Map;
        app
    }

    #[tokio::test]
    async fn marker_cycling_wraps() {
        let mut app = test_app();
        assert_eq!(app.markers.len(), 2);

        handle_map_input(&mut app, KeyCode::Right).await.unwrap();
        assert_eq!(app.selected_marker().unwrap().country, "Germany");

        handle_map_input(&mut app, KeyCode::Right).await.unwrap();
        assert_eq!(app.selected_marker().unwrap().country, "France");
    }

    #[tokio::test]
    async fn popup_lists_every_group_member() {
        let mut app = test_app();

        handle_map_input(&mut app, KeyCode::Enter).await.unwrap();
        assert!(app.marker_popup_open);
        // France holds Airbus (primary) and Qwant.
        assert_eq!(app.selected_marker().unwrap().count(), 2);

        handle_map_input(&mut app, KeyCode::Down).await.unwrap();
        handle_map_input(&mut app, KeyCode::Enter).await.unwrap();

        assert_eq!(app.screen, AppScreen::Details);
        assert_eq!(app.detail_record().map(|r| r.id), Some(2));
    }

    #[tokio::test]
    async fn escape_closes_the_popup_before_leaving_the_map() {
        let mut app = test_app();
        handle_map_input(&mut app, KeyCode::Enter).await.unwrap();

        handle_map_input(&mut app, KeyCode::Esc).await.unwrap();
        assert!(!app.marker_popup_open);
        assert_eq!(app.screen, AppScreen::Map);

        handle_map_input(&mut app, KeyCode::Esc).await.unwrap();
        assert_eq!(app.screen, AppScreen::Directory);
    }
}
