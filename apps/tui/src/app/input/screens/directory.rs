use crate::app::input::helpers::{step_down, step_up, wrap_decrement, wrap_increment};
use crate::app::state::{App, AppScreen, PanelFocus};
use crossterm::event::KeyCode;

pub async fn handle_directory_input(app: &mut App, key: KeyCode) -> color_eyre::Result<()> {
    if app.focus == PanelFocus::Search {
        handle_search_input(app, key);
        return Ok(());
    }

    match key {
        KeyCode::Tab => {
            app.focus = if app.sidebar_visible {
                app.focus.next()
            } else {
                PanelFocus::Results
            };
        }
        KeyCode::Char('/') => {
            app.focus = PanelFocus::Search;
        }
        KeyCode::Char('m') => {
            app.screen = AppScreen::Map;
        }
        KeyCode::Char('t') => {
            app.toggle_theme().await?;
        }
        KeyCode::Char('s') => {
            app.sidebar_visible = !app.sidebar_visible;
            if !app.sidebar_visible {
                app.focus = PanelFocus::Results;
            }
        }
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Esc => {
            // Back to the untouched directory view.
            app.apply_filter(crate::filter::ActiveFilter::All);
            app.selected_category_index = 0;
            app.focus = PanelFocus::Categories;
        }
        KeyCode::Enter => handle_select(app),
        KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown | KeyCode::Home
        | KeyCode::End => handle_navigation(app, key),
        _ => {}
    }

    Ok(())
}

fn handle_navigation(app: &mut App, key: KeyCode) {
    match app.focus {
        PanelFocus::Categories => {
            let len = app.categories.len();
            match key {
                KeyCode::Up => {
                    app.selected_category_index = wrap_decrement(app.selected_category_index, len);
                }
                KeyCode::Down => {
                    app.selected_category_index = wrap_increment(app.selected_category_index, len);
                }
                _ => {}
            }
        }
        PanelFocus::Countries => {
            let len = app.countries.len();
            match key {
                KeyCode::Up => {
                    app.selected_country_index = wrap_decrement(app.selected_country_index, len);
                }
                KeyCode::Down => {
                    app.selected_country_index = wrap_increment(app.selected_country_index, len);
                }
                _ => {}
            }
        }
        PanelFocus::Results => {
            let len = app.visible_len();
            match key {
                KeyCode::Up => {
                    app.selected_result_index = step_up(app.selected_result_index, 1);
                }
                KeyCode::Down => {
                    app.selected_result_index = step_down(app.selected_result_index, 1, len);
                }
                KeyCode::PageUp => {
                    app.selected_result_index = step_up(app.selected_result_index, 5);
                }
                KeyCode::PageDown => {
                    app.selected_result_index = step_down(app.selected_result_index, 5, len);
                }
                KeyCode::Home => {
                    app.selected_result_index = 0;
                }
                KeyCode::End => {
                    if len > 0 {
                        app.selected_result_index = len - 1;
                    }
                }
                _ => {}
            }
        }
        PanelFocus::Search => {}
    }
}

fn handle_select(app: &mut App) {
    match app.focus {
        PanelFocus::Categories => app.select_category(),
        PanelFocus::Countries => app.select_country(),
        PanelFocus::Results => {
            if let Some(&record_index) = app.visible.get(app.selected_result_index) {
                app.open_details(record_index, AppScreen::Directory);
            }
        }
        PanelFocus::Search => {}
    }
}

/// Live search: every edit re-applies the filter, like typing into the
/// search box of the original page.
fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Enter => {
            app.focus = PanelFocus::Results;
        }
        KeyCode::Tab => {
            app.focus = PanelFocus::Categories;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.apply_search();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.apply_search();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{split_countries, Alternative};
    use crate::filter::{distinct_countries, sidebar_categories, ActiveFilter};

    fn test_app() -> App {
        let mut app = App::new();
        app.records = vec![
            Alternative {
                id: 1,
                name: "Qwant".to_string(),
                category: "Search Engine".to_string(),
                countries: split_countries("France"),
                alternative_to: "Google Search".to_string(),
                description: "Private search".to_string(),
                link: "https://www.qwant.com".to_string(),
            },
            Alternative {
                id: 2,
                name: "Ecosia".to_string(),
                category: "Search Engine".to_string(),
                countries: split_countries("Germany"),
                alternative_to: "Google Search".to_string(),
                description: "Tree-planting search".to_string(),
                link: "https://www.ecosia.org".to_string(),
            },
        ];
        app.categories = sidebar_categories(&app.records);
        app.countries = distinct_countries(&app.records);
        app.apply_filter(ActiveFilter::All);
        app
    }

    #[tokio::test]
    async fn typing_in_search_filters_live() {
        let mut app = test_app();
        app.focus = PanelFocus::Search;

        for c in "eco".chars() {
            handle_directory_input(&mut app, KeyCode::Char(c))
                .await
                .unwrap();
        }

        assert_eq!(app.active_filter, ActiveFilter::Search("eco".to_string()));
        assert_eq!(app.visible_len(), 1);

        handle_directory_input(&mut app, KeyCode::Backspace)
            .await
            .unwrap();
        assert_eq!(app.search_input, "ec");
    }

    #[tokio::test]
    async fn enter_on_a_sidebar_country_applies_the_filter() {
        let mut app = test_app();
        app.focus = PanelFocus::Countries;
        app.selected_country_index = 0; // "France"

        handle_directory_input(&mut app, KeyCode::Enter)
            .await
            .unwrap();

        assert_eq!(app.active_filter, ActiveFilter::Country("France".to_string()));
        assert_eq!(app.visible_len(), 1);
    }

    #[tokio::test]
    async fn enter_on_a_result_opens_its_detail_view() {
        let mut app = test_app();
        app.focus = PanelFocus::Results;
        app.selected_result_index = 1;

        handle_directory_input(&mut app, KeyCode::Enter)
            .await
            .unwrap();

        assert_eq!(app.screen, AppScreen::Details);
        assert_eq!(app.detail_record().map(|r| r.id), Some(2));
    }

    #[tokio::test]
    async fn escape_resets_to_the_full_directory() {
        let mut app = test_app();
        app.focus = PanelFocus::Search;
        handle_directory_input(&mut app, KeyCode::Char('x'))
            .await
            .unwrap();
        assert_eq!(app.visible_len(), 0);

        handle_directory_input(&mut app, KeyCode::Esc).await.unwrap();
        handle_directory_input(&mut app, KeyCode::Esc).await.unwrap();

        assert_eq!(app.active_filter, ActiveFilter::All);
        assert_eq!(app.visible_len(), 2);
    }

    #[tokio::test]
    async fn hiding_the_sidebar_moves_focus_to_results() {
        let mut app = test_app();
        app.focus = PanelFocus::Categories;

        handle_directory_input(&mut app, KeyCode::Char('s'))
            .await
            .unwrap();

        assert!(!app.sidebar_visible);
        assert_eq!(app.focus, PanelFocus::Results);
    }
}
