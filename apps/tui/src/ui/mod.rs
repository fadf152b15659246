// UI module for euroalt
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    if app.show_help {
        screens::help::render_help(app, f);
        return;
    }

    match app.screen {
        AppScreen::Directory => screens::directory::render_directory(app, f),
        AppScreen::Details => screens::details::render_details(app, f),
        AppScreen::Map => screens::map::render_map(app, f),
    }
}
