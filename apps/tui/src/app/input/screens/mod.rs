mod details;
mod directory;
mod help;
mod map;

use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub async fn dispatch_input(app: &mut App, key: KeyCode) -> color_eyre::Result<()> {
    if help::handle_help_toggle(app, key) {
        return Ok(());
    }

    match app.screen {
        AppScreen::Directory => directory::handle_directory_input(app, key).await?,
        AppScreen::Details => details::handle_details_input(app, key),
        AppScreen::Map => map::handle_map_input(app, key).await?,
    }

    Ok(())
}
