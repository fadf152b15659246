mod app;
mod atlas;
mod cli;
mod config;
mod db;
mod domain;
mod event;
mod filter;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = cli::CliArgs::parse();
    args.apply_env_overrides();

    // Initialize application state
    let mut app = App::new();

    // No terminal (or asked not to use one): print stats / export.
    if args.headless || !is_terminal() {
        return event::run_headless(&mut app, args.json).await;
    }

    if let Err(e) = app.initialize().await {
        eprintln!("Error initializing the directory: {e}");
        return Err(e);
    }

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Run the application
    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
