use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "euroalt", version, about = "European alternatives directory TUI")]
pub struct CliArgs {
    /// Print directory stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless output as JSON (the web dashboard export)
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override database path
    #[arg(long, value_name = "PATH")]
    pub db: Option<String>,

    /// Override the seed dataset file
    #[arg(long = "data", value_name = "PATH")]
    pub data: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(db) = &self.db {
            std::env::set_var("DATABASE_NAME", db);
        }
        if let Some(data) = &self.data {
            std::env::set_var("DATA_FILE", data);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }
}
