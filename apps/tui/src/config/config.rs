use color_eyre::eyre::eyre;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Initializes the application configuration and returns the database URL.
pub fn init_app_config() -> color_eyre::eyre::Result<String> {
    // Load environment variables from .env file
    dotenv().ok();

    let base_dir: PathBuf = env::current_dir()?;

    let db_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "euroalt.db".to_string());
    let database_path = base_dir.join(&db_name);

    if let Some(parent) = database_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // No canonicalize() here: the file might not exist yet.
    let path_str = database_path
        .to_str()
        .ok_or_else(|| eyre!("Invalid database path"))?
        .to_string();

    // SQLx URL format:
    // - absolute paths: sqlite:///absolute/path/to/file.db (3 slashes total)
    // - relative paths: sqlite://relative/path/to/file.db (2 slashes total)
    let clean_path = path_str.trim_start_matches('/');

    let database_url = if database_path.is_absolute() {
        debug_log(&format!("Using absolute database path: {path_str}"));
        format!("sqlite:///{clean_path}")
    } else {
        debug_log(&format!("Using relative database path: {path_str}"));
        format!("sqlite://{clean_path}")
    };

    Ok(database_url)
}

/// Optional path to a seed dataset overriding the bundled one.
pub fn get_data_file() -> Option<PathBuf> {
    env::var("DATA_FILE").ok().map(PathBuf::from)
}

pub fn debug_enabled() -> bool {
    env::var("DEBUG").is_ok_and(|value| !value.is_empty() && value != "0")
}

pub fn debug_log(message: &str) {
    if debug_enabled() {
        eprintln!("[DEBUG] {message}");
    }
}
