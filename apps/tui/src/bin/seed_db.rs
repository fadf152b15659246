use color_eyre::Result;
use dotenv::dotenv;
use std::env;

use euroalt_tui::config::get_data_file;
use euroalt_tui::db::queries::{count_alternatives, count_by_category};
use euroalt_tui::db::seed::{parse_seed, BUNDLED_DATASET};
use euroalt_tui::db::{create_pool_with_url, seed_alternatives};

/// Seeds a directory database from the bundled dataset (or DATA_FILE)
/// and prints what landed in it.
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    println!("Seeding the directory database...");

    let db_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "euroalt.db".to_string());
    // mode=rwc so a missing database file is created.
    let database_url = format!("sqlite:{db_name}?mode=rwc");

    let pool = create_pool_with_url(&database_url).await?;

    let dataset = match get_data_file() {
        Some(path) => std::fs::read_to_string(path)?,
        None => BUNDLED_DATASET.to_string(),
    };
    let records = parse_seed(&dataset)?;

    let inserted = seed_alternatives(&pool, &records).await?;
    println!("Inserted {inserted} records into {db_name}");

    let total = count_alternatives(&pool).await?;
    println!("Total alternatives: {total}");

    println!("\nBy category:");
    for (category, count) in count_by_category(&pool).await? {
        println!("- {category}: {count}");
    }

    Ok(())
}
