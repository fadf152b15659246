use crate::config::{debug_log, init_app_config};
use crate::db::seed::SeedRecord;
use color_eyre::Result;
use sqlx::{
    migrate::MigrateDatabase, query, query_scalar, sqlite::SqlitePoolOptions, Sqlite, SqlitePool,
};

/// Sets up the database by creating the necessary tables if they don't exist
pub async fn setup_database(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // The directory itself; read-only after seeding.
    query(
        "CREATE TABLE IF NOT EXISTS alternative (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            country TEXT NOT NULL,
            alternative_to TEXT NOT NULL,
            description TEXT NOT NULL,
            link TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    // Key/value store for user preferences (theme).
    query(
        "CREATE TABLE IF NOT EXISTS preference (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Creates a database connection pool using the database URL from config
pub async fn create_database_pool() -> Result<SqlitePool> {
    let database_url = init_app_config()?;

    debug_log(&format!("Initializing database with URL: {database_url}"));

    let db_exists = match Sqlite::database_exists(&database_url).await {
        Ok(exists) => exists,
        Err(e) => {
            return Err(color_eyre::eyre::eyre!("Error checking database: {e}"));
        }
    };

    if !db_exists {
        debug_log("Database does not exist, creating it now");
        Sqlite::create_database(&database_url)
            .await
            .map_err(|e| color_eyre::eyre::eyre!("Failed to create SQLite database: {e}"))?;
    }

    let pool = connect_pool(&database_url).await?;

    setup_database(&pool)
        .await
        .map_err(|e| color_eyre::eyre::eyre!("Failed to set up database schema: {e}"))?;

    debug_log("Database initialization completed successfully");
    Ok(pool)
}

/// Pool for an explicit URL; used by tests and the seed utility.
pub async fn create_pool_with_url(database_url: &str) -> Result<SqlitePool> {
    let pool = connect_pool(database_url).await?;
    setup_database(&pool)
        .await
        .map_err(|e| color_eyre::eyre::eyre!("Failed to set up database schema: {e}"))?;
    Ok(pool)
}

async fn connect_pool(database_url: &str) -> Result<SqlitePool> {
    // One connection: keeps in-memory databases coherent and is plenty
    // for a single-threaded event loop.
    SqlitePoolOptions::new()
        .max_connections(1)
        .after_connect(|conn, _| {
            Box::pin(async move {
                use sqlx::Executor as _;
                conn.execute("PRAGMA foreign_keys = ON;").await?;
                conn.execute("PRAGMA synchronous = NORMAL;").await?;
                Ok(())
            })
        })
        .connect(database_url)
        .await
        .map_err(|e| color_eyre::eyre::eyre!("Failed to connect to SQLite database: {e}"))
}

/// Inserts the seed dataset if the directory table is empty. Returns
/// how many rows were written; an already-seeded database is left
/// untouched.
pub async fn seed_alternatives(
    pool: &SqlitePool,
    records: &[SeedRecord],
) -> Result<u64, sqlx::Error> {
    let existing: i64 = query_scalar("SELECT COUNT(*) FROM alternative")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        debug_log(&format!("Database already seeded with {existing} records"));
        return Ok(0);
    }

    let mut inserted = 0_u64;
    for record in records {
        query(
            "INSERT INTO alternative (id, name, category, country, alternative_to, description, link)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.category)
        .bind(&record.country)
        .bind(&record.alternative_to)
        .bind(&record.description)
        .bind(&record.link)
        .execute(pool)
        .await?;
        inserted += 1;
    }

    debug_log(&format!("Seeded {inserted} records"));
    Ok(inserted)
}
