use color_eyre::Result;
use sqlx::SqlitePool;

use crate::config::get_data_file;
use crate::db::queries::{get_alternatives, get_preference, set_preference};
use crate::db::seed::{parse_seed, SeedRecord, BUNDLED_DATASET};
use crate::db::{create_database_pool, seed_alternatives};
use crate::domain::{Alternative, Theme};

pub const THEME_PREFERENCE_KEY: &str = "theme";

/// Async facade over storage. The pool is optional: when the database
/// cannot be opened the directory still runs off the bundled dataset,
/// it just stops persisting preferences.
#[derive(Debug, Default)]
pub struct DirectoryActions {
    pub db_pool: Option<SqlitePool>,
}

impl DirectoryActions {
    pub const fn new() -> Self {
        Self { db_pool: None }
    }

    /// Opens the pool and seeds the directory on first run.
    pub async fn initialize(&mut self) -> Result<()> {
        let records = load_seed_records()?;
        let pool = create_database_pool().await?;
        seed_alternatives(&pool, &records).await?;
        self.db_pool = Some(pool);
        Ok(())
    }

    pub async fn load_alternatives(&self) -> Result<Vec<Alternative>> {
        match &self.db_pool {
            Some(pool) => Ok(get_alternatives(pool).await?),
            None => Ok(load_seed_records()?
                .into_iter()
                .map(SeedRecord::into_alternative)
                .collect()),
        }
    }

    /// Stored theme, or the light default when nothing was persisted.
    pub async fn load_theme(&self) -> Result<Theme> {
        let Some(pool) = &self.db_pool else {
            return Ok(Theme::default());
        };

        let stored = get_preference(pool, THEME_PREFERENCE_KEY).await?;
        Ok(stored.as_deref().map_or_else(Theme::default, Theme::parse))
    }

    pub async fn store_theme(&self, theme: Theme) -> Result<()> {
        if let Some(pool) = &self.db_pool {
            set_preference(pool, THEME_PREFERENCE_KEY, theme.as_str()).await?;
        }
        Ok(())
    }
}

fn load_seed_records() -> Result<Vec<SeedRecord>> {
    match get_data_file() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            Ok(parse_seed(&json)?)
        }
        None => Ok(parse_seed(BUNDLED_DATASET)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool_with_url;

    #[tokio::test]
    async fn theme_defaults_to_light_then_persists_dark() {
        let pool = create_pool_with_url("sqlite::memory:").await.unwrap();
        let actions = DirectoryActions {
            db_pool: Some(pool),
        };

        assert_eq!(actions.load_theme().await.unwrap(), Theme::Light);

        actions.store_theme(Theme::Dark).await.unwrap();
        assert_eq!(actions.load_theme().await.unwrap(), Theme::Dark);

        let stored = get_preference(
            actions.db_pool.as_ref().unwrap(),
            THEME_PREFERENCE_KEY,
        )
        .await
        .unwrap();
        assert_eq!(stored.as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn missing_pool_degrades_to_session_only_theme() {
        let actions = DirectoryActions::new();
        assert_eq!(actions.load_theme().await.unwrap(), Theme::Light);
        actions.store_theme(Theme::Dark).await.unwrap();
        // Nothing persisted, nothing failed.
        assert_eq!(actions.load_theme().await.unwrap(), Theme::Light);
    }

    #[tokio::test]
    async fn bundled_dataset_loads_without_a_database() {
        let actions = DirectoryActions::new();
        let records = actions.load_alternatives().await.unwrap();
        assert!(!records.is_empty());
        assert!(records.iter().any(|r| r.countries.len() > 1));
    }
}
