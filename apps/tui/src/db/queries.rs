use sqlx::{query, query_as, query_scalar, SqlitePool};

use crate::db::models::AlternativeRow;
use crate::domain::Alternative;

/// Retrieves the whole directory in dataset order (ascending id).
/// Everything downstream relies on this order staying stable.
pub async fn get_alternatives(pool: &SqlitePool) -> Result<Vec<Alternative>, sqlx::Error> {
    let rows = query_as::<_, AlternativeRow>(
        "SELECT id, name, category, country, alternative_to, description, link
         FROM alternative ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(AlternativeRow::into_alternative).collect())
}

pub async fn count_alternatives(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    query_scalar("SELECT COUNT(*) FROM alternative")
        .fetch_one(pool)
        .await
}

pub async fn count_by_category(pool: &SqlitePool) -> Result<Vec<(String, i64)>, sqlx::Error> {
    let rows = query_as::<_, (String, i64)>(
        "SELECT category, COUNT(*) FROM alternative GROUP BY category ORDER BY category",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Reads a persisted preference; `None` when nothing was ever stored.
pub async fn get_preference(
    pool: &SqlitePool,
    key: &str,
) -> Result<Option<String>, sqlx::Error> {
    query_scalar("SELECT value FROM preference WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await
}

pub async fn set_preference(
    pool: &SqlitePool,
    key: &str,
    value: &str,
) -> Result<(), sqlx::Error> {
    query(
        "INSERT INTO preference (key, value) VALUES (?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::{create_pool_with_url, seed_alternatives};
    use crate::db::seed::{parse_seed, BUNDLED_DATASET};

    async fn seeded_pool() -> SqlitePool {
        let pool = create_pool_with_url("sqlite::memory:").await.unwrap();
        let records = parse_seed(BUNDLED_DATASET).unwrap();
        seed_alternatives(&pool, &records).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let pool = create_pool_with_url("sqlite::memory:").await.unwrap();
        let records = parse_seed(BUNDLED_DATASET).unwrap();

        let first = seed_alternatives(&pool, &records).await.unwrap();
        let second = seed_alternatives(&pool, &records).await.unwrap();

        assert_eq!(first as usize, records.len());
        assert_eq!(second, 0);
        assert_eq!(
            count_alternatives(&pool).await.unwrap() as usize,
            records.len()
        );
    }

    #[tokio::test]
    async fn alternatives_come_back_in_dataset_order() {
        let pool = seeded_pool().await;
        let records = get_alternatives(&pool).await.unwrap();

        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);

        // Country lists arrive parsed.
        let airbus = records.iter().find(|r| r.name == "Airbus").unwrap();
        assert_eq!(airbus.countries, vec!["France", "Germany"]);
    }

    #[tokio::test]
    async fn category_counts_cover_every_record() {
        let pool = seeded_pool().await;
        let total = count_alternatives(&pool).await.unwrap();
        let by_category = count_by_category(&pool).await.unwrap();

        assert_eq!(by_category.iter().map(|(_, n)| n).sum::<i64>(), total);
    }

    #[tokio::test]
    async fn preferences_round_trip_and_overwrite() {
        let pool = create_pool_with_url("sqlite::memory:").await.unwrap();

        assert_eq!(get_preference(&pool, "theme").await.unwrap(), None);

        set_preference(&pool, "theme", "dark").await.unwrap();
        assert_eq!(
            get_preference(&pool, "theme").await.unwrap().as_deref(),
            Some("dark")
        );

        set_preference(&pool, "theme", "light").await.unwrap();
        assert_eq!(
            get_preference(&pool, "theme").await.unwrap().as_deref(),
            Some("light")
        );
    }
}
