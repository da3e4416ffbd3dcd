//! Meditation catalog repository

use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

/// Meditation exercise record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MeditationRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub category: String,
    pub video_url: String,
    pub image_url: String,
    pub favorites: i32,
    pub use_youtube_api: bool,
    pub search_query: String,
}

/// Meditation repository
pub struct MeditationRepository;

impl MeditationRepository {
    /// List exercises, optionally filtered by category and duration
    pub async fn list(
        pool: &PgPool,
        category: Option<&str>,
        duration: Option<&str>,
    ) -> Result<Vec<MeditationRecord>> {
        let records = sqlx::query_as::<_, MeditationRecord>(
            r#"
            SELECT id, title, description, duration, category, video_url,
                   image_url, favorites, use_youtube_api, search_query
            FROM meditations
            WHERE ($1::text IS NULL OR category = $1)
              AND ($2::text IS NULL OR duration = $2)
            ORDER BY title
            "#,
        )
        .bind(category)
        .bind(duration)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Find an exercise by id
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<MeditationRecord>> {
        let record = sqlx::query_as::<_, MeditationRecord>(
            r#"
            SELECT id, title, description, duration, category, video_url,
                   image_url, favorites, use_youtube_api, search_query
            FROM meditations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Distinct categories in the catalog
    pub async fn distinct_categories(pool: &PgPool) -> Result<Vec<String>> {
        let categories =
            sqlx::query_scalar::<_, String>(r#"SELECT DISTINCT category FROM meditations"#)
                .fetch_all(pool)
                .await?;

        Ok(categories)
    }

    /// Adjust the favorites counter; never goes below zero
    pub async fn adjust_favorites(
        pool: &PgPool,
        id: Uuid,
        delta: i32,
    ) -> Result<Option<MeditationRecord>> {
        let record = sqlx::query_as::<_, MeditationRecord>(
            r#"
            UPDATE meditations
            SET favorites = GREATEST(favorites + $2, 0)
            WHERE id = $1
            RETURNING id, title, description, duration, category, video_url,
                      image_url, favorites, use_youtube_api, search_query
            "#,
        )
        .bind(id)
        .bind(delta)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
