//! Meditation catalog service
//!
//! The stored catalog can be augmented with YouTube search results; a
//! failed or unconfigured YouTube lookup degrades to the stored catalog
//! alone, never to an error.

use crate::config::YouTubeConfig;
use crate::error::ApiError;
use crate::repositories::{MeditationRecord, MeditationRepository};
use mindwell_shared::types::{
    CompleteExerciseRequest, CompleteExerciseResponse, FavoriteRequest, FavoriteResponse,
    MeditationQuery, MeditationResponse,
};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

const YOUTUBE_MAX_RESULTS: u32 = 5;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: VideoId,
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct VideoId {
    #[serde(rename = "videoId")]
    video_id: String,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    description: String,
    thumbnails: Thumbnails,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    high: Thumbnail,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

/// Meditation service
pub struct MeditationService;

impl MeditationService {
    /// List exercises; `refresh=true` additionally pulls fresh YouTube
    /// results for every known category
    pub async fn list(
        pool: &PgPool,
        http: &reqwest::Client,
        youtube: &YouTubeConfig,
        query: MeditationQuery,
    ) -> Result<Vec<MeditationResponse>, ApiError> {
        let stored = MeditationRepository::list(
            pool,
            query.category.as_deref(),
            query.duration.as_deref(),
        )
        .await
        .map_err(ApiError::Internal)?;

        let mut results: Vec<MeditationResponse> = stored.into_iter().map(to_response).collect();

        if query.refresh.as_deref() == Some("true") {
            let categories = MeditationRepository::distinct_categories(pool)
                .await
                .map_err(ApiError::Internal)?;
            for category in categories {
                results.extend(search_youtube(http, youtube, &category).await);
            }
        }

        Ok(results)
    }

    /// Single exercise by id
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<MeditationResponse, ApiError> {
        let record = MeditationRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Exercise not found".to_string()))?;

        Ok(to_response(record))
    }

    /// Record a completion
    pub async fn complete(
        pool: &PgPool,
        id: Uuid,
        _req: CompleteExerciseRequest,
    ) -> Result<CompleteExerciseResponse, ApiError> {
        MeditationRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Exercise not found".to_string()))?;

        Ok(CompleteExerciseResponse {
            success: true,
            message: "Completion recorded".to_string(),
        })
    }

    /// Add or remove a favorite
    pub async fn favorite(
        pool: &PgPool,
        id: Uuid,
        req: FavoriteRequest,
    ) -> Result<FavoriteResponse, ApiError> {
        let action = req
            .action
            .filter(|a| a == "add" || a == "remove")
            .ok_or_else(|| ApiError::Validation("Invalid action".to_string()))?;

        let delta = if action == "add" { 1 } else { -1 };

        let record = MeditationRepository::adjust_favorites(pool, id, delta)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Meditation not found".to_string()))?;

        Ok(FavoriteResponse {
            success: true,
            message: format!(
                "Meditation {} favorites",
                if action == "add" {
                    "added to"
                } else {
                    "removed from"
                }
            ),
            favorites: record.favorites,
        })
    }

    /// Fresh YouTube results for one category
    pub async fn refresh_youtube(
        http: &reqwest::Client,
        youtube: &YouTubeConfig,
        category: Option<String>,
    ) -> Vec<MeditationResponse> {
        let query = category.unwrap_or_else(|| "meditation".to_string());
        search_youtube(http, youtube, &query).await
    }
}

/// Search YouTube for meditation videos in a category. Errors degrade to an
/// empty list.
async fn search_youtube(
    http: &reqwest::Client,
    config: &YouTubeConfig,
    category: &str,
) -> Vec<MeditationResponse> {
    let Some(api_key) = config.api_key.as_deref() else {
        return Vec::new();
    };

    let url = format!(
        "{}/youtube/v3/search",
        config.endpoint.trim_end_matches('/')
    );

    let max_results = YOUTUBE_MAX_RESULTS.to_string();
    let search_terms = format!("{category} meditation");

    let result = async {
        let response = http
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("maxResults", max_results.as_str()),
                ("q", search_terms.as_str()),
                ("type", "video"),
                ("videoDuration", "medium"),
                ("key", api_key),
            ])
            .send()
            .await?
            .error_for_status()?;

        response.json::<SearchResponse>().await
    }
    .await;

    match result {
        Ok(parsed) => parsed
            .items
            .into_iter()
            .map(|item| MeditationResponse {
                id: None,
                title: item.snippet.title,
                description: item.snippet.description,
                duration: "Variable".to_string(),
                category: category.to_string(),
                video_url: format!("https://www.youtube.com/embed/{}", item.id.video_id),
                image_url: item.snippet.thumbnails.high.url,
                favorites: None,
            })
            .collect(),
        Err(e) => {
            warn!(error = %e, category, "YouTube search failed");
            Vec::new()
        }
    }
}

fn to_response(record: MeditationRecord) -> MeditationResponse {
    MeditationResponse {
        id: Some(record.id.to_string()),
        title: record.title,
        description: record.description,
        duration: record.duration,
        category: record.category,
        video_url: record.video_url,
        image_url: record.image_url,
        favorites: Some(record.favorites),
    }
}
