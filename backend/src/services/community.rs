//! Community service
//!
//! Posts and comments may be anonymous; masking is applied here, on the way
//! out, so the stored author is always real and ownership checks keep
//! working on anonymous posts.

use crate::auth::ownership;
use crate::error::ApiError;
use crate::repositories::{
    CommentRecord, CreatePost, PostFilter, PostRecord, PostRepository,
};
use mindwell_shared::models::PostCategory;
use mindwell_shared::types::{
    AuthorView, CommentResponse, CreateCommentRequest, CreatePostRequest, LikeResponse,
    PostListQuery, PostListResponse, PostResponse, ResolveResponse,
};
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

const DEFAULT_PAGE_SIZE: i64 = 10;
const ANONYMOUS_NAME: &str = "Anonymous";

/// Community service
pub struct CommunityService;

impl CommunityService {
    /// Page of posts matching the query, newest first
    pub async fn list(pool: &PgPool, query: PostListQuery) -> Result<PostListResponse, ApiError> {
        let page = query.page.unwrap_or(1).max(1);
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, 100);
        let offset = (page - 1) * limit;

        let filter = PostFilter {
            category: query.category,
            tags: query.tags.map(|t| {
                t.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
            resolved: match query.resolved.as_deref() {
                Some("true") => Some(true),
                Some("false") => Some(false),
                _ => None,
            },
        };

        let records = PostRepository::list(pool, &filter, limit, offset)
            .await
            .map_err(ApiError::Internal)?;
        let total = PostRepository::count(pool, &filter)
            .await
            .map_err(ApiError::Internal)?;

        let post_ids: Vec<Uuid> = records.iter().map(|p| p.id).collect();
        let comments = PostRepository::comments_for_posts(pool, &post_ids)
            .await
            .map_err(ApiError::Internal)?;

        let mut by_post: HashMap<Uuid, Vec<CommentRecord>> = HashMap::new();
        for comment in comments {
            by_post.entry(comment.post_id).or_default().push(comment);
        }

        let posts = records
            .into_iter()
            .map(|record| {
                let comments = by_post.remove(&record.id).unwrap_or_default();
                to_post_response(record, comments)
            })
            .collect();

        Ok(PostListResponse {
            posts,
            total_pages: (total + limit - 1) / limit,
            current_page: page,
        })
    }

    /// Single post with its comments
    pub async fn get(pool: &PgPool, post_id: Uuid) -> Result<PostResponse, ApiError> {
        let record = PostRepository::find_by_id(pool, post_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

        let comments = PostRepository::comments_for_posts(pool, &[post_id])
            .await
            .map_err(ApiError::Internal)?;

        Ok(to_post_response(record, comments))
    }

    /// Create a post for the caller
    pub async fn create(
        pool: &PgPool,
        author_id: Uuid,
        req: CreatePostRequest,
    ) -> Result<PostResponse, ApiError> {
        let (title, content) = match (req.title, req.content) {
            (Some(t), Some(c)) if !t.is_empty() && !c.is_empty() => (t, c),
            _ => {
                return Err(ApiError::Validation(
                    "Please provide all required fields".to_string(),
                ))
            }
        };

        let category = match req.category {
            Some(raw) => raw
                .parse::<PostCategory>()
                .map_err(|_| ApiError::Validation("Invalid category".to_string()))?,
            None => PostCategory::default(),
        };

        let record = PostRepository::create(
            pool,
            CreatePost {
                author_id,
                title,
                content,
                is_anonymous: req.is_anonymous.unwrap_or(false),
                category: category.as_str().to_string(),
                seeking_advice: req.seeking_advice.unwrap_or(true),
                tags: req.tags.unwrap_or_default(),
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(to_post_response(record, Vec::new()))
    }

    /// Comment on a post. Open to any authenticated identity.
    pub async fn add_comment(
        pool: &PgPool,
        author_id: Uuid,
        post_id: Uuid,
        req: CreateCommentRequest,
    ) -> Result<CommentResponse, ApiError> {
        let content = req
            .content
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ApiError::Validation("Please provide all required fields".to_string()))?;

        PostRepository::find_by_id(pool, post_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

        let record = PostRepository::add_comment(
            pool,
            post_id,
            author_id,
            &content,
            req.is_anonymous.unwrap_or(false),
            req.is_helpful.unwrap_or(false),
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(to_comment_response(record))
    }

    /// Toggle the caller's like on a post. Open to any authenticated
    /// identity.
    pub async fn toggle_like(
        pool: &PgPool,
        user_id: Uuid,
        post_id: Uuid,
    ) -> Result<LikeResponse, ApiError> {
        PostRepository::find_by_id(pool, post_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

        let already_liked = PostRepository::has_liked(pool, post_id, user_id)
            .await
            .map_err(ApiError::Internal)?;

        if already_liked {
            PostRepository::remove_like(pool, post_id, user_id)
                .await
                .map_err(ApiError::Internal)?;
        } else {
            PostRepository::add_like(pool, post_id, user_id)
                .await
                .map_err(ApiError::Internal)?;
        }

        let likes = PostRepository::count_likes(pool, post_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(LikeResponse {
            likes,
            user_liked: !already_liked,
        })
    }

    /// Toggle the resolved flag. Only the author may.
    pub async fn resolve(
        pool: &PgPool,
        user_id: Uuid,
        post_id: Uuid,
    ) -> Result<ResolveResponse, ApiError> {
        let record = PostRepository::find_by_id(pool, post_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Post not found".to_string()))?;

        ownership::ensure_owner(record.author_id, user_id)?;

        let resolved = !record.resolved;
        PostRepository::set_resolved(pool, post_id, resolved)
            .await
            .map_err(ApiError::Internal)?;

        Ok(ResolveResponse { resolved })
    }
}

fn author_view(name: String, is_anonymous: bool) -> AuthorView {
    AuthorView {
        name: if is_anonymous {
            ANONYMOUS_NAME.to_string()
        } else {
            name
        },
    }
}

fn to_post_response(record: PostRecord, comments: Vec<CommentRecord>) -> PostResponse {
    PostResponse {
        id: record.id.to_string(),
        title: record.title,
        content: record.content,
        author: author_view(record.author_name, record.is_anonymous),
        is_anonymous: record.is_anonymous,
        category: record.category,
        seeking_advice: record.seeking_advice,
        tags: record.tags,
        likes: record.like_count,
        comments: comments.into_iter().map(to_comment_response).collect(),
        resolved: record.resolved,
        created_at: record.created_at,
    }
}

fn to_comment_response(record: CommentRecord) -> CommentResponse {
    CommentResponse {
        id: record.id.to_string(),
        content: record.content,
        author: author_view(record.author_name, record.is_anonymous),
        is_anonymous: record.is_anonymous,
        is_helpful: record.is_helpful,
        created_at: record.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_post(is_anonymous: bool) -> PostRecord {
        PostRecord {
            id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            author_name: "Ann".to_string(),
            title: "Sleepless nights".to_string(),
            content: "Can't stop replaying conversations".to_string(),
            is_anonymous,
            category: "Overthinking".to_string(),
            seeking_advice: true,
            tags: vec!["sleep".to_string()],
            resolved: false,
            like_count: 3,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_anonymous_author_is_masked() {
        let response = to_post_response(sample_post(true), Vec::new());
        assert_eq!(response.author.name, "Anonymous");
    }

    #[test]
    fn test_named_author_is_shown() {
        let response = to_post_response(sample_post(false), Vec::new());
        assert_eq!(response.author.name, "Ann");
    }

    #[test]
    fn test_anonymous_comment_is_masked() {
        let comment = CommentRecord {
            id: Uuid::new_v4(),
            post_id: Uuid::new_v4(),
            author_id: Uuid::new_v4(),
            author_name: "Ben".to_string(),
            content: "Same here".to_string(),
            is_anonymous: true,
            is_helpful: false,
            created_at: Utc::now(),
        };
        assert_eq!(to_comment_response(comment).author.name, "Anonymous");
    }
}
