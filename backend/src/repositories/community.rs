//! Community repository for database operations
//!
//! Posts join the author's display name and a like count; anonymity
//! masking happens in the service layer so the repository always returns
//! the real author.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Post record with author name and like count joined in
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRecord {
    pub id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub title: String,
    pub content: String,
    pub is_anonymous: bool,
    pub category: String,
    pub seeking_advice: bool,
    pub tags: Vec<String>,
    pub resolved: bool,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Comment record with author name joined in
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommentRecord {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub author_name: String,
    pub content: String,
    pub is_anonymous: bool,
    pub is_helpful: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a post
#[derive(Debug, Clone)]
pub struct CreatePost {
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub is_anonymous: bool,
    pub category: String,
    pub seeking_advice: bool,
    pub tags: Vec<String>,
}

/// Listing filter; None fields match everything
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub resolved: Option<bool>,
}

const POST_COLUMNS: &str = r#"
    p.id, p.author_id, u.name AS author_name, p.title, p.content,
    p.is_anonymous, p.category, p.seeking_advice, p.tags, p.resolved,
    (SELECT COUNT(*) FROM post_likes pl WHERE pl.post_id = p.id) AS like_count,
    p.created_at
"#;

/// Community post repository
pub struct PostRepository;

impl PostRepository {
    /// Create a post and return it with joined fields
    pub async fn create(pool: &PgPool, input: CreatePost) -> Result<PostRecord> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO posts (author_id, title, content, is_anonymous, category,
                               seeking_advice, tags)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(input.author_id)
        .bind(&input.title)
        .bind(&input.content)
        .bind(input.is_anonymous)
        .bind(&input.category)
        .bind(input.seeking_advice)
        .bind(&input.tags)
        .fetch_one(pool)
        .await?;

        let record = Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("post vanished after insert"))?;
        Ok(record)
    }

    /// Page of posts matching the filter, newest first
    pub async fn list(
        pool: &PgPool,
        filter: &PostFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PostRecord>> {
        let query = format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts p
            JOIN users u ON u.id = p.author_id
            WHERE ($1::text IS NULL OR p.category = $1)
              AND ($2::text[] IS NULL OR p.tags && $2)
              AND ($3::boolean IS NULL OR p.resolved = $3)
            ORDER BY p.created_at DESC
            LIMIT $4 OFFSET $5
            "#
        );

        let records = sqlx::query_as::<_, PostRecord>(&query)
            .bind(&filter.category)
            .bind(&filter.tags)
            .bind(filter.resolved)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        Ok(records)
    }

    /// Total number of posts matching the filter
    pub async fn count(pool: &PgPool, filter: &PostFilter) -> Result<i64> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)::bigint
            FROM posts p
            WHERE ($1::text IS NULL OR p.category = $1)
              AND ($2::text[] IS NULL OR p.tags && $2)
              AND ($3::boolean IS NULL OR p.resolved = $3)
            "#,
        )
        .bind(&filter.category)
        .bind(&filter.tags)
        .bind(filter.resolved)
        .fetch_one(pool)
        .await?;

        Ok(count.0)
    }

    /// Find a post by id
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<PostRecord>> {
        let query = format!(
            r#"
            SELECT {POST_COLUMNS}
            FROM posts p
            JOIN users u ON u.id = p.author_id
            WHERE p.id = $1
            "#
        );

        let record = sqlx::query_as::<_, PostRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(record)
    }

    /// Comments for a set of posts, oldest first
    pub async fn comments_for_posts(
        pool: &PgPool,
        post_ids: &[Uuid],
    ) -> Result<Vec<CommentRecord>> {
        let records = sqlx::query_as::<_, CommentRecord>(
            r#"
            SELECT c.id, c.post_id, c.author_id, u.name AS author_name,
                   c.content, c.is_anonymous, c.is_helpful, c.created_at
            FROM post_comments c
            JOIN users u ON u.id = c.author_id
            WHERE c.post_id = ANY($1)
            ORDER BY c.created_at ASC
            "#,
        )
        .bind(post_ids)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Add a comment and return it with the author name joined
    pub async fn add_comment(
        pool: &PgPool,
        post_id: Uuid,
        author_id: Uuid,
        content: &str,
        is_anonymous: bool,
        is_helpful: bool,
    ) -> Result<CommentRecord> {
        let record = sqlx::query_as::<_, CommentRecord>(
            r#"
            WITH inserted AS (
                INSERT INTO post_comments (post_id, author_id, content, is_anonymous, is_helpful)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, post_id, author_id, content, is_anonymous, is_helpful, created_at
            )
            SELECT i.id, i.post_id, i.author_id, u.name AS author_name,
                   i.content, i.is_anonymous, i.is_helpful, i.created_at
            FROM inserted i
            JOIN users u ON u.id = i.author_id
            "#,
        )
        .bind(post_id)
        .bind(author_id)
        .bind(content)
        .bind(is_anonymous)
        .bind(is_helpful)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Whether the user has liked the post
    pub async fn has_liked(pool: &PgPool, post_id: Uuid, user_id: Uuid) -> Result<bool> {
        let liked = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM post_likes WHERE post_id = $1 AND user_id = $2)
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(liked)
    }

    /// Record a like; a repeat like is a no-op
    pub async fn add_like(pool: &PgPool, post_id: Uuid, user_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO post_likes (post_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Remove a like
    pub async fn remove_like(pool: &PgPool, post_id: Uuid, user_id: Uuid) -> Result<()> {
        sqlx::query(r#"DELETE FROM post_likes WHERE post_id = $1 AND user_id = $2"#)
            .bind(post_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Number of likes on a post
    pub async fn count_likes(pool: &PgPool, post_id: Uuid) -> Result<i64> {
        let count: (i64,) =
            sqlx::query_as(r#"SELECT COUNT(*)::bigint FROM post_likes WHERE post_id = $1"#)
                .bind(post_id)
                .fetch_one(pool)
                .await?;

        Ok(count.0)
    }

    /// Set the resolved flag
    pub async fn set_resolved(pool: &PgPool, post_id: Uuid, resolved: bool) -> Result<()> {
        sqlx::query(r#"UPDATE posts SET resolved = $2 WHERE id = $1"#)
            .bind(post_id)
            .bind(resolved)
            .execute(pool)
            .await?;

        Ok(())
    }
}
