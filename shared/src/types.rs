//! API request and response types
//!
//! Field names follow the JSON casing the existing clients already send and
//! expect (camelCase), so most bodies carry `rename_all = "camelCase"`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// API error response; the wire shape is always a flat `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Plain status message, used by delete/cancel endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

// ============================================================================
// Auth
// ============================================================================

/// Signup request; fields are optional so missing ones surface as a 400
/// with the legacy message instead of a body-deserialization rejection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Public identity summary embedded in auth responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Token + identity returned by signup and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserSummary,
}

/// Current-user profile; never carries the password hash
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Response for the token verification probe
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCheckResponse {
    pub valid: bool,
    pub user_id: String,
}

// ============================================================================
// Journal
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJournalRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub mood: Option<String>,
    pub overthinking_level: Option<String>,
    #[serde(default)]
    pub triggers: Option<Vec<String>>,
    pub reframed_thoughts: Option<String>,
    #[serde(default)]
    pub action_steps: Option<Vec<String>>,
    pub reflection_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    pub overthinking_level: String,
    pub triggers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reframed_thoughts: Option<String>,
    pub action_steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reflection_notes: Option<String>,
    pub date: DateTime<Utc>,
}

// ============================================================================
// Mood
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMoodRequest {
    pub mood: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntryResponse {
    pub id: String,
    pub mood: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub date: DateTime<Utc>,
}

// ============================================================================
// Meditation
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeditationQuery {
    pub category: Option<String>,
    pub duration: Option<String>,
    pub refresh: Option<String>,
}

/// A meditation exercise; YouTube-sourced entries have no stored id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeditationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub category: String,
    pub video_url: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorites: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteExerciseRequest {
    pub feedback: Option<String>,
    pub effectiveness_rating: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompleteExerciseResponse {
    pub success: bool,
    pub message: String,
}

/// Favorite toggle request; `action` is "add" or "remove"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRequest {
    pub action: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteResponse {
    pub success: bool,
    pub message: String,
    pub favorites: i32,
}

// ============================================================================
// Chat
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

/// One chat turn; `sender` is "user" or "ai"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResetResponse {
    pub message: String,
}

// ============================================================================
// Community
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub category: Option<String>,
    /// Comma-separated tag list
    pub tags: Option<String>,
    pub resolved: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub is_anonymous: Option<bool>,
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    pub seeking_advice: Option<bool>,
}

/// Post/comment author as shown to readers; anonymous authors are masked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorView {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub content: String,
    pub author: AuthorView,
    pub is_anonymous: bool,
    pub is_helpful: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: AuthorView,
    pub is_anonymous: bool,
    pub category: String,
    pub seeking_advice: bool,
    pub tags: Vec<String>,
    pub likes: i64,
    pub comments: Vec<CommentResponse>,
    pub resolved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub total_pages: i64,
    pub current_page: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub content: Option<String>,
    pub is_anonymous: Option<bool>,
    pub is_helpful: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub likes: i64,
    pub user_liked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub resolved: bool,
}

// ============================================================================
// Tools
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub completed: bool,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeCompleteResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReframeRequest {
    pub thought: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReframeResponse {
    pub original: String,
    pub reframed: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeEmotionRequest {
    pub text: Option<String>,
}

/// Structured emotion analysis; also the fallback shape when the upstream
/// reply cannot be parsed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionAnalysis {
    pub primary_emotion: String,
    pub reflection: String,
    pub suggestions: Vec<String>,
    pub intensity: i32,
}

// ============================================================================
// Sleep
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSleepRequest {
    pub sleep_time: Option<String>,
    pub wake_time: Option<String>,
    pub duration: Option<f64>,
    pub quality: Option<i32>,
    pub notes: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSleepRequest {
    pub sleep_time: Option<String>,
    pub wake_time: Option<String>,
    pub duration: Option<f64>,
    pub quality: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepRecordResponse {
    pub id: String,
    pub date: DateTime<Utc>,
    pub sleep_time: String,
    pub wake_time: String,
    pub duration: f64,
    pub quality: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ============================================================================
// Therapy
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TherapistQuery {
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TherapistResponse {
    pub id: String,
    pub name: String,
    pub title: String,
    pub specialties: Vec<String>,
    pub experience: String,
    pub bio: String,
    pub image: String,
    pub availability: Vec<String>,
    pub price: f64,
    pub rating: f64,
    pub reviews: i32,
}

/// Therapist fields embedded in appointment listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TherapistSummary {
    pub id: String,
    pub name: String,
    pub title: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    pub therapist_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub concerns: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAppointmentRequest {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub concerns: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentResponse {
    pub id: String,
    pub therapist: TherapistSummary,
    pub date: NaiveDate,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concerns: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_is_flat() {
        let body = ErrorBody {
            error: "No token, authorization denied".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "No token, authorization denied"})
        );
    }

    #[test]
    fn user_profile_has_no_password_field() {
        let profile = UserProfile {
            id: "abc".into(),
            name: "Ann".into(),
            email: "a@x.com".into(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["name"], "Ann");
    }

    #[test]
    fn challenge_serializes_type_field() {
        let challenge = Challenge {
            id: "1".into(),
            title: "Gratitude Practice".into(),
            description: "Write down 3 things you are grateful for today".into(),
            kind: "gratitude".into(),
            completed: false,
            date: Utc::now(),
        };
        let json = serde_json::to_value(&challenge).unwrap();
        assert_eq!(json["type"], "gratitude");
    }

    #[test]
    fn emotion_analysis_uses_camel_case() {
        let analysis = EmotionAnalysis {
            primary_emotion: "anxious".into(),
            reflection: "that sounds hard".into(),
            suggestions: vec!["breathe".into()],
            intensity: 6,
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("primaryEmotion").is_some());
        assert!(json.get("primary_emotion").is_none());
    }
}
