//! Wellness companion chat service
//!
//! Conversations are stateless: every session starts fresh and nothing is
//! persisted. The AI reply is a pass-through of the upstream text; when the
//! upstream is unavailable a canned response is returned instead of an
//! error.

use crate::ai::GeminiClient;
use mindwell_shared::types::{ChatMessage, ChatResetResponse};
use tracing::warn;

const WELCOME_MESSAGE: &str =
    "Hi there! I'm your mental wellness companion. How are you feeling today?";

const FALLBACK_REPLY: &str =
    "I'm sorry, I'm having trouble processing your request right now. Please try again in a moment.";

const CHAT_TEMPERATURE: f32 = 0.7;
const CHAT_MAX_TOKENS: u32 = 500;

/// Chat service
pub struct ChatService;

impl ChatService {
    /// Fresh conversation: a single welcome message
    pub fn welcome() -> Vec<ChatMessage> {
        vec![ChatMessage {
            sender: "ai".to_string(),
            message: WELCOME_MESSAGE.to_string(),
        }]
    }

    /// Send one message and get the AI reply
    pub async fn respond(ai: &GeminiClient, message: &str) -> ChatMessage {
        let reply = match ai.generate(message, CHAT_TEMPERATURE, CHAT_MAX_TOKENS).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "chat upstream failed, using fallback reply");
                FALLBACK_REPLY.to_string()
            }
        };

        ChatMessage {
            sender: "ai".to_string(),
            message: reply,
        }
    }

    /// Reset is a no-op since nothing is stored, but the endpoint is kept
    /// for API completeness
    pub fn reset() -> ChatResetResponse {
        ChatResetResponse {
            message: "Chat reset successful".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AiConfig;

    #[test]
    fn test_welcome_is_single_ai_message() {
        let messages = ChatService::welcome();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, "ai");
    }

    #[tokio::test]
    async fn test_unconfigured_upstream_falls_back() {
        let ai = GeminiClient::new(&AiConfig {
            api_key: None,
            ..AiConfig::default()
        });

        let reply = ChatService::respond(&ai, "I feel anxious").await;
        assert_eq!(reply.sender, "ai");
        assert_eq!(reply.message, FALLBACK_REPLY);
    }
}
