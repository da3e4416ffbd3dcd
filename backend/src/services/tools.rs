//! Self-help tools: daily challenges, thought reframing, emotion analysis
//!
//! Reframing and analysis delegate the actual work to the generative
//! upstream and format its text/JSON output. Every upstream failure mode
//! has a canned fallback so the endpoints stay useful offline.

use crate::ai::GeminiClient;
use chrono::Utc;
use mindwell_shared::types::{
    Challenge, ChallengeCompleteResponse, EmotionAnalysis, ReframeResponse,
};
use tracing::warn;

const TOOLS_TEMPERATURE: f32 = 0.7;
const TOOLS_MAX_TOKENS: u32 = 500;

const REFRAME_FALLBACK: &str = "I'm having trouble reframing that thought right now. Remember that all thoughts are temporary, and negative thoughts aren't always accurate reflections of reality.";

/// Tools service
pub struct ToolsService;

impl ToolsService {
    /// Today's challenge list. Static for now; completion tracking per user
    /// would need its own table first.
    pub fn challenges() -> Vec<Challenge> {
        let today = Utc::now();
        let entries = [
            (
                "1",
                "Gratitude Practice",
                "Write down 3 things you are grateful for today",
                "gratitude",
            ),
            (
                "2",
                "Deep Breathing",
                "Take 5 deep breaths, holding each for 5 seconds",
                "mindfulness",
            ),
            (
                "3",
                "Thought Check",
                "Notice one recurring worry and write down the evidence for and against it",
                "reframing",
            ),
            (
                "4",
                "Screen-Free Evening",
                "Put screens away 30 minutes before bed",
                "sleep",
            ),
        ];

        entries
            .into_iter()
            .map(|(id, title, description, kind)| Challenge {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                kind: kind.to_string(),
                completed: false,
                date: today,
            })
            .collect()
    }

    /// Mark a challenge complete
    pub fn complete_challenge(challenge_id: &str, user_id: &str) -> ChallengeCompleteResponse {
        tracing::info!(challenge_id, user_id, "challenge completed");
        ChallengeCompleteResponse {
            success: true,
            message: "Challenge completed successfully".to_string(),
        }
    }

    /// Reframe a negative thought into a balanced one
    pub async fn reframe(ai: &GeminiClient, thought: &str) -> ReframeResponse {
        let prompt = format!(
            "As an overthinking management coach, help reframe this negative thought into a more balanced, positive perspective. Keep your response concise (max 2-3 sentences) and empathetic. Only return the reframed thought, nothing else.\n\nOriginal thought: \"{thought}\"\n\nReframed thought:"
        );

        let reframed = match ai.generate(&prompt, TOOLS_TEMPERATURE, TOOLS_MAX_TOKENS).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "reframe upstream failed, using fallback");
                REFRAME_FALLBACK.to_string()
            }
        };

        ReframeResponse {
            original: thought.to_string(),
            reframed,
        }
    }

    /// Analyze the emotional state expressed in free text
    pub async fn analyze_emotion(ai: &GeminiClient, text: &str) -> EmotionAnalysis {
        let prompt = format!(
            "As an emotional intelligence coach, analyze this person's emotional state from their text. Return your analysis in the following JSON format only:\n{{\n  \"primaryEmotion\": \"the main emotion they seem to be experiencing\",\n  \"reflection\": \"a 1-2 sentence empathetic reflection that validates their feelings\",\n  \"suggestions\": [\"3-4 short, actionable suggestions to help manage this emotion\", \"suggestion 2\", \"suggestion 3\"],\n  \"intensity\": a number from 1-10 representing the intensity of their emotion\n}}\n\nTheir text: \"{text}\"\n\nJSON response:"
        );

        let raw = match ai.generate(&prompt, TOOLS_TEMPERATURE, TOOLS_MAX_TOKENS).await {
            Ok(text) => text,
            Err(e) => {
                warn!(error = %e, "emotion analysis upstream failed, using fallback");
                return EmotionAnalysis {
                    primary_emotion: "unclear".to_string(),
                    reflection: "I'm having trouble analyzing your emotions right now, but what you're feeling is important.".to_string(),
                    suggestions: default_suggestions(),
                    intensity: 5,
                };
            }
        };

        match parse_analysis(&raw) {
            Some(analysis) => analysis,
            None => {
                warn!("emotion analysis reply was not valid JSON, using fallback");
                EmotionAnalysis {
                    primary_emotion: "unclear".to_string(),
                    reflection: "It seems you're experiencing some complex emotions. Your feelings are valid and it's good you're taking time to reflect.".to_string(),
                    suggestions: default_suggestions(),
                    intensity: 5,
                }
            }
        }
    }
}

fn default_suggestions() -> Vec<String> {
    vec![
        "Try taking a few deep breaths".to_string(),
        "Consider journaling more about this feeling".to_string(),
        "Take a short break from screens".to_string(),
    ]
}

/// Parse the upstream JSON reply, tolerating markdown code fences around it
fn parse_analysis(raw: &str) -> Option<EmotionAnalysis> {
    let trimmed = raw
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    serde_json::from_str(trimmed).ok()
}
