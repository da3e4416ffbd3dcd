//! Domain enums shared across the API surface
//!
//! The string forms are part of the wire contract with existing clients,
//! so `as_str`/`FromStr` round-trip through exactly those spellings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mood recorded with a mood entry or journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodKind {
    Happy,
    Neutral,
    Sad,
    Anxious,
}

impl MoodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodKind::Happy => "happy",
            MoodKind::Neutral => "neutral",
            MoodKind::Sad => "sad",
            MoodKind::Anxious => "anxious",
        }
    }
}

impl fmt::Display for MoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "happy" => Ok(MoodKind::Happy),
            "neutral" => Ok(MoodKind::Neutral),
            "sad" => Ok(MoodKind::Sad),
            "anxious" => Ok(MoodKind::Anxious),
            other => Err(format!("unknown mood: {other}")),
        }
    }
}

/// Self-assessed overthinking severity on a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverthinkingLevel {
    Mild,
    #[default]
    Moderate,
    Severe,
}

impl OverthinkingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverthinkingLevel::Mild => "mild",
            OverthinkingLevel::Moderate => "moderate",
            OverthinkingLevel::Severe => "severe",
        }
    }
}

impl fmt::Display for OverthinkingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverthinkingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mild" => Ok(OverthinkingLevel::Mild),
            "moderate" => Ok(OverthinkingLevel::Moderate),
            "severe" => Ok(OverthinkingLevel::Severe),
            other => Err(format!("unknown overthinking level: {other}")),
        }
    }
}

/// Community post category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PostCategory {
    Overthinking,
    Stress,
    Anxiety,
    #[serde(rename = "Work-Life Balance")]
    WorkLifeBalance,
    Relationships,
    Perfectionism,
    #[default]
    General,
    #[serde(rename = "Success Stories")]
    SuccessStories,
}

impl PostCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::Overthinking => "Overthinking",
            PostCategory::Stress => "Stress",
            PostCategory::Anxiety => "Anxiety",
            PostCategory::WorkLifeBalance => "Work-Life Balance",
            PostCategory::Relationships => "Relationships",
            PostCategory::Perfectionism => "Perfectionism",
            PostCategory::General => "General",
            PostCategory::SuccessStories => "Success Stories",
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Overthinking" => Ok(PostCategory::Overthinking),
            "Stress" => Ok(PostCategory::Stress),
            "Anxiety" => Ok(PostCategory::Anxiety),
            "Work-Life Balance" => Ok(PostCategory::WorkLifeBalance),
            "Relationships" => Ok(PostCategory::Relationships),
            "Perfectionism" => Ok(PostCategory::Perfectionism),
            "General" => Ok(PostCategory::General),
            "Success Stories" => Ok(PostCategory::SuccessStories),
            other => Err(format!("unknown post category: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(MoodKind::Happy, "happy")]
    #[case(MoodKind::Neutral, "neutral")]
    #[case(MoodKind::Sad, "sad")]
    #[case(MoodKind::Anxious, "anxious")]
    fn mood_round_trips(#[case] mood: MoodKind, #[case] s: &str) {
        assert_eq!(mood.as_str(), s);
        assert_eq!(s.parse::<MoodKind>().unwrap(), mood);
    }

    #[test]
    fn mood_rejects_unknown() {
        assert!("ecstatic".parse::<MoodKind>().is_err());
    }

    #[test]
    fn overthinking_level_defaults_to_moderate() {
        assert_eq!(OverthinkingLevel::default(), OverthinkingLevel::Moderate);
    }

    #[rstest]
    #[case(PostCategory::WorkLifeBalance, "Work-Life Balance")]
    #[case(PostCategory::SuccessStories, "Success Stories")]
    #[case(PostCategory::General, "General")]
    fn category_spellings_are_stable(#[case] cat: PostCategory, #[case] s: &str) {
        assert_eq!(cat.as_str(), s);
        assert_eq!(s.parse::<PostCategory>().unwrap(), cat);
    }

    #[test]
    fn category_serde_uses_display_spellings() {
        let json = serde_json::to_string(&PostCategory::WorkLifeBalance).unwrap();
        assert_eq!(json, "\"Work-Life Balance\"");
    }
}
