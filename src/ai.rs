use crate::models::{
    ContentSuggestion, MetricsPayload, RepurposeSuggestion, RevenueIdea, TitleVariation,
    TrendReport,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

pub const GEMINI_MODEL: &str = "gemini-2.5-flash-preview-04-17";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model replies sometimes arrive wrapped in a fenced code block even when
/// JSON output was requested.
static FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").expect("fence regex"));

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Thin wrapper over the Gemini `generateContent` REST endpoint. Every
/// operation collapses failure into `None` after logging; callers decide
/// what an unavailable assistant looks like.
#[derive(Clone)]
pub struct AiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl AiClient {
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        if api_key.is_none() {
            warn!("GEMINI_API_KEY not set; AI assistance is disabled");
        }
        let base_url =
            env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url,
        }
    }

    pub fn available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &str, json_mode: bool) -> Option<String> {
        let key = self.api_key.as_deref()?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, GEMINI_MODEL
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: json_mode.then_some(GenerationConfig {
                response_mime_type: "application/json",
            }),
        };

        let response = match self
            .client
            .post(&url)
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!("model request failed: {err}");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("model request returned {}", response.status());
            return None;
        }

        let decoded: GenerateResponse = match response.json().await {
            Ok(decoded) => decoded,
            Err(err) => {
                warn!("model response unreadable: {err}");
                return None;
            }
        };

        let text: String = decoded
            .candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect()
            })
            .unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            warn!("model returned no text");
            return None;
        }

        Some(text.to_string())
    }

    pub async fn content_idea(&self, platform: &str, topic: &str) -> Option<ContentSuggestion> {
        let prompt = format!(
            "Generate a social media post idea for {platform} about \"{topic}\". \
             Include a catchy caption (around 50-100 words) and 3-5 relevant hashtags. \
             Format the response as a JSON object with keys: \"idea\", \"caption\", \"hashtags\" (array of strings). \
             Example: {{\"idea\": \"A quick tutorial video\", \"caption\": \"Check out this easy way to...\", \"hashtags\": [\"#tutorial\", \"#DIY\"]}}"
        );
        decode_json(&self.generate(&prompt, true).await?)
    }

    pub async fn repurpose(
        &self,
        content: &str,
        source_platform: &str,
        target_platform: &str,
    ) -> Option<RepurposeSuggestion> {
        let prompt = format!(
            "Take the following content from {source_platform}: \"{content}\". \
             Repurpose it for {target_platform}. Consider typical content styles, lengths, and tones for {target_platform}. \
             Provide the repurposed content and brief notes. \
             Format as JSON: {{\"platformName\": \"{target_platform}\", \"repurposedContent\": \"...\", \"notes\": \"...\"}}"
        );
        decode_json(&self.generate(&prompt, true).await?)
    }

    pub async fn monetization_tips(&self, platform: &str) -> Option<Vec<String>> {
        let prompt = format!(
            "Provide 5 actionable monetization tips for a content creator on {platform}. \
             Format the response as a JSON array of strings. \
             Example: [\"Engage with your audience regularly.\", \"Collaborate with brands.\"]"
        );
        decode_json(&self.generate(&prompt, true).await?)
    }

    pub async fn revenue_ideas(&self, niche: &str, popular_summary: &str) -> Option<Vec<RevenueIdea>> {
        let prompt = format!(
            "For a content creator in the niche \"{niche}\" whose popular content is about \"{popular_summary}\", \
             suggest 3 diverse potential revenue streams. \
             For each, provide an \"idea\", \"description\", and \"potential\" (Low, Medium, High). \
             Format as JSON array of objects."
        );
        decode_json(&self.generate(&prompt, true).await?)
    }

    pub async fn trend_reports(&self, niche: &str) -> Option<Vec<TrendReport>> {
        let prompt = format!(
            "Identify 2-3 current content trends relevant for the niche: \"{niche}\". \
             For each, provide \"trendName\", \"description\", and \"relevance\". \
             Format as JSON array of objects."
        );
        decode_json(&self.generate(&prompt, true).await?)
    }

    pub async fn title_variations(&self, title: &str) -> Option<Vec<TitleVariation>> {
        let prompt = format!(
            "Generate 3 alternative title variations for the following original title: \"{title}\". \
             For each, provide \"variation\" and an optional \"strength\" (e.g., Good, Better, Engaging). \
             Format as JSON array of objects."
        );
        decode_json(&self.generate(&prompt, true).await?)
    }

    /// Free-text reply, no JSON mode. A zero view count is left out of the
    /// prompt entirely.
    pub async fn analyze_performance(
        &self,
        platform: &str,
        metrics: &MetricsPayload,
        caption_summary: &str,
    ) -> Option<String> {
        let views_line = if metrics.views > 0 {
            format!("Views: {}\n", metrics.views)
        } else {
            String::new()
        };
        let prompt = format!(
            "A post on {platform} summarized as \"{caption_summary}\" received the following engagement:\n\
             Likes: {}\nComments: {}\nShares: {}\n{views_line}\n\
             Provide a brief analysis (2-3 sentences) of this performance and suggest one specific improvement.\n\
             Focus on constructive feedback. Be encouraging.",
            metrics.likes, metrics.comments, metrics.shares
        );
        self.generate(&prompt, false).await
    }

    #[cfg(test)]
    fn disabled() -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    match FENCE.captures(trimmed) {
        Some(caps) => caps
            .get(2)
            .map(|inner| inner.as_str().trim())
            .unwrap_or(trimmed),
        None => trimmed,
    }
}

fn decode_json<T: DeserializeOwned>(text: &str) -> Option<T> {
    match serde_json::from_str(strip_code_fence(text)) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("model returned malformed JSON: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_json_passes_through() {
        assert_eq!(strip_code_fence("{\"idea\": \"x\"}"), "{\"idea\": \"x\"}");
        assert_eq!(strip_code_fence("  [1, 2]  "), "[1, 2]");
    }

    #[test]
    fn fenced_json_is_unwrapped() {
        let fenced = "```json\n{\"idea\": \"x\"}\n```";
        assert_eq!(strip_code_fence(fenced), "{\"idea\": \"x\"}");

        let no_lang = "```\n[\"a\", \"b\"]\n```";
        assert_eq!(strip_code_fence(no_lang), "[\"a\", \"b\"]");
    }

    #[test]
    fn fenced_suggestion_decodes() {
        let fenced = "```json\n{\"idea\": \"A day in the life\", \"caption\": \"Behind the scenes\", \"hashtags\": [\"#vlog\"]}\n```";
        let suggestion: ContentSuggestion = decode_json(fenced).unwrap();
        assert_eq!(suggestion.idea, "A day in the life");
        assert_eq!(suggestion.hashtags, vec!["#vlog"]);
    }

    #[test]
    fn camel_case_shapes_decode() {
        let raw = "[{\"trendName\": \"Short form\", \"description\": \"d\", \"relevance\": \"high\"}]";
        let trends: Vec<TrendReport> = decode_json(raw).unwrap();
        assert_eq!(trends[0].trend_name, "Short form");

        let raw = "{\"platformName\": \"YouTube\", \"repurposedContent\": \"c\", \"notes\": \"n\"}";
        let suggestion: RepurposeSuggestion = decode_json(raw).unwrap();
        assert_eq!(suggestion.platform_name, "YouTube");
    }

    #[test]
    fn malformed_json_is_none() {
        let decoded: Option<Vec<String>> = decode_json("not json at all");
        assert!(decoded.is_none());
    }

    #[tokio::test]
    async fn missing_credential_disables_every_operation() {
        let client = AiClient::disabled();
        assert!(!client.available());
        assert!(client.content_idea("YouTube", "travel").await.is_none());
        assert!(client.monetization_tips("TikTok").await.is_none());
        assert!(client.trend_reports("cooking").await.is_none());
        assert!(client
            .analyze_performance("Instagram", &MetricsPayload::default(), "reel")
            .await
            .is_none());
    }
}
