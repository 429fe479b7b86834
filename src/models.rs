use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Supported networks. The catalog is fixed; records reference entries by id
/// and keep the raw id when it no longer matches anything.
#[derive(Debug, Clone, Serialize)]
pub struct Platform {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

pub const PLATFORMS: &[Platform] = &[
    Platform { id: "facebook", name: "Facebook", color: "#1877f2" },
    Platform { id: "twitter", name: "X (Twitter)", color: "#14171a" },
    Platform { id: "instagram", name: "Instagram", color: "#e1306c" },
    Platform { id: "youtube", name: "YouTube", color: "#ff0000" },
    Platform { id: "tiktok", name: "TikTok", color: "#161823" },
    Platform { id: "linkedin", name: "LinkedIn", color: "#0a66c2" },
    Platform { id: "pinterest", name: "Pinterest", color: "#bd081c" },
];

pub fn is_known_platform(id: &str) -> bool {
    PLATFORMS.iter().any(|platform| platform.id == id)
}

pub fn platform_name(id: &str) -> &str {
    PLATFORMS
        .iter()
        .find(|platform| platform.id == id)
        .map(|platform| platform.name)
        .unwrap_or(id)
}

pub fn platform_color(id: &str) -> Option<&'static str> {
    PLATFORMS
        .iter()
        .find(|platform| platform.id == id)
        .map(|platform| platform.color)
}

/// Unix millis plus seven base-36 characters. Uniqueness is probabilistic
/// only, matching how the stored records were minted historically.
pub fn new_entity_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..7)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{}{}", Utc::now().timestamp_millis(), suffix)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Scheduled,
    Posted,
    Failed,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::Scheduled => "scheduled",
            PostStatus::Posted => "posted",
            PostStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledPost {
    pub id: String,
    pub platform_id: String,
    pub username_or_link: String,
    pub content: String,
    pub scheduled_at: DateTime<Utc>,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub ai_assisted: bool,
}

/// Manually recorded engagement numbers. `last_updated` is stamped on every
/// save, not sampled from the network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMetrics {
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub views: u64,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedPost {
    pub id: String,
    pub platform_id: String,
    pub post_link: String,
    #[serde(default)]
    pub caption_summary: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub metrics: PostMetrics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountGoal {
    pub description: String,
    pub target_value: u64,
    #[serde(default)]
    pub current_value: Option<u64>,
    #[serde(default)]
    pub metric_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackedAccount {
    pub id: String,
    pub platform_id: String,
    pub profile_link: String,
    #[serde(default)]
    pub posts: Vec<TrackedPost>,
    #[serde(default)]
    pub goal: Option<AccountGoal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonetizationEntry {
    pub id: String,
    pub source: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub platform_id: Option<String>,
    #[serde(default)]
    pub post_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub id: String,
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,
}

// ---- request payloads -------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct PostPayload {
    pub platform_id: String,
    pub username_or_link: String,
    pub content: String,
    pub scheduled_at: DateTime<Utc>,
    #[serde(default)]
    pub status: Option<PostStatus>,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub ai_assisted: bool,
}

#[derive(Debug, Deserialize)]
pub struct AccountPayload {
    pub platform_id: String,
    pub profile_link: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct MetricsPayload {
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub shares: u64,
    #[serde(default)]
    pub views: u64,
}

#[derive(Debug, Deserialize)]
pub struct TrackedPostPayload {
    pub post_link: String,
    #[serde(default)]
    pub caption_summary: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub metrics: MetricsPayload,
}

#[derive(Debug, Deserialize)]
pub struct GoalPayload {
    pub description: String,
    pub target_value: u64,
    #[serde(default)]
    pub current_value: Option<u64>,
    #[serde(default)]
    pub metric_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EarningPayload {
    pub source: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub platform_id: Option<String>,
    #[serde(default)]
    pub post_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExpensePayload {
    pub description: String,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct PreferencesPayload {
    pub dark_mode: bool,
}

// ---- AI request/response shapes ---------------------------------------

#[derive(Debug, Deserialize)]
pub struct IdeaRequest {
    pub platform_id: String,
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub struct RepurposeRequest {
    pub platform_id: String,
    pub target_platform_id: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct TipsRequest {
    pub platform_id: String,
}

#[derive(Debug, Deserialize)]
pub struct RevenueIdeasRequest {
    pub niche: String,
}

#[derive(Debug, Deserialize)]
pub struct TrendsRequest {
    pub niche: String,
}

#[derive(Debug, Deserialize)]
pub struct TitlesRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub platform_id: String,
    pub caption_summary: String,
    #[serde(default)]
    pub metrics: MetricsPayload,
}

/// Idea/caption/hashtags tuple the content assistant asks the model for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSuggestion {
    pub idea: String,
    pub caption: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepurposeSuggestion {
    pub platform_name: String,
    pub repurposed_content: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueIdea {
    pub idea: String,
    pub description: String,
    #[serde(default)]
    pub potential: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub trend_name: String,
    pub description: String,
    pub relevance: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleVariation {
    pub variation: String,
    #[serde(default)]
    pub strength: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TipsResponse {
    pub tips: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RevenueIdeasResponse {
    pub ideas: Vec<RevenueIdea>,
}

#[derive(Debug, Serialize)]
pub struct TrendsResponse {
    pub trends: Vec<TrendReport>,
}

#[derive(Debug, Serialize)]
pub struct TitlesResponse {
    pub variations: Vec<TitleVariation>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

#[derive(Debug, Serialize)]
pub struct AssistStatusResponse {
    pub available: bool,
    pub model: &'static str,
}

// ---- summaries ---------------------------------------------------------

#[derive(Debug, PartialEq, Serialize)]
pub struct PlannerSummary {
    pub upcoming_posts: usize,
    pub past_due_posts: usize,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct TrackerSummary {
    pub tracked_accounts: usize,
    pub total_tracked_posts: usize,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct FinanceSummary {
    pub total_earnings: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    pub earning_count: usize,
    pub expense_count: usize,
    pub average_earning: f64,
}

#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub planner: PlannerSummary,
    pub tracker: TrackerSummary,
    pub finances: FinanceSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_ids_carry_a_millis_prefix_and_suffix() {
        let id = new_entity_id();
        assert!(id.len() > 7);
        let (prefix, suffix) = id.split_at(id.len() - 7);
        assert!(prefix.chars().all(|c| c.is_ascii_digit()));
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn platform_lookup_falls_back_to_raw_id() {
        assert_eq!(platform_name("youtube"), "YouTube");
        assert_eq!(platform_name("myspace"), "myspace");
        assert!(is_known_platform("tiktok"));
        assert!(!is_known_platform("myspace"));
    }

    #[test]
    fn post_status_round_trips_lowercase() {
        let json = serde_json::to_string(&PostStatus::Scheduled).unwrap();
        assert_eq!(json, "\"scheduled\"");
        let status: PostStatus = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(status, PostStatus::Failed);
    }

    #[test]
    fn stored_records_tolerate_missing_optionals() {
        let raw = r#"{
            "id": "1755945600000abc1234",
            "platform_id": "instagram",
            "username_or_link": "@studio",
            "content": "launch day",
            "scheduled_at": "2026-08-25T10:00:00Z"
        }"#;
        let post: ScheduledPost = serde_json::from_str(raw).unwrap();
        assert_eq!(post.status, PostStatus::Scheduled);
        assert_eq!(post.media_url, None);
        assert!(!post.ai_assisted);
    }
}
