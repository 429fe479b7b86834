use crate::ai::GEMINI_MODEL;
use crate::errors::AppError;
use crate::models::{
    platform_name, AnalysisRequest, AnalysisResponse, AssistStatusResponse, ContentSuggestion,
    IdeaRequest, RepurposeRequest, RepurposeSuggestion, RevenueIdeasRequest, RevenueIdeasResponse,
    TipsRequest, TipsResponse, TitlesRequest, TitlesResponse, TrendsRequest, TrendsResponse,
    PLATFORMS,
};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;

/// What popular-content context the revenue prompt gets when none is known.
const GENERIC_NICHE_SUMMARY: &str = "general content in this niche";

pub async fn status(State(state): State<AppState>) -> Json<AssistStatusResponse> {
    Json(AssistStatusResponse {
        available: state.ai.available(),
        model: GEMINI_MODEL,
    })
}

pub async fn idea(
    State(state): State<AppState>,
    Json(request): Json<IdeaRequest>,
) -> Result<Json<ContentSuggestion>, AppError> {
    if request.topic.trim().is_empty() || request.platform_id.trim().is_empty() {
        return Err(AppError::bad_request(
            "Please enter a topic and select a platform.",
        ));
    }

    let platform = platform_name(&request.platform_id);
    state
        .ai
        .content_idea(platform, &request.topic)
        .await
        .map(Json)
        .ok_or_else(|| {
            AppError::unavailable(
                "Failed to generate content. Ensure API key is set and try again.",
            )
        })
}

pub async fn repurpose(
    State(state): State<AppState>,
    Json(request): Json<RepurposeRequest>,
) -> Result<Json<RepurposeSuggestion>, AppError> {
    if request.content.trim().is_empty()
        || request.platform_id.trim().is_empty()
        || request.target_platform_id.trim().is_empty()
    {
        return Err(AppError::bad_request(
            "Current content, original platform, and target platform for repurposing are required.",
        ));
    }

    let source = platform_name(&request.platform_id);
    let target = platform_name(&request.target_platform_id);
    state
        .ai
        .repurpose(&request.content, source, target)
        .await
        .map(Json)
        .ok_or_else(|| {
            AppError::unavailable(
                "Failed to repurpose content with AI. Ensure API key is set and try again.",
            )
        })
}

/// Unknown platform ids fall back to generic advice rather than failing.
pub async fn tips(
    State(state): State<AppState>,
    Json(request): Json<TipsRequest>,
) -> Result<Json<TipsResponse>, AppError> {
    let platform = PLATFORMS
        .iter()
        .find(|platform| platform.id == request.platform_id)
        .map(|platform| platform.name)
        .unwrap_or("social media");

    state
        .ai
        .monetization_tips(platform)
        .await
        .map(|tips| Json(TipsResponse { tips }))
        .ok_or_else(|| {
            AppError::unavailable("Failed to fetch monetization tips. No tips returned.")
        })
}

pub async fn revenue_ideas(
    State(state): State<AppState>,
    Json(request): Json<RevenueIdeasRequest>,
) -> Result<Json<RevenueIdeasResponse>, AppError> {
    if request.niche.trim().is_empty() {
        return Err(AppError::bad_request("Please enter your content niche."));
    }

    state
        .ai
        .revenue_ideas(&request.niche, GENERIC_NICHE_SUMMARY)
        .await
        .map(|ideas| Json(RevenueIdeasResponse { ideas }))
        .ok_or_else(|| {
            AppError::unavailable("Failed to fetch revenue ideas. No ideas returned.")
        })
}

pub async fn trends(
    State(state): State<AppState>,
    Json(request): Json<TrendsRequest>,
) -> Result<Json<TrendsResponse>, AppError> {
    if request.niche.trim().is_empty() {
        return Err(AppError::bad_request("Please enter your niche to get trends."));
    }

    state
        .ai
        .trend_reports(&request.niche)
        .await
        .map(|trends| Json(TrendsResponse { trends }))
        .ok_or_else(|| AppError::unavailable("Could not fetch trending topics from AI."))
}

pub async fn titles(
    State(state): State<AppState>,
    Json(request): Json<TitlesRequest>,
) -> Result<Json<TitlesResponse>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::bad_request(
            "Please enter a title to generate variations.",
        ));
    }

    state
        .ai
        .title_variations(&request.title)
        .await
        .map(|variations| Json(TitlesResponse { variations }))
        .ok_or_else(|| {
            AppError::unavailable(
                "Failed to generate title variations. Ensure API key is set and try again.",
            )
        })
}

pub async fn analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    if request.platform_id.trim().is_empty() || request.caption_summary.trim().is_empty() {
        return Err(AppError::bad_request(
            "Platform and caption summary are needed for analysis.",
        ));
    }

    let platform = platform_name(&request.platform_id);
    state
        .ai
        .analyze_performance(platform, &request.metrics, &request.caption_summary)
        .await
        .map(|analysis| Json(AnalysisResponse { analysis }))
        .ok_or_else(|| {
            AppError::unavailable(
                "Failed to get analysis from AI. Ensure API key is set and try again.",
            )
        })
}
