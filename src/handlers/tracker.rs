use crate::errors::AppError;
use crate::models::{
    new_entity_id, AccountGoal, AccountPayload, GoalPayload, MetricsPayload, PostMetrics,
    TrackedAccount, TrackedPost, TrackedPostPayload,
};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;

const MISSING_ACCOUNT_FIELDS: &str =
    "Platform and Username/Profile Link are required for tracking an account.";
const MISSING_TRACKED_POST_FIELDS: &str =
    "Platform and Post Link/Identifier are required for tracking a post.";

pub async fn list(State(state): State<AppState>) -> Json<Vec<TrackedAccount>> {
    let store = state.store.lock().await;
    Json(store.accounts.clone())
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<AccountPayload>,
) -> Result<Json<TrackedAccount>, AppError> {
    validate(&payload)?;

    let account = TrackedAccount {
        id: new_entity_id(),
        platform_id: payload.platform_id,
        profile_link: payload.profile_link,
        posts: Vec::new(),
        goal: None,
    };

    let mut store = state.store.lock().await;
    store.accounts.push(account.clone());
    state.persist_accounts(&store).await?;
    Ok(Json(account))
}

/// Editing account details leaves the goal and tracked posts alone.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AccountPayload>,
) -> Result<Json<TrackedAccount>, AppError> {
    validate(&payload)?;

    let mut store = state.store.lock().await;
    let account = find_account(&mut store.accounts, &id)?;
    account.platform_id = payload.platform_id;
    account.profile_link = payload.profile_link;
    let updated = account.clone();

    state.persist_accounts(&store).await?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    let before = store.accounts.len();
    store.accounts.retain(|account| account.id != id);
    if store.accounts.len() == before {
        return Err(AppError::not_found("tracked account not found"));
    }

    state.persist_accounts(&store).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// A target of zero is allowed; the progress bar only renders for positive
/// targets.
pub async fn set_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<GoalPayload>,
) -> Result<Json<TrackedAccount>, AppError> {
    if payload.description.trim().is_empty() {
        return Err(AppError::bad_request("Please provide a goal description."));
    }

    let mut store = state.store.lock().await;
    let account = find_account(&mut store.accounts, &id)?;
    account.goal = Some(AccountGoal {
        description: payload.description,
        target_value: payload.target_value,
        current_value: payload.current_value,
        metric_name: payload.metric_name,
    });
    let updated = account.clone();

    state.persist_accounts(&store).await?;
    Ok(Json(updated))
}

/// New posts inherit the account's platform.
pub async fn add_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<TrackedPostPayload>,
) -> Result<Json<TrackedAccount>, AppError> {
    if payload.post_link.trim().is_empty() {
        return Err(AppError::bad_request(MISSING_TRACKED_POST_FIELDS));
    }

    let mut store = state.store.lock().await;
    let account = find_account(&mut store.accounts, &id)?;
    let post = TrackedPost {
        id: new_entity_id(),
        platform_id: account.platform_id.clone(),
        post_link: payload.post_link,
        caption_summary: payload.caption_summary,
        notes: payload.notes,
        metrics: stamp_metrics(payload.metrics),
    };
    account.posts.push(post);
    sort_posts(&mut account.posts);
    let updated = account.clone();

    state.persist_accounts(&store).await?;
    Ok(Json(updated))
}

pub async fn update_post(
    State(state): State<AppState>,
    Path((id, post_id)): Path<(String, String)>,
    Json(payload): Json<TrackedPostPayload>,
) -> Result<Json<TrackedAccount>, AppError> {
    if payload.post_link.trim().is_empty() {
        return Err(AppError::bad_request(MISSING_TRACKED_POST_FIELDS));
    }

    let mut store = state.store.lock().await;
    let account = find_account(&mut store.accounts, &id)?;
    let post = account
        .posts
        .iter_mut()
        .find(|post| post.id == post_id)
        .ok_or_else(|| AppError::not_found("tracked post not found"))?;

    post.post_link = payload.post_link;
    post.caption_summary = payload.caption_summary;
    post.notes = payload.notes;
    post.metrics = stamp_metrics(payload.metrics);
    sort_posts(&mut account.posts);
    let updated = account.clone();

    state.persist_accounts(&store).await?;
    Ok(Json(updated))
}

pub async fn remove_post(
    State(state): State<AppState>,
    Path((id, post_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    let account = find_account(&mut store.accounts, &id)?;
    let before = account.posts.len();
    account.posts.retain(|post| post.id != post_id);
    if account.posts.len() == before {
        return Err(AppError::not_found("tracked post not found"));
    }

    state.persist_accounts(&store).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn validate(payload: &AccountPayload) -> Result<(), AppError> {
    if payload.platform_id.trim().is_empty() || payload.profile_link.trim().is_empty() {
        return Err(AppError::bad_request(MISSING_ACCOUNT_FIELDS));
    }
    Ok(())
}

fn find_account<'a>(
    accounts: &'a mut [TrackedAccount],
    id: &str,
) -> Result<&'a mut TrackedAccount, AppError> {
    accounts
        .iter_mut()
        .find(|account| account.id == id)
        .ok_or_else(|| AppError::not_found("tracked account not found"))
}

/// Metric edits always restamp the update time; values are keyed in by hand.
fn stamp_metrics(payload: MetricsPayload) -> PostMetrics {
    PostMetrics {
        likes: payload.likes,
        comments: payload.comments,
        shares: payload.shares,
        views: payload.views,
        last_updated: Utc::now(),
    }
}

fn sort_posts(posts: &mut [TrackedPost]) {
    posts.sort_by(|a, b| b.metrics.last_updated.cmp(&a.metrics.last_updated));
}
