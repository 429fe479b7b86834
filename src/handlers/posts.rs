use crate::calendar::{month_grid, CalendarGrid};
use crate::csv;
use crate::errors::AppError;
use crate::models::{new_entity_id, platform_name, PostPayload, ScheduledPost};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{Datelike, Utc};
use serde::Deserialize;

const MISSING_POST_FIELDS: &str =
    "Please fill in all required fields: Platform, Username/Link, Content, and Scheduled Time.";

pub async fn list(State(state): State<AppState>) -> Json<Vec<ScheduledPost>> {
    let store = state.store.lock().await;
    let mut posts = store.posts.clone();
    posts.sort_by_key(|post| post.scheduled_at);
    Json(posts)
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<PostPayload>,
) -> Result<Json<ScheduledPost>, AppError> {
    validate(&payload)?;

    let post = ScheduledPost {
        id: new_entity_id(),
        platform_id: payload.platform_id,
        username_or_link: payload.username_or_link,
        content: payload.content,
        scheduled_at: payload.scheduled_at,
        status: payload.status.unwrap_or_default(),
        media_url: payload.media_url,
        ai_assisted: payload.ai_assisted,
    };

    let mut store = state.store.lock().await;
    store.posts.push(post.clone());
    state.persist_posts(&store).await?;
    Ok(Json(post))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PostPayload>,
) -> Result<Json<ScheduledPost>, AppError> {
    validate(&payload)?;

    let mut store = state.store.lock().await;
    let post = store
        .posts
        .iter_mut()
        .find(|post| post.id == id)
        .ok_or_else(|| AppError::not_found("scheduled post not found"))?;

    post.platform_id = payload.platform_id;
    post.username_or_link = payload.username_or_link;
    post.content = payload.content;
    post.scheduled_at = payload.scheduled_at;
    if let Some(status) = payload.status {
        post.status = status;
    }
    post.media_url = payload.media_url;
    post.ai_assisted = payload.ai_assisted;
    let updated = post.clone();

    state.persist_posts(&store).await?;
    Ok(Json(updated))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    let before = store.posts.len();
    store.posts.retain(|post| post.id != id);
    if store.posts.len() == before {
        return Err(AppError::not_found("scheduled post not found"));
    }

    state.persist_posts(&store).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Rows are exported in stored order, one per scheduled post.
pub async fn export(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.lock().await;
    let records: Vec<Vec<(&str, String)>> = store
        .posts
        .iter()
        .map(|post| {
            vec![
                ("ID", post.id.clone()),
                ("Platform", platform_name(&post.platform_id).to_string()),
                ("UsernameOrLink", post.username_or_link.clone()),
                ("Content", post.content.clone()),
                (
                    "ScheduledTime",
                    post.scheduled_at.format("%Y-%m-%d %H:%M").to_string(),
                ),
                ("Status", post.status.as_str().to_string()),
                ("MediaURL", post.media_url.clone().unwrap_or_default()),
                (
                    "AIAssisted",
                    if post.ai_assisted { "Yes" } else { "No" }.to_string(),
                ),
            ]
        })
        .collect();

    super::csv_response("scheduled_posts", csv::to_csv(&records))
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    year: Option<i32>,
    month: Option<u32>,
}

pub async fn calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarGrid>, AppError> {
    let today = Utc::now().date_naive();
    let year = query.year.unwrap_or_else(|| today.year());
    let month = query.month.unwrap_or_else(|| today.month());

    let store = state.store.lock().await;
    month_grid(year, month, today, &store.posts)
        .map(Json)
        .ok_or_else(|| AppError::bad_request("invalid calendar month"))
}

fn validate(payload: &PostPayload) -> Result<(), AppError> {
    if payload.platform_id.trim().is_empty()
        || payload.username_or_link.trim().is_empty()
        || payload.content.trim().is_empty()
    {
        return Err(AppError::bad_request(MISSING_POST_FIELDS));
    }
    Ok(())
}
