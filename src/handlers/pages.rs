use crate::errors::AppError;
use crate::models::{OverviewResponse, Platform, Preferences, PreferencesPayload, PLATFORMS};
use crate::state::AppState;
use crate::stats;
use crate::ui;
use axum::extract::State;
use axum::response::Html;
use axum::Json;

pub async fn home(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(ui::home::page(store.preferences.dark_mode))
}

pub async fn planner(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(ui::planner::page(store.preferences.dark_mode))
}

pub async fn tracker(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(ui::tracker::page(store.preferences.dark_mode))
}

pub async fn monetization(State(state): State<AppState>) -> Html<String> {
    let store = state.store.lock().await;
    Html(ui::monetization::page(store.preferences.dark_mode))
}

pub async fn summary(State(state): State<AppState>) -> Json<OverviewResponse> {
    let store = state.store.lock().await;
    Json(stats::build_overview(&store))
}

pub async fn platforms() -> Json<&'static [Platform]> {
    Json(PLATFORMS)
}

pub async fn get_preferences(State(state): State<AppState>) -> Json<Preferences> {
    let store = state.store.lock().await;
    Json(store.preferences.clone())
}

pub async fn put_preferences(
    State(state): State<AppState>,
    Json(payload): Json<PreferencesPayload>,
) -> Result<Json<Preferences>, AppError> {
    let mut store = state.store.lock().await;
    store.preferences.dark_mode = payload.dark_mode;
    state.persist_preferences(&store).await?;
    Ok(Json(store.preferences.clone()))
}
