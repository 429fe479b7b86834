use crate::csv;
use crate::errors::AppError;
use crate::models::{
    new_entity_id, platform_name, EarningPayload, ExpenseItem, ExpensePayload, MonetizationEntry,
};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

const MISSING_EARNING_FIELDS: &str = "Please fill in Source, Amount (greater than 0), and Date.";
const MISSING_EXPENSE_FIELDS: &str =
    "Please fill in Description, Amount (greater than 0), Date, and Category.";

// Both ledgers are kept newest-date first on disk and over the wire.

pub async fn list_earnings(State(state): State<AppState>) -> Json<Vec<MonetizationEntry>> {
    let store = state.store.lock().await;
    Json(store.earnings.clone())
}

pub async fn create_earning(
    State(state): State<AppState>,
    Json(payload): Json<EarningPayload>,
) -> Result<Json<MonetizationEntry>, AppError> {
    if payload.source.trim().is_empty() || payload.amount <= 0.0 {
        return Err(AppError::bad_request(MISSING_EARNING_FIELDS));
    }

    let entry = MonetizationEntry {
        id: new_entity_id(),
        source: payload.source,
        amount: payload.amount,
        date: payload.date,
        platform_id: payload.platform_id,
        post_id: payload.post_id,
        notes: payload.notes,
    };

    let mut store = state.store.lock().await;
    store.earnings.push(entry.clone());
    store.earnings.sort_by(|a, b| b.date.cmp(&a.date));
    state.persist_earnings(&store).await?;
    Ok(Json(entry))
}

pub async fn update_earning(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<EarningPayload>,
) -> Result<Json<MonetizationEntry>, AppError> {
    if payload.source.trim().is_empty() || payload.amount <= 0.0 {
        return Err(AppError::bad_request(MISSING_EARNING_FIELDS));
    }

    let mut store = state.store.lock().await;
    let entry = store
        .earnings
        .iter_mut()
        .find(|entry| entry.id == id)
        .ok_or_else(|| AppError::not_found("monetization entry not found"))?;

    entry.source = payload.source;
    entry.amount = payload.amount;
    entry.date = payload.date;
    entry.platform_id = payload.platform_id;
    entry.post_id = payload.post_id;
    entry.notes = payload.notes;
    let updated = entry.clone();

    store.earnings.sort_by(|a, b| b.date.cmp(&a.date));
    state.persist_earnings(&store).await?;
    Ok(Json(updated))
}

pub async fn remove_earning(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    let before = store.earnings.len();
    store.earnings.retain(|entry| entry.id != id);
    if store.earnings.len() == before {
        return Err(AppError::not_found("monetization entry not found"));
    }

    state.persist_earnings(&store).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_expenses(State(state): State<AppState>) -> Json<Vec<ExpenseItem>> {
    let store = state.store.lock().await;
    Json(store.expenses.clone())
}

pub async fn create_expense(
    State(state): State<AppState>,
    Json(payload): Json<ExpensePayload>,
) -> Result<Json<ExpenseItem>, AppError> {
    if payload.description.trim().is_empty()
        || payload.category.trim().is_empty()
        || payload.amount <= 0.0
    {
        return Err(AppError::bad_request(MISSING_EXPENSE_FIELDS));
    }

    let item = ExpenseItem {
        id: new_entity_id(),
        description: payload.description,
        category: payload.category,
        amount: payload.amount,
        date: payload.date,
    };

    let mut store = state.store.lock().await;
    store.expenses.push(item.clone());
    store.expenses.sort_by(|a, b| b.date.cmp(&a.date));
    state.persist_expenses(&store).await?;
    Ok(Json(item))
}

pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ExpensePayload>,
) -> Result<Json<ExpenseItem>, AppError> {
    if payload.description.trim().is_empty()
        || payload.category.trim().is_empty()
        || payload.amount <= 0.0
    {
        return Err(AppError::bad_request(MISSING_EXPENSE_FIELDS));
    }

    let mut store = state.store.lock().await;
    let item = store
        .expenses
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(|| AppError::not_found("expense not found"))?;

    item.description = payload.description;
    item.category = payload.category;
    item.amount = payload.amount;
    item.date = payload.date;
    let updated = item.clone();

    store.expenses.sort_by(|a, b| b.date.cmp(&a.date));
    state.persist_expenses(&store).await?;
    Ok(Json(updated))
}

pub async fn remove_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.store.lock().await;
    let before = store.expenses.len();
    store.expenses.retain(|item| item.id != id);
    if store.expenses.len() == before {
        return Err(AppError::not_found("expense not found"));
    }

    state.persist_expenses(&store).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn export_earnings(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.lock().await;
    let records: Vec<Vec<(&str, String)>> = store
        .earnings
        .iter()
        .map(|entry| {
            vec![
                ("ID", entry.id.clone()),
                ("Source", entry.source.clone()),
                ("Amount", format!("{:.2}", entry.amount)),
                ("Date", entry.date.to_string()),
                (
                    "Platform",
                    entry
                        .platform_id
                        .as_deref()
                        .map(|id| platform_name(id).to_string())
                        .unwrap_or_default(),
                ),
                ("PostID", entry.post_id.clone().unwrap_or_default()),
                ("Notes", entry.notes.clone().unwrap_or_default()),
            ]
        })
        .collect();

    super::csv_response("monetization_entries", csv::to_csv(&records))
}

pub async fn export_expenses(State(state): State<AppState>) -> impl IntoResponse {
    let store = state.store.lock().await;
    let records: Vec<Vec<(&str, String)>> = store
        .expenses
        .iter()
        .map(|item| {
            vec![
                ("ID", item.id.clone()),
                ("Description", item.description.clone()),
                ("Category", item.category.clone()),
                ("Amount", format!("{:.2}", item.amount)),
                ("Date", item.date.to_string()),
            ]
        })
        .collect();

    super::csv_response("expenses", csv::to_csv(&records))
}
