use crate::handlers::{assist, finance, pages, posts, tracker};
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/planner", get(pages::planner))
        .route("/tracker", get(pages::tracker))
        .route("/monetization", get(pages::monetization))
        .route("/api/summary", get(pages::summary))
        .route("/api/platforms", get(pages::platforms))
        .route(
            "/api/preferences",
            get(pages::get_preferences).put(pages::put_preferences),
        )
        .route("/api/posts", get(posts::list).post(posts::create))
        .route("/api/posts/export", get(posts::export))
        .route("/api/posts/:id", put(posts::update).delete(posts::remove))
        .route("/api/calendar", get(posts::calendar))
        .route("/api/accounts", get(tracker::list).post(tracker::create))
        .route(
            "/api/accounts/:id",
            put(tracker::update).delete(tracker::remove),
        )
        .route("/api/accounts/:id/goal", put(tracker::set_goal))
        .route("/api/accounts/:id/posts", post(tracker::add_post))
        .route(
            "/api/accounts/:id/posts/:post_id",
            put(tracker::update_post).delete(tracker::remove_post),
        )
        .route(
            "/api/earnings",
            get(finance::list_earnings).post(finance::create_earning),
        )
        .route("/api/earnings/export", get(finance::export_earnings))
        .route(
            "/api/earnings/:id",
            put(finance::update_earning).delete(finance::remove_earning),
        )
        .route(
            "/api/expenses",
            get(finance::list_expenses).post(finance::create_expense),
        )
        .route("/api/expenses/export", get(finance::export_expenses))
        .route(
            "/api/expenses/:id",
            put(finance::update_expense).delete(finance::remove_expense),
        )
        .route("/api/assist/status", get(assist::status))
        .route("/api/assist/idea", post(assist::idea))
        .route("/api/assist/repurpose", post(assist::repurpose))
        .route("/api/assist/tips", post(assist::tips))
        .route("/api/assist/revenue-ideas", post(assist::revenue_ideas))
        .route("/api/assist/trends", post(assist::trends))
        .route("/api/assist/titles", post(assist::titles))
        .route("/api/assist/analysis", post(assist::analysis))
        .with_state(state)
}
