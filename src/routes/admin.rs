use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, put},
};

/// Admin Router Module
///
/// Every handler here takes `AdminSession` as its first argument: anonymous
/// callers are redirected to /login and visitors to /visitor-dashboard before
/// the handler body runs.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // GET /admin-dashboard
        // Overview stats and recent activity (static content).
        .route("/admin-dashboard", get(handlers::admin_dashboard))
        // GET /feedback-analysis
        // Category averages and recent comments (static content).
        .route("/feedback-analysis", get(handlers::feedback_analysis))
        // GET|POST /blacklist
        // Search the in-memory blacklist, or add a restricted visitor.
        .route(
            "/blacklist",
            get(handlers::get_blacklist).post(handlers::add_blacklist_entry),
        )
        // PUT|DELETE /blacklist/{id}
        // Edit or remove one entry by id.
        .route(
            "/blacklist/{id}",
            put(handlers::update_blacklist_entry).delete(handlers::delete_blacklist_entry),
        )
}
