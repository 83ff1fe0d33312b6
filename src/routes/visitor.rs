use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Visitor Router Module
///
/// Guarded by `VisitorSession`: anonymous callers go to /login, admins to
/// /admin-dashboard.
pub fn visitor_routes() -> Router<AppState> {
    Router::new()
        .route("/visitor-dashboard", get(handlers::visitor_dashboard))
        // GET|POST /visitor-registration
        // Registration form and its validation. Submissions are not stored.
        .route(
            "/visitor-registration",
            get(handlers::registration_page).post(handlers::submit_registration),
        )
        // GET|POST /feedback
        // Feedback form; submissions are validated then discarded.
        .route(
            "/feedback",
            get(handlers::feedback_page).post(handlers::submit_feedback),
        )
        // Check-in status lives in the caller's session slot.
        .route("/checkin-checkout", get(handlers::checkin_page))
        .route("/checkin-checkout/checkin", post(handlers::check_in))
        .route("/checkin-checkout/checkout", post(handlers::check_out))
        .route("/visitor-badge", get(handlers::visitor_badge))
}
