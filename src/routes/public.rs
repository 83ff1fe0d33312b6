use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Endpoints reachable without a session: the landing page, the auth forms,
/// and the chatbot widget that appears on every page.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Liveness probe.
        .route("/health", get(|| async { "ok" }))
        // GET /
        // Landing page; the menu reflects the caller's role.
        .route("/", get(handlers::home))
        // GET|POST /login
        // Simulated sign-in. A successful POST writes the session record.
        .route("/login", get(handlers::login_page).post(handlers::login))
        // GET|POST /signup
        // Simulated account creation. Also writes the session record.
        .route("/signup", get(handlers::signup_page).post(handlers::signup))
        // POST /logout
        // Removes the session record; every guarded page then redirects to /login.
        .route("/logout", post(handlers::logout))
        // GET|POST /chat
        // Session-scoped chatbot transcript.
        .route("/chat", get(handlers::get_chat).post(handlers::post_chat))
}
