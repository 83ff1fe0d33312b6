use axum::{
    Router,
    extract::FromRef,
    http::HeaderName,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Domain logic. Everything here is synchronous and free of HTTP types.
pub mod blacklist;
pub mod camera;
pub mod chatbot;
pub mod navigation;
pub mod validation;
pub mod visit;

// Session slot access and the route guard built on it.
pub mod auth;
pub mod session;
pub mod storage;

// HTTP surface.
pub mod config;
pub mod content;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
use routes::{admin, public, visitor};

// --- Public Re-exports ---

pub use blacklist::{Blacklist, BlacklistState};
pub use config::AppConfig;
pub use session::SessionContext;
pub use storage::{CookieSessionStorage, MemoryStorage, SessionStorage};

/// ApiDoc
///
/// OpenAPI document for every route, served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::home, handlers::login_page, handlers::signup_page, handlers::login,
        handlers::signup, handlers::logout, handlers::get_chat, handlers::post_chat,
        handlers::admin_dashboard, handlers::feedback_analysis, handlers::get_blacklist,
        handlers::add_blacklist_entry, handlers::update_blacklist_entry,
        handlers::delete_blacklist_entry, handlers::visitor_dashboard,
        handlers::registration_page, handlers::submit_registration, handlers::feedback_page,
        handlers::submit_feedback, handlers::checkin_page, handlers::check_in,
        handlers::check_out, handlers::visitor_badge
    ),
    components(
        schemas(
            models::SessionRecord, models::UserType, models::Role, models::LoginRequest,
            models::SignupRequest, models::AuthResponse, models::LogoutResponse,
            models::ErrorBody, models::NavItem, models::PageFrame, models::BlacklistEntry,
            models::BlacklistEntryRequest, models::BlacklistView, models::ChatMessage,
            models::ChatRequest, models::Sender, models::FeedbackSubmission,
            models::CategoryRatings, models::FeedbackReceipt, models::FeedbackAnalysisView,
            models::VisitorRegistrationRequest, models::SubmissionReceipt,
            models::CheckinRequest, models::VisitView, models::CheckoutReceipt,
            models::AdminDashboardView, models::VisitorDashboardView,
            models::VisitorBadgeView, models::HomeView, models::FormPageView,
            validation::FieldErrors,
        )
    ),
    tags(
        (name = "visitor-portal", description = "Visitor Management System API")
    )
)]
struct ApiDoc;

/// AppState
///
/// Process-wide state. Per-client state (identity, chat, visit) lives in the
/// session slot instead.
#[derive(Clone)]
pub struct AppState {
    /// In-memory blacklist, seeded on start and lost on restart.
    pub blacklist: BlacklistState,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            blacklist: Blacklist::seeded().into_state(),
            config,
        }
    }
}

// --- Axum FromRef Extractor Implementations ---

impl FromRef<AppState> for BlacklistState {
    fn from_ref(app_state: &AppState) -> BlacklistState {
        app_state.blacklist.clone()
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles all route groups, the session layer, and the observability stack.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let x_request_id = HeaderName::from_static("x-request-id");
    let session_layer = session::create_session_layer(&state.config);

    let base_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public::public_routes())
        .merge(admin::admin_routes())
        .merge(visitor::visitor_routes())
        .fallback(handlers::not_found)
        .with_state(state)
        // Puts a `Session` in every request's extensions for `SessionContext`.
        .layer(session_layer);

    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Span per request carrying method, URI and the `x-request-id` header.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
