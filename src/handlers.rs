use crate::{
    auth::{AdminSession, VisitorSession},
    blacklist::BlacklistState,
    chatbot::ChatTranscript,
    config::AppConfig,
    content,
    error::ApiError,
    models::{
        AdminDashboardView, AuthResponse, BlacklistEntry, BlacklistEntryRequest, BlacklistView,
        ChatMessage, ChatRequest, CheckinPageView, CheckinRequest, CheckoutReceipt, ErrorBody,
        FeedbackAnalysisView, FeedbackFormView, FeedbackReceipt, FeedbackSubmission,
        FormPageView, HomeView, LoginRequest, LogoutResponse, RegistrationFormView,
        SessionRecord, SignupRequest, SubmissionReceipt, UserType, VisitView,
        VisitorBadgeView, VisitorDashboardView, VisitorRegistrationRequest,
    },
    navigation::page_frame,
    session::{SessionContext, keys},
    validation::{self, USER_TYPES, VISIT_DURATIONS, VISIT_PURPOSES},
    visit::VisitStatus,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
};
use chrono::{Duration, Utc};
use serde::Deserialize;

// --- Filter Structs ---

/// BlacklistQuery
///
/// Query parameters for the blacklist page (GET /blacklist).
#[derive(Deserialize, utoipa::IntoParams, Default)]
pub struct BlacklistQuery {
    /// Case-insensitive substring matched against name or email.
    pub search: Option<String>,
}

// --- Public Pages ---

/// home
///
/// [Public Route] Landing page. The menu follows whoever is signed in.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Home page", body = HomeView))
)]
pub async fn home(ctx: SessionContext) -> Result<Json<HomeView>, ApiError> {
    let user = ctx.get_session().await?;
    Ok(Json(HomeView {
        frame: page_frame("Visitor Management System", user),
        features: content::home_features(),
    }))
}

#[utoipa::path(
    get,
    path = "/login",
    responses((status = 200, description = "Login form", body = FormPageView))
)]
pub async fn login_page(ctx: SessionContext) -> Result<Json<FormPageView>, ApiError> {
    let user = ctx.get_session().await?;
    Ok(Json(FormPageView {
        frame: page_frame("Welcome Back", user),
        user_types: content::options(USER_TYPES),
    }))
}

#[utoipa::path(
    get,
    path = "/signup",
    responses((status = 200, description = "Signup form", body = FormPageView))
)]
pub async fn signup_page(ctx: SessionContext) -> Result<Json<FormPageView>, ApiError> {
    let user = ctx.get_session().await?;
    Ok(Json(FormPageView {
        frame: page_frame("Create Account", user),
        user_types: content::options(USER_TYPES),
    }))
}

/// login
///
/// [Public Route] Simulated sign-in. The credentials are shape-checked only;
/// on success the session record is written and the client is told where to go.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = AuthResponse),
        (status = 422, description = "Invalid fields", body = ErrorBody)
    )
)]
pub async fn login(
    State(config): State<AppConfig>,
    ctx: SessionContext,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    validation::validate_login(&payload)?;
    let role = parse_user_type(&payload.user_type)?;

    let email = payload.email.trim().to_string();
    let display_name = email.split('@').next().unwrap_or_default().to_string();
    let record = SessionRecord {
        display_name,
        email,
        role,
    };
    ctx.set_session(&record).await?;

    tracing::info!(email = %record.email, role = ?record.role, "session started via login");

    Ok(Json(AuthResponse {
        message: format!("Welcome back! Redirecting to {} dashboard...", payload.user_type.trim()),
        redirect_to: role.home_path().to_string(),
        redirect_after_ms: config.redirect_delay_ms,
        session: record,
    }))
}

/// signup
///
/// [Public Route] Simulated account creation. Nothing is stored beyond the
/// session record; the password and photo are discarded after validation.
#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created", body = AuthResponse),
        (status = 422, description = "Invalid fields", body = ErrorBody)
    )
)]
pub async fn signup(
    State(config): State<AppConfig>,
    ctx: SessionContext,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    validation::validate_signup(&payload)?;
    let role = parse_user_type(&payload.user_type)?;

    let record = SessionRecord {
        display_name: format!("{} {}", payload.first_name.trim(), payload.last_name.trim()),
        email: payload.email.trim().to_string(),
        role,
    };
    ctx.set_session(&record).await?;

    tracing::info!(email = %record.email, role = ?record.role, "session started via signup");

    Ok(Json(AuthResponse {
        message: format!(
            "Account created successfully. Redirecting to {} dashboard...",
            payload.user_type.trim()
        ),
        redirect_to: role.home_path().to_string(),
        redirect_after_ms: config.redirect_delay_ms,
        session: record,
    }))
}

/// logout
///
/// [Public Route] Drops the session record. Logging out while anonymous is a no-op.
#[utoipa::path(
    post,
    path = "/logout",
    responses((status = 200, description = "Signed out", body = LogoutResponse))
)]
pub async fn logout(ctx: SessionContext) -> Result<Json<LogoutResponse>, ApiError> {
    ctx.clear_session().await?;
    tracing::info!("session cleared");
    Ok(Json(LogoutResponse {
        redirect_to: "/".to_string(),
    }))
}

// --- Chatbot ---

async fn load_transcript(ctx: &SessionContext) -> Result<ChatTranscript, ApiError> {
    Ok(ctx
        .load::<ChatTranscript>(keys::CHAT)
        .await?
        .unwrap_or_else(|| ChatTranscript::new(Utc::now())))
}

/// get_chat
///
/// [Public Route] The caller's transcript, starting with the bot greeting.
#[utoipa::path(
    get,
    path = "/chat",
    responses((status = 200, description = "Transcript", body = [ChatMessage]))
)]
pub async fn get_chat(ctx: SessionContext) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    let transcript = load_transcript(&ctx).await?;
    Ok(Json(transcript.messages().to_vec()))
}

/// post_chat
///
/// [Public Route] Appends the user's message and the canned reply. Returns the
/// two new messages, or nothing for blank input.
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses((status = 200, description = "New messages", body = [ChatMessage]))
)]
pub async fn post_chat(
    ctx: SessionContext,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    let mut transcript = load_transcript(&ctx).await?;
    let appended = transcript.submit(&payload.message, Utc::now()).to_vec();
    if !appended.is_empty() {
        ctx.store(keys::CHAT, &transcript).await?;
    }
    Ok(Json(appended))
}

// --- Admin Pages ---

/// admin_dashboard
///
/// [Admin Route] Overview stats and recent activity.
#[utoipa::path(
    get,
    path = "/admin-dashboard",
    responses(
        (status = 200, description = "Admin dashboard", body = AdminDashboardView),
        (status = 303, description = "Not signed in as admin")
    )
)]
pub async fn admin_dashboard(AdminSession { user, .. }: AdminSession) -> Json<AdminDashboardView> {
    Json(AdminDashboardView {
        frame: page_frame("Admin Dashboard", Some(user)),
        stats: content::admin_stats(),
        recent_activity: content::recent_activity(),
    })
}

#[utoipa::path(
    get,
    path = "/feedback-analysis",
    responses(
        (status = 200, description = "Feedback analysis", body = FeedbackAnalysisView),
        (status = 303, description = "Not signed in as admin")
    )
)]
pub async fn feedback_analysis(AdminSession { user, .. }: AdminSession) -> Json<FeedbackAnalysisView> {
    Json(FeedbackAnalysisView {
        frame: page_frame("Feedback Analysis", Some(user)),
        average_rating: content::AVERAGE_RATING,
        categories: content::category_averages(),
        recent: content::recent_feedback(),
    })
}

/// get_blacklist
///
/// [Admin Route] Lists the blacklist, filtered by the optional search term.
#[utoipa::path(
    get,
    path = "/blacklist",
    params(BlacklistQuery),
    responses(
        (status = 200, description = "Blacklist", body = BlacklistView),
        (status = 303, description = "Not signed in as admin")
    )
)]
pub async fn get_blacklist(
    AdminSession { user, .. }: AdminSession,
    State(blacklist): State<BlacklistState>,
    Query(filter): Query<BlacklistQuery>,
) -> Json<BlacklistView> {
    let search = filter.search.unwrap_or_default();
    let list = blacklist.read().await;
    let entries = list.search(&search);

    Json(BlacklistView {
        frame: page_frame("Security Blacklist", Some(user)),
        total: list.len(),
        shown: entries.len(),
        search,
        entries,
    })
}

/// add_blacklist_entry
///
/// [Admin Route] Adds a restricted visitor, attributed to the acting admin.
#[utoipa::path(
    post,
    path = "/blacklist",
    request_body = BlacklistEntryRequest,
    responses(
        (status = 201, description = "Added", body = BlacklistEntry),
        (status = 422, description = "Invalid fields", body = ErrorBody)
    )
)]
pub async fn add_blacklist_entry(
    AdminSession { user, .. }: AdminSession,
    State(blacklist): State<BlacklistState>,
    Json(payload): Json<BlacklistEntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validation::validate_blacklist_entry(&payload)?;

    let entry = blacklist
        .write()
        .await
        .add(payload, &user.display_name, Utc::now().date_naive());

    tracing::info!(id = entry.id, added_by = %entry.added_by, "blacklist entry added");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// update_blacklist_entry
///
/// [Admin Route] Replaces the details of an existing entry.
#[utoipa::path(
    put,
    path = "/blacklist/{id}",
    params(("id" = u32, Path, description = "Blacklist entry ID")),
    request_body = BlacklistEntryRequest,
    responses(
        (status = 200, description = "Updated", body = BlacklistEntry),
        (status = 404, description = "No such entry", body = ErrorBody),
        (status = 422, description = "Invalid fields", body = ErrorBody)
    )
)]
pub async fn update_blacklist_entry(
    _admin: AdminSession,
    State(blacklist): State<BlacklistState>,
    Path(id): Path<u32>,
    Json(payload): Json<BlacklistEntryRequest>,
) -> Result<Json<BlacklistEntry>, ApiError> {
    validation::validate_blacklist_entry(&payload)?;

    match blacklist.write().await.update(id, payload) {
        Some(entry) => {
            tracing::info!(id, "blacklist entry updated");
            Ok(Json(entry))
        }
        None => Err(ApiError::NotFound(format!("Blacklist entry {id}"))),
    }
}

/// delete_blacklist_entry
///
/// [Admin Route] Removes one entry. Others keep their order.
#[utoipa::path(
    delete,
    path = "/blacklist/{id}",
    params(("id" = u32, Path, description = "Blacklist entry ID")),
    responses(
        (status = 204, description = "Removed"),
        (status = 404, description = "No such entry", body = ErrorBody)
    )
)]
pub async fn delete_blacklist_entry(
    _admin: AdminSession,
    State(blacklist): State<BlacklistState>,
    Path(id): Path<u32>,
) -> Result<StatusCode, ApiError> {
    match blacklist.write().await.remove(id) {
        Some(_) => {
            tracing::info!(id, "blacklist entry removed");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(ApiError::NotFound(format!("Blacklist entry {id}"))),
    }
}

// --- Visitor Pages ---

async fn load_visit(ctx: &SessionContext) -> Result<VisitStatus, ApiError> {
    Ok(ctx.load::<VisitStatus>(keys::VISIT).await?.unwrap_or_default())
}

#[utoipa::path(
    get,
    path = "/visitor-dashboard",
    responses(
        (status = 200, description = "Visitor dashboard", body = VisitorDashboardView),
        (status = 303, description = "Not signed in as visitor")
    )
)]
pub async fn visitor_dashboard(
    VisitorSession { user, ctx }: VisitorSession,
) -> Result<Json<VisitorDashboardView>, ApiError> {
    let visit = load_visit(&ctx).await?;
    Ok(Json(VisitorDashboardView {
        greeting: format!("Welcome, {}!", user.display_name),
        frame: page_frame("Visitor Dashboard", Some(user)),
        visit: visit.view(),
        quick_actions: content::visitor_quick_actions(),
    }))
}

#[utoipa::path(
    get,
    path = "/visitor-registration",
    responses((status = 200, description = "Registration form", body = RegistrationFormView))
)]
pub async fn registration_page(
    VisitorSession { user, .. }: VisitorSession,
) -> Json<RegistrationFormView> {
    Json(RegistrationFormView {
        frame: page_frame("Visitor Registration", Some(user)),
        purposes: content::options(VISIT_PURPOSES),
        durations: content::options(VISIT_DURATIONS),
    })
}

/// submit_registration
///
/// [Visitor Route] Validates the registration form. Nothing is stored.
#[utoipa::path(
    post,
    path = "/visitor-registration",
    request_body = VisitorRegistrationRequest,
    responses(
        (status = 200, description = "Registered", body = SubmissionReceipt),
        (status = 422, description = "Invalid fields", body = ErrorBody)
    )
)]
pub async fn submit_registration(
    VisitorSession { user, .. }: VisitorSession,
    Json(payload): Json<VisitorRegistrationRequest>,
) -> Result<Json<SubmissionReceipt>, ApiError> {
    validation::validate_registration(&payload)?;
    tracing::info!(visitor = %user.email, purpose = %payload.purpose, "visitor registration accepted");
    Ok(Json(SubmissionReceipt {
        message: "Visitor registration completed successfully.".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/feedback",
    responses((status = 200, description = "Feedback form", body = FeedbackFormView))
)]
pub async fn feedback_page(VisitorSession { user, .. }: VisitorSession) -> Json<FeedbackFormView> {
    Json(FeedbackFormView {
        frame: page_frame("Share Your Feedback", Some(user)),
        categories: content::feedback_categories(),
    })
}

/// submit_feedback
///
/// [Visitor Route] Accepts a rating and discards it.
#[utoipa::path(
    post,
    path = "/feedback",
    request_body = FeedbackSubmission,
    responses(
        (status = 200, description = "Thank you", body = FeedbackReceipt),
        (status = 422, description = "Invalid ratings", body = ErrorBody)
    )
)]
pub async fn submit_feedback(
    _visitor: VisitorSession,
    Json(payload): Json<FeedbackSubmission>,
) -> Result<Json<FeedbackReceipt>, ApiError> {
    validation::validate_feedback(&payload)?;
    tracing::info!(rating = payload.rating, "feedback received");
    Ok(Json(FeedbackReceipt {
        message: "Your feedback has been submitted successfully.".to_string(),
        rating_label: validation::rating_label(payload.rating).to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/checkin-checkout",
    responses((status = 200, description = "Visit status", body = CheckinPageView))
)]
pub async fn checkin_page(
    VisitorSession { user, ctx }: VisitorSession,
) -> Result<Json<CheckinPageView>, ApiError> {
    let visit = load_visit(&ctx).await?;
    Ok(Json(CheckinPageView {
        frame: page_frame("Check-in/Check-out", Some(user)),
        visit: visit.view(),
    }))
}

/// check_in
///
/// [Visitor Route] Starts a visit at the given location.
#[utoipa::path(
    post,
    path = "/checkin-checkout/checkin",
    request_body = CheckinRequest,
    responses(
        (status = 200, description = "Checked in", body = VisitView),
        (status = 409, description = "Already checked in", body = ErrorBody),
        (status = 422, description = "Location missing", body = ErrorBody)
    )
)]
pub async fn check_in(
    VisitorSession { ctx, .. }: VisitorSession,
    Json(payload): Json<CheckinRequest>,
) -> Result<Json<VisitView>, ApiError> {
    let current = load_visit(&ctx).await?;
    let next = current.check_in(&payload.location, Utc::now())?;
    ctx.store(keys::VISIT, &next).await?;
    Ok(Json(next.view()))
}

/// check_out
///
/// [Visitor Route] Ends the current visit and reports its length.
#[utoipa::path(
    post,
    path = "/checkin-checkout/checkout",
    responses(
        (status = 200, description = "Checked out", body = CheckoutReceipt),
        (status = 409, description = "Not checked in", body = ErrorBody)
    )
)]
pub async fn check_out(
    VisitorSession { ctx, .. }: VisitorSession,
) -> Result<Json<CheckoutReceipt>, ApiError> {
    let current = load_visit(&ctx).await?;
    let checkout = current.check_out(Utc::now())?;
    ctx.remove(keys::VISIT).await?;
    Ok(Json(CheckoutReceipt {
        message: format!(
            "Thank you for your visit! Duration: {} minutes",
            checkout.duration_minutes
        ),
        duration_minutes: checkout.duration_minutes,
    }))
}

/// visitor_badge
///
/// [Visitor Route] Badge details. Valid for 24 hours from issue.
#[utoipa::path(
    get,
    path = "/visitor-badge",
    responses((status = 200, description = "Visitor badge", body = VisitorBadgeView))
)]
pub async fn visitor_badge(VisitorSession { user, .. }: VisitorSession) -> Json<VisitorBadgeView> {
    let now = Utc::now();
    Json(VisitorBadgeView {
        visitor_name: user.display_name.clone(),
        frame: page_frame("Your Visitor Badge", Some(user)),
        visitor_id: content::BADGE_VISITOR_ID.to_string(),
        issue_date: now.date_naive(),
        valid_until: (now + Duration::hours(24)).date_naive(),
        location: content::BADGE_LOCATION.to_string(),
        host: content::BADGE_HOST.to_string(),
    })
}

// --- Fallback ---

/// not_found
///
/// Catch-all for unknown paths.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found", "path": uri.path() })),
    )
}

// --- Helpers ---

/// Validation already guarantees a known user type; this only maps it.
fn parse_user_type(value: &str) -> Result<UserType, ApiError> {
    UserType::parse(value).ok_or_else(|| {
        let mut errors = validation::FieldErrors::new();
        errors.check("userType", Some("User Type is not a valid option".to_string()));
        ApiError::Validation(errors)
    })
}
