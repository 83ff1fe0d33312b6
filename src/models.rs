use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use crate::validation::FieldErrors;

// --- Identity ---

/// UserType
///
/// The role carried by a stored session record. Serialized lowercase, matching
/// the values submitted by the login and signup forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum UserType {
    Admin,
    Visitor,
}

impl UserType {
    /// Parses a submitted form value ("admin" / "visitor").
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "admin" => Some(Self::Admin),
            "visitor" => Some(Self::Visitor),
            _ => None,
        }
    }

    /// The landing page for this role. Guards redirect wrong-role callers here.
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Admin => "/admin-dashboard",
            Self::Visitor => "/visitor-dashboard",
        }
    }
}

/// Role
///
/// The viewer's state as seen by navigation: either anonymous or signed in with
/// one of the two user types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Role {
    Anonymous,
    Admin,
    Visitor,
}

impl From<Option<&SessionRecord>> for Role {
    fn from(record: Option<&SessionRecord>) -> Self {
        match record.map(|r| r.role) {
            None => Role::Anonymous,
            Some(UserType::Admin) => Role::Admin,
            Some(UserType::Visitor) => Role::Visitor,
        }
    }
}

/// SessionRecord
///
/// The single identity record held in the client's session slot. Written on
/// login/signup, removed on logout, and trusted as-is in between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionRecord {
    pub display_name: String,
    pub email: String,
    pub role: UserType,
}

// --- Auth Payloads ---

/// LoginRequest
///
/// Every field defaults to empty and `user_type` stays a raw string, so a
/// missing or unknown value surfaces as a field error rather than a
/// deserialization failure. The other form payloads follow the same rule.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub user_type: String,
}

/// SignupRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub user_type: String,
    /// Captured still frame as a `data:image/...;base64,` URI.
    pub profile_image: Option<String>,
}

/// AuthResponse
///
/// Returned by a successful login or signup. The client waits
/// `redirect_after_ms` before navigating to `redirect_to`.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AuthResponse {
    pub session: SessionRecord,
    pub message: String,
    pub redirect_to: String,
    pub redirect_after_ms: u64,
}

/// LogoutResponse
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LogoutResponse {
    pub redirect_to: String,
}

/// ErrorBody
///
/// Uniform error payload. `fields` is only present for validation failures.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

// --- Navigation & Page Frame ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct NavItem {
    pub name: String,
    pub path: String,
}

/// PageFrame
///
/// The chrome shared by every page view: title, current identity, and the
/// navigation menu for that identity's role.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct PageFrame {
    pub title: String,
    pub role: Role,
    pub user: Option<SessionRecord>,
    pub nav: Vec<NavItem>,
}

// --- Blacklist ---

/// BlacklistEntry
///
/// A restricted visitor. Held only in process memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BlacklistEntry {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub reason: String,
    pub date_added: NaiveDate,
    pub added_by: String,
}

/// BlacklistEntryRequest
///
/// Payload for both adding and editing an entry.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(default)]
#[ts(export)]
pub struct BlacklistEntryRequest {
    pub name: String,
    pub email: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct BlacklistView {
    pub frame: PageFrame,
    pub search: String,
    pub total: usize,
    pub shown: usize,
    pub entries: Vec<BlacklistEntry>,
}

// --- Chat ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct ChatMessage {
    pub id: u32,
    pub text: String,
    pub sender: Sender,
    #[ts(type = "string")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[ts(export)]
pub struct ChatRequest {
    pub message: String,
}

// --- Feedback ---

/// CategoryRatings
///
/// Per-area ratings. Zero means the visitor left the category unrated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct CategoryRatings {
    pub service_quality: u8,
    pub facilities: u8,
    pub staff: u8,
    pub checkin_process: u8,
}

/// FeedbackSubmission
///
/// Validated, logged, and discarded. Nothing is stored.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(default)]
#[ts(export)]
pub struct FeedbackSubmission {
    pub rating: u8,
    pub categories: CategoryRatings,
    pub comments: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FeedbackReceipt {
    pub message: String,
    pub rating_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct CategoryAverage {
    pub category: String,
    pub rating: f32,
    pub responses: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct RecentFeedback {
    pub rating: u8,
    pub comment: String,
    pub date: String,
    pub visitor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FeedbackAnalysisView {
    pub frame: PageFrame,
    pub average_rating: f32,
    pub categories: Vec<CategoryAverage>,
    pub recent: Vec<RecentFeedback>,
}

// --- Registration ---

/// VisitorRegistrationRequest
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct VisitorRegistrationRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    /// One of `meeting`, `interview`, `delivery`, `maintenance`, `other`.
    pub purpose: String,
    pub host: String,
    /// One of `30min`, `1hour`, `2hours`, `halfday`, `fullday`.
    pub expected_duration: String,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RegistrationFormView {
    pub frame: PageFrame,
    pub purposes: Vec<SelectOption>,
    pub durations: Vec<SelectOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct SubmissionReceipt {
    pub message: String,
}

// --- Check-in / Check-out ---

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Default)]
#[serde(default)]
#[ts(export)]
pub struct CheckinRequest {
    pub location: String,
}

/// VisitView
///
/// Current visit status as rendered by the check-in page.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VisitView {
    pub checked_in: bool,
    pub location: Option<String>,
    #[ts(type = "string | null")]
    pub since: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CheckoutReceipt {
    pub message: String,
    pub duration_minutes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct CheckinPageView {
    pub frame: PageFrame,
    pub visit: VisitView,
}

// --- Dashboards ---

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ActivityItem {
    pub time: String,
    pub event: String,
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AdminDashboardView {
    pub frame: PageFrame,
    pub stats: Vec<StatCard>,
    pub recent_activity: Vec<ActivityItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct QuickAction {
    pub title: String,
    pub description: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VisitorDashboardView {
    pub frame: PageFrame,
    pub greeting: String,
    pub visit: VisitView,
    pub quick_actions: Vec<QuickAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VisitorBadgeView {
    pub frame: PageFrame,
    pub visitor_name: String,
    pub visitor_id: String,
    pub issue_date: NaiveDate,
    pub valid_until: NaiveDate,
    pub location: String,
    pub host: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct HomeView {
    pub frame: PageFrame,
    pub features: Vec<QuickAction>,
}

/// FormPageView
///
/// The login and signup pages have no content beyond their frame and the
/// selectable user types.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FormPageView {
    pub frame: PageFrame,
    pub user_types: Vec<SelectOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct FeedbackFormView {
    pub frame: PageFrame,
    pub categories: Vec<SelectOption>,
}
