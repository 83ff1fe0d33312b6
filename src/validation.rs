use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;
use ts_rs::TS;
use utoipa::ToSchema;

use crate::{
    camera,
    models::{
        BlacklistEntryRequest, FeedbackSubmission, LoginRequest, SignupRequest,
        VisitorRegistrationRequest,
    },
};

/// Shape check only: something, an `@`, something, a dot, something.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

/// Characters accepted as the "special character" of a strong password.
pub const PASSWORD_SPECIALS: &str = "!@#$%^&*(),.?\":{}|<>";

pub const VISIT_PURPOSES: &[(&str, &str)] = &[
    ("meeting", "Business Meeting"),
    ("interview", "Interview"),
    ("delivery", "Delivery"),
    ("maintenance", "Maintenance"),
    ("other", "Other"),
];

pub const VISIT_DURATIONS: &[(&str, &str)] = &[
    ("30min", "30 minutes"),
    ("1hour", "1 hour"),
    ("2hours", "2 hours"),
    ("halfday", "Half day"),
    ("fullday", "Full day"),
];

pub const USER_TYPES: &[(&str, &str)] = &[("admin", "Admin"), ("visitor", "Visitor")];

// --- Field Validators ---

/// validate_required
///
/// Fails iff the trimmed value is empty.
pub fn validate_required(value: &str, field_label: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some(format!("{field_label} is required"));
    }
    None
}

/// validate_email
///
/// Accepts any `local@domain.tld` shape. No RFC 5322 edge cases.
pub fn validate_email(value: &str) -> Option<String> {
    if !EMAIL_RE.is_match(value) {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

/// validate_strong_password
///
/// Runs the length, letter, digit and special-character checks in that order
/// and reports only the first failure.
pub fn validate_strong_password(value: &str) -> Option<String> {
    // Counted in UTF-16 code units.
    if value.encode_utf16().count() < 8 {
        return Some("Password must be at least 8 characters long".to_string());
    }
    if !value.chars().any(|c| c.is_ascii_alphabetic()) {
        return Some("Password must contain at least one letter".to_string());
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one number".to_string());
    }
    if !value.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
        return Some("Password must contain at least one special character".to_string());
    }
    None
}

/// validate_choice
///
/// Required check first, then membership in the allowed option values.
pub fn validate_choice(value: &str, field_label: &str, allowed: &[(&str, &str)]) -> Option<String> {
    if let Some(message) = validate_required(value, field_label) {
        return Some(message);
    }
    if !allowed.iter().any(|(option, _)| *option == value.trim()) {
        return Some(format!("{field_label} is not a valid option"));
    }
    None
}

/// validate_photo
///
/// The photo must be present and decode as a base64 image data URI.
pub fn validate_photo(value: Option<&str>) -> Option<String> {
    let Some(uri) = value.filter(|v| !v.trim().is_empty()) else {
        return Some("Profile photo is required".to_string());
    };
    if camera::decode_data_uri(uri).is_none() {
        return Some("Profile photo must be a captured image".to_string());
    }
    None
}

/// validate_rating
///
/// Ratings run 1 to 5. Category ratings may also be 0, meaning "not rated".
pub fn validate_rating(value: u8, field_label: &str, allow_unrated: bool) -> Option<String> {
    match value {
        0 if allow_unrated => None,
        1..=5 => None,
        _ => Some(format!("{field_label} must be between 1 and 5")),
    }
}

// --- Aggregation ---

/// FieldErrors
///
/// Field name to message. A form may only be submitted while this is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the message, if any, under `field`. The first message for a
    /// field wins.
    pub fn check(&mut self, field: &str, outcome: Option<String>) -> &mut Self {
        if let Some(message) = outcome {
            self.0.entry(field.to_string()).or_insert(message);
        }
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Ok when nothing failed, otherwise hands back the collected errors.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

// --- Form Validators ---

pub fn validate_login(req: &LoginRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors
        .check("email", validate_email(&req.email))
        .check("password", validate_strong_password(&req.password))
        .check("userType", validate_choice(&req.user_type, "User Type", USER_TYPES));
    errors.into_result()
}

pub fn validate_signup(req: &SignupRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors
        .check("firstName", validate_required(&req.first_name, "First Name"))
        .check("lastName", validate_required(&req.last_name, "Last Name"))
        .check("mobile", validate_required(&req.mobile, "Mobile Number"))
        .check("email", validate_email(&req.email))
        .check("userType", validate_choice(&req.user_type, "User Type", USER_TYPES))
        .check("password", validate_strong_password(&req.password))
        .check("profileImage", validate_photo(req.profile_image.as_deref()));

    if req.password != req.confirm_password {
        errors.check("confirmPassword", Some("Passwords do not match".to_string()));
    }
    errors.into_result()
}

pub fn validate_registration(req: &VisitorRegistrationRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors
        .check("fullName", validate_required(&req.full_name, "Full Name"))
        .check("email", validate_email(&req.email))
        .check("phone", validate_required(&req.phone, "Phone Number"))
        .check("company", validate_required(&req.company, "Company/Organization"))
        .check("purpose", validate_choice(&req.purpose, "Purpose of Visit", VISIT_PURPOSES))
        .check("host", validate_required(&req.host, "Host/Contact Person"))
        .check(
            "expectedDuration",
            validate_choice(&req.expected_duration, "Expected Duration", VISIT_DURATIONS),
        )
        .check("profileImage", validate_photo(req.profile_image.as_deref()));
    errors.into_result()
}

pub fn validate_blacklist_entry(req: &BlacklistEntryRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    errors
        .check("name", validate_required(&req.name, "Name"))
        .check("email", validate_email(&req.email))
        .check("reason", validate_required(&req.reason, "Reason"));
    errors.into_result()
}

pub fn validate_feedback(req: &FeedbackSubmission) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();
    if req.rating == 0 {
        errors.check("rating", Some("Please provide an overall rating.".to_string()));
    }
    errors
        .check("rating", validate_rating(req.rating, "Overall rating", false))
        .check(
            "serviceQuality",
            validate_rating(req.categories.service_quality, "Service Quality", true),
        )
        .check("facilities", validate_rating(req.categories.facilities, "Facilities", true))
        .check("staff", validate_rating(req.categories.staff, "Staff Friendliness", true))
        .check(
            "checkinProcess",
            validate_rating(req.categories.checkin_process, "Check-in Process", true),
        );
    errors.into_result()
}

/// Star label shown next to an overall rating.
pub fn rating_label(rating: u8) -> &'static str {
    match rating {
        1 => "Poor",
        2 => "Fair",
        3 => "Good",
        4 => "Very Good",
        5 => "Excellent",
        _ => "Not rated",
    }
}
