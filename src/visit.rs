use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    models::VisitView,
    validation::{FieldErrors, validate_required},
};

/// VisitError
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VisitError {
    #[error("location is required")]
    MissingLocation(FieldErrors),
    #[error("You are already checked in at {0}.")]
    AlreadyCheckedIn(String),
    #[error("You are not checked in.")]
    NotCheckedIn,
}

/// VisitStatus
///
/// Check-in state kept in the visitor's session slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum VisitStatus {
    #[default]
    Ready,
    CheckedIn {
        location: String,
        since: DateTime<Utc>,
    },
}

/// Summary handed back on check-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    pub location: String,
    pub duration_minutes: i64,
}

impl VisitStatus {
    pub fn check_in(&self, location: &str, now: DateTime<Utc>) -> Result<VisitStatus, VisitError> {
        if let VisitStatus::CheckedIn { location, .. } = self {
            return Err(VisitError::AlreadyCheckedIn(location.clone()));
        }

        let mut errors = FieldErrors::new();
        errors.check("location", validate_required(location, "Location"));
        errors.into_result().map_err(VisitError::MissingLocation)?;

        Ok(VisitStatus::CheckedIn {
            location: location.trim().to_string(),
            since: now,
        })
    }

    /// Duration is rounded to the nearest whole minute.
    pub fn check_out(&self, now: DateTime<Utc>) -> Result<Checkout, VisitError> {
        match self {
            VisitStatus::Ready => Err(VisitError::NotCheckedIn),
            VisitStatus::CheckedIn { location, since } => {
                let seconds = (now - *since).num_seconds().max(0);
                Ok(Checkout {
                    location: location.clone(),
                    duration_minutes: (seconds + 30) / 60,
                })
            }
        }
    }

    pub fn view(&self) -> VisitView {
        match self {
            VisitStatus::Ready => VisitView {
                checked_in: false,
                location: None,
                since: None,
            },
            VisitStatus::CheckedIn { location, since } => VisitView {
                checked_in: true,
                location: Some(location.clone()),
                since: Some(*since),
            },
        }
    }
}
