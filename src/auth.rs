use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    error::ApiError,
    models::{SessionRecord, UserType},
    session::SessionContext,
};

/// Where anonymous callers are sent.
pub const LOGIN_PATH: &str = "/login";

/// Access
///
/// Outcome of the route guard for one page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted(SessionRecord),
    Redirect(&'static str),
}

/// authorize
///
/// The route guard decision. No session goes to the login page; a session
/// of the wrong role goes to its own home page.
pub fn authorize(required: UserType, session: Option<SessionRecord>) -> Access {
    match session {
        None => Access::Redirect(LOGIN_PATH),
        Some(record) if record.role != required => Access::Redirect(record.role.home_path()),
        Some(record) => Access::Granted(record),
    }
}

/// GuardRejection
///
/// Page guards reject with a `303 See Other` redirect. Storage failures while
/// reading the session surface as the usual 500.
#[derive(Debug)]
pub enum GuardRejection {
    Redirect(&'static str),
    Storage(ApiError),
}

impl IntoResponse for GuardRejection {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect(path) => Redirect::to(path).into_response(),
            Self::Storage(e) => e.into_response(),
        }
    }
}

async fn guard_parts<S>(
    parts: &mut Parts,
    state: &S,
    required: UserType,
) -> Result<(SessionRecord, SessionContext), GuardRejection>
where
    S: Send + Sync,
{
    let ctx = SessionContext::from_request_parts(parts, state)
        .await
        .map_err(GuardRejection::Storage)?;
    let session = ctx
        .get_session()
        .await
        .map_err(|e| GuardRejection::Storage(e.into()))?;

    match authorize(required, session) {
        Access::Granted(record) => Ok((record, ctx)),
        Access::Redirect(path) => {
            tracing::debug!(
                uri = %parts.uri,
                required = ?required,
                redirect = path,
                "route guard redirect"
            );
            Err(GuardRejection::Redirect(path))
        }
    }
}

/// AdminSession Extractor
///
/// Put this first in an admin page handler's arguments. The handler only runs
/// for a stored admin record; everyone else is redirected.
#[derive(Clone)]
pub struct AdminSession {
    pub user: SessionRecord,
    pub ctx: SessionContext,
}

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = GuardRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let (user, ctx) = guard_parts(parts, state, UserType::Admin).await?;
        Ok(Self { user, ctx })
    }
}

/// VisitorSession Extractor
///
/// Same as `AdminSession`, for visitor pages.
#[derive(Clone)]
pub struct VisitorSession {
    pub user: SessionRecord,
    pub ctx: SessionContext,
}

impl<S> FromRequestParts<S> for VisitorSession
where
    S: Send + Sync,
{
    type Rejection = GuardRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let (user, ctx) = guard_parts(parts, state, UserType::Visitor).await?;
        Ok(Self { user, ctx })
    }
}
