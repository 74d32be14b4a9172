use actix_web::http::Method;
use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use tracing::{error, warn};

use crate::auth::application::domain::entities::{Actor, Session};
use crate::auth::application::ports::incoming::use_cases::ResolveSessionError;
use crate::auth::application::services::token_hasher::tokens_match;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// The session behind the request cookie, resolved against the live user row.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Session);

impl AuthenticatedUser {
    pub fn actor(&self) -> &Actor {
        &self.0.actor
    }

    pub fn session(&self) -> &Session {
        &self.0
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn is_safe_method(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::OPTIONS | Method::TRACE
    )
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            authenticate(&req)
                .await
                .map(AuthenticatedUser)
                .map_err(create_api_error)
        })
    }
}

async fn authenticate(req: &HttpRequest) -> Result<Session, HttpResponse> {
    let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        error!("AppState missing from request");
        ApiResponse::internal_error()
    })?;

    let token = req
        .cookie(&state.session_cookie.name)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiResponse::unauthorized("UNAUTHENTICATED", "Authentication required"))?;

    let session = match state.auth.resolve_session.execute(&token).await {
        Ok(session) => session,
        Err(ResolveSessionError::InvalidSession) => {
            warn!(path = %req.path(), "Rejected invalid session");
            return Err(ApiResponse::unauthorized(
                "INVALID_SESSION",
                "Session is invalid or has expired",
            ));
        }
        Err(ResolveSessionError::AccountInactive) => {
            warn!(path = %req.path(), "Rejected session of deactivated account");
            return Err(ApiResponse::forbidden(
                "ACCOUNT_INACTIVE",
                "Account has been deactivated",
            ));
        }
        Err(ResolveSessionError::RepositoryError(e)) => {
            error!(error = %e, "Failed to resolve session");
            return Err(ApiResponse::internal_error());
        }
    };

    if !is_safe_method(req.method()) {
        let header = req
            .headers()
            .get(CSRF_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if !tokens_match(&session.csrf_token, header) {
            warn!(
                user_id = %session.actor.id,
                method = %req.method(),
                path = %req.path(),
                "Anti-forgery token mismatch"
            );
            return Err(ApiResponse::forbidden(
                "CSRF_TOKEN_INVALID",
                "Missing or invalid anti-forgery token",
            ));
        }
    }

    Ok(session)
}
