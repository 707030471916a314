use actix_web::{post, web, HttpRequest};
use tracing::warn;

use crate::db::database_service::DatabaseService;
use crate::services::account;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, Envelope};
use crate::types::token::AuthPayload;
use crate::types::user::{RegisterRequest, UserView};
use crate::utils::payload::{parse_data, request_body};
use crate::utils::token::TokenService;

#[post("/register")]
pub async fn register(
    db: web::Data<DatabaseService>,
    tokens: web::Data<TokenService>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<Envelope<AuthPayload<UserView>>> {
    let payload = parse_data(request_body(&req, &body)).map_err(|e| {
        warn!("unreadable registration body: {e}");
        AppError::RegistrationFailed
    })?;

    let registration = RegisterRequest::validate_payload(&payload).map_err(|errors| {
        let (field, message) = errors
            .reported()
            .unwrap_or_else(|| ("non_field_errors".to_string(), "Validation error".to_string()));
        AppError::Validation { field, message }
    })?;

    // duplicates, storage and hashing failures all look the same to clients
    let auth = account::register(&db, &tokens, registration)
        .await
        .map_err(|e| {
            warn!("registration failed: {e}");
            AppError::RegistrationFailed
        })?;

    Ok(ApiResponse::Created(Envelope::success("Registration successful", auth)))
}
