use actix_web::{post, web, HttpRequest};

use crate::db::database_service::DatabaseService;
use crate::services::account;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult, Envelope};
use crate::types::token::AuthPayload;
use crate::types::user::{LoginRequest, UserView};
use crate::utils::payload::{parse_data, request_body};
use crate::utils::token::TokenService;

#[post("/login")]
pub async fn login(
    db: web::Data<DatabaseService>,
    tokens: web::Data<TokenService>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<Envelope<AuthPayload<UserView>>> {
    let credentials = parse_data(request_body(&req, &body))
        .ok()
        .and_then(|payload| LoginRequest::from_payload(&payload))
        .ok_or(AppError::AuthenticationFailed)?;

    let auth = account::login(&db, &tokens, &credentials.email, &credentials.password).await?;

    Ok(ApiResponse::Ok(Envelope::success("Login successful", auth)))
}
