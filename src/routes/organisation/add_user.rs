use actix_web::{post, web};
use tracing::{info, warn};

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::organisation::ROrganisationAddUser;
use crate::types::response::{ApiResponse, ApiResult, Envelope};
use crate::utils::payload::{parse_data, RequestBody};

// TODO: require the caller to be a member of the target organisation once
// clients send a bearer token here.
#[post("/{org_id}/users")]
pub async fn add_user(
    db: web::Data<DatabaseService>,
    path: web::Path<String>,
    body: web::Bytes,
) -> ApiResult<Envelope<()>> {
    let org_id = path.into_inner();

    let request: ROrganisationAddUser = parse_data(RequestBody::Bytes(&body))
        .ok()
        .and_then(|payload| serde_json::from_value(payload).ok())
        .ok_or(AppError::NotModified)?;

    if let Err(e) = db.add_user_to_organisation(&org_id, &request.user_id).await {
        warn!(org_id = %org_id, user_id = %request.user_id, "membership not added: {e}");
        return Err(AppError::NotModified);
    }
    info!(org_id = %org_id, user_id = %request.user_id, "member added");

    Ok(ApiResponse::Ok(Envelope::message_only("User added to organisation successfully")))
}
