use actix_web::{post, web};
use tracing::{info, warn};

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::organisation::{OrganisationView, ROrganisationCreate};
use crate::types::response::{ApiResponse, ApiResult, Envelope};
use crate::utils::payload::{parse_data, RequestBody};
use crate::utils::webutils::AuthenticatedUser;

#[post("")]
pub async fn create_organisation(
    user: AuthenticatedUser,
    db: web::Data<DatabaseService>,
    body: web::Bytes,
) -> ApiResult<Envelope<OrganisationView>> {
    let payload = parse_data(RequestBody::Bytes(&body)).map_err(|e| {
        warn!("unreadable organisation body: {e}");
        AppError::BadRequest(e.to_string())
    })?;

    let create = ROrganisationCreate::from_payload(&payload).into_create(&user.first_name);
    let org = db.create_organisation_for_member(create, &user.user_id).await?;
    info!(org_id = %org.org_id, user_id = %user.user_id, "organisation created");

    Ok(ApiResponse::Created(Envelope::success(
        "Organisation created successfully",
        OrganisationView::from(&org),
    )))
}
