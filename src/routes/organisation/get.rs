use actix_web::{get, web};
use tracing::warn;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::organisation::OrganisationView;
use crate::types::response::{ApiResponse, ApiResult, Envelope};
use crate::utils::webutils::AuthenticatedUser;

/// Non-members get the same 404 as a missing organisation.
#[get("/{org_id}")]
pub async fn get_organisation(
    user: AuthenticatedUser,
    db: web::Data<DatabaseService>,
    path: web::Path<String>,
) -> ApiResult<Envelope<OrganisationView>> {
    let org_id = path.into_inner();

    let org = match db.get_organisation_for_member(&user.user_id, &org_id).await {
        Ok(Some(org)) => org,
        Ok(None) => return Err(AppError::OrganisationNotFound),
        Err(e) => {
            warn!(org_id = %org_id, "organisation lookup failed: {e}");
            return Err(AppError::OrganisationNotFound);
        }
    };

    Ok(ApiResponse::Ok(Envelope::success("Organisation detail", OrganisationView::from(&org))))
}
