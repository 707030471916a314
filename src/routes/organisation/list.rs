use actix_web::{get, web};

use crate::db::database_service::DatabaseService;
use crate::types::organisation::{OrganisationList, OrganisationView};
use crate::types::response::{ApiResponse, ApiResult, Envelope};
use crate::utils::webutils::AuthenticatedUser;

#[get("")]
pub async fn list_organisations(
    user: AuthenticatedUser,
    db: web::Data<DatabaseService>,
) -> ApiResult<Envelope<OrganisationList>> {
    let organisations = db
        .list_organisations_for_user(&user.user_id)
        .await?
        .iter()
        .map(OrganisationView::from)
        .collect();

    Ok(ApiResponse::Ok(Envelope::success(
        "Auth user organisations",
        OrganisationList { organisations },
    )))
}
