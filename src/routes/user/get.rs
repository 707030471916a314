use actix_web::{get, web};

use crate::types::response::{ApiResponse, ApiResult, Envelope};
use crate::types::user::UserView;
use crate::utils::webutils::AuthenticatedUser;

/// Always answers with the caller's own record; the path id is not looked up.
#[get("/{user_id}")]
pub async fn get_user(
    user: AuthenticatedUser,
    _path: web::Path<String>,
) -> ApiResult<Envelope<UserView>> {
    Ok(ApiResponse::Ok(Envelope::success("Auth user details", UserView::from(&*user))))
}
