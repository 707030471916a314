use crate::types::error::AppError;
use actix_web::{web, HttpResponse};

pub mod auth;
pub mod index;
pub mod organisation;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index::index);
    cfg.service(
        web::scope("/auth")
            .service(auth::register::register)
            .service(auth::login::login)
    );
    cfg.service(
        web::scope("/api/users")
            .service(user::get::get_user)
    );
    cfg.service(
        web::scope("/api/organisations")
            .service(organisation::list::list_organisations)
            .service(organisation::create::create_organisation)
            .service(organisation::get::get_organisation)
            .service(organisation::add_user::add_user)
    );
    cfg.default_service(web::to(not_found));
}

async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound)
}
