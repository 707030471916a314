use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::utils::token::TokenService;
use actix_web::dev::Payload;
use actix_web::http::header::Header;
use actix_web::{web, FromRequest, HttpRequest};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use entity::user::Model as UserModel;
use std::future::Future;
use std::pin::Pin;
use tracing::{debug, error};

/// The user behind a valid `Authorization: Bearer <access token>` header.
///
/// Extraction fails before the handler runs: no header (or another scheme)
/// is `NotAuthenticated`, a bad/expired token or a vanished user is
/// `InvalidToken`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub UserModel);

impl AuthenticatedUser {
    pub fn into_inner(self) -> UserModel {
        self.0
    }
}

impl std::ops::Deref for AuthenticatedUser {
    type Target = UserModel;

    fn deref(&self) -> &UserModel {
        &self.0
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = Authorization::<Bearer>::parse(req)
            .map(|auth| auth.into_scheme().token().to_string());
        let db = req.app_data::<web::Data<DatabaseService>>().cloned();
        let tokens = req.app_data::<web::Data<TokenService>>().cloned();

        Box::pin(async move {
            let token = token.map_err(|_| AppError::NotAuthenticated)?;
            let (Some(db), Some(tokens)) = (db, tokens) else {
                error!("auth extractor used without DatabaseService/TokenService app data");
                return Err(AppError::Internal("authentication not configured".into()));
            };

            let claims = tokens.verify_access_token(&token)?;
            match db.get_user_by_id(&claims.user_id).await {
                Ok(user) => Ok(AuthenticatedUser(user)),
                Err(AppError::NotFound) => {
                    debug!(user_id = %claims.user_id, "token for unknown user");
                    Err(AppError::InvalidToken)
                }
                Err(e) => Err(e),
            }
        })
    }
}
