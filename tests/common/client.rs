use actix_web::{web, App};
use org_auth::{
    db::database_service::DatabaseService,
    services::account,
    types::{error::AppError, user::RegisterRequest},
    utils::token::TokenService,
};
use serde_json::Value;

pub struct TestClient {
    pub db: DatabaseService,
    pub tokens: TokenService,
}

impl TestClient {
    pub fn new(db: DatabaseService, tokens: TokenService) -> Self {
        TestClient { db, tokens }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.db.clone()))
            .app_data(web::Data::new(self.tokens.clone()))
            .configure(org_auth::routes::configure_routes)
    }

    /// Registers through the service layer, returns `(user_id, access_token)`.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, payload: Value) -> Result<(String, String), AppError> {
        let registration = RegisterRequest::validate_payload(&payload)
            .map_err(|e| AppError::BadRequest(format!("{:?}", e.reported())))?;
        let auth = account::register(&self.db, &self.tokens, registration).await?;
        Ok((auth.user.user_id, auth.access_token))
    }
}

#[allow(dead_code)]
pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
