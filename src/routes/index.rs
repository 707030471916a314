use actix_web::{get, web};
use serde::Serialize;

use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::token::TokenService;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub greetings: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub token_lifetime: String,
}

#[get("/")]
async fn index(tokens: web::Data<TokenService>) -> ApiResult<Response> {
    Ok(ApiResponse::Ok(Response {
        greetings: "Hello & welcome to the organisations API",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        token_lifetime: format!("{}min", tokens.lifetime().num_minutes()),
    }))
}
