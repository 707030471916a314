use serde::{Deserialize, Serialize};

pub const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AccessClaims {
    pub token_type: String,
    pub user_id: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload<U> {
    pub access_token: String,
    pub user: U,
}
