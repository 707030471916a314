use chrono::Duration;
use org_auth::db::database_service::DatabaseService;
use org_auth::utils::token::TokenService;

pub mod client;

pub const TEST_JWT_SECRET: &str = "test_jwt_secret";

pub struct TestContext {
    pub db: DatabaseService,
    pub tokens: TokenService,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let db = DatabaseService::in_memory()
            .await
            .expect("Failed to initialize DatabaseService");

        TestContext {
            db,
            tokens: TokenService::new(TEST_JWT_SECRET, Duration::minutes(30)),
        }
    }
}

// Test data helpers
pub mod test_data {
    use serde_json::{json, Value};

    pub fn sample_user() -> Value {
        json!({
            "firstName": "John",
            "lastName": "Doe",
            "email": "john.doe@example.com",
            "password": "password123"
        })
    }

    pub fn sample_user_named(first_name: &str, email: &str) -> Value {
        json!({
            "firstName": first_name,
            "lastName": "Doe",
            "email": email,
            "password": "password123",
            "phone": "5550100"
        })
    }
}
