mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use serde_json::json;

#[actix_web::test]
async fn test_register_flow_success() {
    println!("\n\n[+] Running test: test_register_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;
    println!("[+] Actix web app initialized.");

    let user_data = test_data::sample_user();
    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(&user_data)
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Registration successful");
    assert!(body["data"]["accessToken"].as_str().is_some_and(|t| !t.is_empty()));

    let user = &body["data"]["user"];
    assert_eq!(user["firstName"], "John");
    assert_eq!(user["lastName"], "Doe");
    assert_eq!(user["email"], "john.doe@example.com");
    assert!(user.get("password").is_none());

    // personal organisation exists with the user as member
    let user_id = user["userId"].as_str().unwrap();
    let orgs = ctx.db.list_organisations_for_user(user_id).await.unwrap();
    assert_eq!(orgs.len(), 1);
    assert_eq!(orgs[0].name, "John's Organisation");
    assert!(orgs[0].org_id.starts_with("org-"));
    println!("[/] Test passed: registration created user and organisation.");
}

#[actix_web::test]
async fn test_register_flow_blank_fields() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({"firstName": "", "lastName": "", "email": "", "password": ""}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    // last failed field wins
    assert_eq!(errors[0]["field"], "password");
    assert_eq!(errors[0]["message"], "This field may not be blank.");
}

#[actix_web::test]
async fn test_register_flow_invalid_email() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({"firstName": "John", "lastName": "Doe", "email": "nope", "password": "pw"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["field"], "email");
    assert_eq!(body["errors"][0]["message"], "Enter a valid email address.");
}

#[actix_web::test]
async fn test_register_flow_duplicate_email() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;

    for expected in [StatusCode::CREATED, StatusCode::BAD_REQUEST] {
        let req = test::TestRequest::post()
            .uri("/auth/register")
            .set_json(test_data::sample_user())
            .to_request();
        let resp = test::call_service(&app, req).await;
        println!("[<] Received response with status: {}", resp.status());
        assert_eq!(resp.status(), expected);

        if expected == StatusCode::BAD_REQUEST {
            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["status"], "Bad request");
            assert_eq!(body["message"], "Registration unsuccessful");
        }
    }
}

#[actix_web::test]
async fn test_register_and_login_with_form_encoded_body() {
    println!("\n\n[+] Running test: test_register_and_login_with_form_encoded_body");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;

    println!("[>] Registering with a percent-encoded form.");
    let req = test::TestRequest::post()
        .uri("/auth/register")
        .insert_header(("Content-Type", "application/x-www-form-urlencoded"))
        .set_payload("firstName=Ada&lastName=Lovelace&email=ada%40example.com&password=analytical+engine")
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["user"]["email"], "ada@example.com");

    println!("[>] Logging in with the same form encoding.");
    let req = test::TestRequest::post()
        .uri("/auth/login")
        .insert_header(("Content-Type", "application/x-www-form-urlencoded"))
        .set_payload("email=ada%40example.com&password=analytical+engine")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Login successful");
    println!("[/] Test passed: form clients can register and log in.");
}

#[actix_web::test]
async fn test_register_flow_rejects_undotted_email_domain() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({"firstName": "John", "lastName": "Doe", "email": "a@b", "password": "pw"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["field"], "email");
    assert_eq!(body["errors"][0]["message"], "Enter a valid email address.");
}

#[actix_web::test]
async fn test_register_flow_overlong_fields_are_validation_errors() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({
            "firstName": "J".repeat(61),
            "lastName": "Doe",
            "email": "john.doe@example.com",
            "password": "pw",
            "phone": "1".repeat(16),
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"][0]["field"], "phone");
    assert_eq!(body["errors"][0]["message"], "Ensure this field has no more than 15 characters.");
    assert!(!ctx.db.user_exists_by_email("john.doe@example.com").await.unwrap());
}

#[actix_web::test]
async fn test_login_flow_success() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user(test_data::sample_user()).await.expect("Failed creating a test user.");

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"email": "john.doe@example.com", "password": "password123"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Login successful");

    let token = body["data"]["accessToken"].as_str().unwrap();
    let claims = ctx.tokens.verify_access_token(token).unwrap();
    assert_eq!(claims.user_id, body["data"]["user"]["userId"].as_str().unwrap());
}

#[actix_web::test]
async fn test_login_flow_invalid_credentials() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone(), ctx.tokens.clone());
    let app = test::init_service(client.create_app()).await;

    client.create_test_user(test_data::sample_user()).await.expect("Failed creating a test user.");

    for payload in [
        json!({"email": "invalid@example.com", "password": "invalidpassword"}),
        json!({"email": "john.doe@example.com", "password": "wrong"}),
        json!({"email": "john.doe@example.com"}),
    ] {
        let req = test::TestRequest::post().uri("/auth/login").set_json(&payload).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "Bad request");
        assert_eq!(body["message"], "Authentication failed");
        assert_eq!(body["statusCode"], 401);
        assert!(body.get("data").is_none());
    }
}
