//! HTTP tests for the actix-web front end.
//!
//! Exercises authentication, generation, history listing, deletion, and
//! clearing through the real routes and middleware.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;

use securegen::api::routes::configure_routes;
use securegen::api::types::{
    HealthResponse, HistoryListResponse, PasswordAnalysisResponse, PasswordGenerationResponse,
    SuccessResponse,
};
use securegen::api::json_config;
use securegen::core::auth::{Claims, TokenVerifier};
use securegen::models::{GenerationRequest, StrengthLabel};
use securegen::PasswordService;

const SECRET: &str = "test-secret";

fn bearer(sub: &str) -> (&'static str, String) {
    let claims = Claims {
        sub: sub.to_string(),
        iat: Utc::now().timestamp(),
        exp: (Utc::now() + Duration::minutes(30)).timestamp(),
    };
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap();
    ("Authorization", format!("Bearer {}", token))
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(PasswordService::new())))
                .app_data(web::Data::new(TokenVerifier::new(SECRET)))
                .app_data(json_config())
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_needs_no_auth() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/health").to_request();
    let body: HealthResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.status, "healthy");
}

#[actix_web::test]
async fn test_generate_requires_token() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({"length": 12}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: SuccessResponse = test::read_body_json(resp).await;
    assert!(!body.success);
}

#[actix_web::test]
async fn test_history_rejects_foreign_token() {
    let app = init_app!();
    let claims = Claims {
        sub: "user@example.com".to_string(),
        iat: Utc::now().timestamp(),
        exp: (Utc::now() + Duration::minutes(30)).timestamp(),
    };
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"someone-else")).unwrap();
    let req = test::TestRequest::get()
        .uri("/history")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_generate_then_list_history() {
    let app = init_app!();
    let auth = bearer("user@example.com");

    let req = test::TestRequest::post()
        .uri("/generate")
        .insert_header(auth.clone())
        .set_json(json!({
            "length": 20,
            "numbers": false,
            "symbolGroups": {"punctuation": false, "other": false}
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let generated: PasswordGenerationResponse = test::read_body_json(resp).await;
    assert!(generated.success);
    let password = generated.password.unwrap();
    assert_eq!(password.chars().count(), 20);
    assert!(!password.chars().any(|c| c.is_ascii_digit()));

    let req = test::TestRequest::get().uri("/history").insert_header(auth).to_request();
    let history: HistoryListResponse = test::call_and_read_body_json(&app, req).await;
    assert!(history.success);
    assert_eq!(history.history.len(), 1);
    let entry = &history.history[0];
    assert_eq!(entry.password, password);
    assert_eq!(Some(entry.score), generated.score);
    assert_eq!(entry.settings.length, 20);
    assert!(entry.settings.uppercase && entry.settings.lowercase && entry.settings.symbols);
    assert!(!entry.settings.numbers);
    let groups = entry.settings.symbol_groups.unwrap();
    assert!(!groups.punctuation && !groups.other);
    assert!(groups.brackets && groups.math && groups.special);
}

#[actix_web::test]
async fn test_generate_validation_error() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/generate")
        .insert_header(bearer("user@example.com"))
        .set_json(json!({
            "length": 12,
            "uppercase": false,
            "lowercase": false,
            "numbers": false,
            "symbols": false
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: PasswordGenerationResponse = test::read_body_json(resp).await;
    assert!(!body.success);
    assert!(body.password.is_none());
    assert_eq!(body.error.as_deref(), Some("At least one character set must be selected"));
}

#[actix_web::test]
async fn test_generate_length_out_of_range() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/generate")
        .insert_header(bearer("user@example.com"))
        .set_json(GenerationRequest::with_length(101))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_malformed_body() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/generate")
        .insert_header(bearer("user@example.com"))
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{\"length\": \"long\"}")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: SuccessResponse = test::read_body_json(resp).await;
    assert!(!body.success);
    assert!(body.error.unwrap().starts_with("Invalid request body"));
}

#[actix_web::test]
async fn test_analyze_common_password() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/analyze")
        .insert_header(bearer("user@example.com"))
        .set_json(json!({"password": "Welcome"}))
        .to_request();
    let body: PasswordAnalysisResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.score, 0);
    assert_eq!(body.strength, StrengthLabel::VeryWeak);
    assert_eq!(body.feedback, vec!["This is a commonly used password"]);
}

#[actix_web::test]
async fn test_delete_and_clear_history() {
    let app = init_app!();
    let auth = bearer("user@example.com");

    // Nothing generated yet
    let req = test::TestRequest::delete().uri("/history").insert_header(auth.clone()).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    let req = test::TestRequest::delete().uri("/history/0").insert_header(auth.clone()).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    for length in [8, 9, 10] {
        let req = test::TestRequest::post()
            .uri("/generate")
            .insert_header(auth.clone())
            .set_json(GenerationRequest::with_length(length))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    let req = test::TestRequest::delete().uri("/history/3").insert_header(auth.clone()).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri("/history/0").insert_header(auth.clone()).to_request();
    let body: SuccessResponse = test::call_and_read_body_json(&app, req).await;
    assert!(body.success);

    let req = test::TestRequest::get().uri("/history").insert_header(auth.clone()).to_request();
    let history: HistoryListResponse = test::call_and_read_body_json(&app, req).await;
    let lengths: Vec<usize> = history.history.iter().map(|e| e.settings.length).collect();
    assert_eq!(lengths, vec![9, 8]);

    let req = test::TestRequest::delete().uri("/history").insert_header(auth.clone()).to_request();
    let body: SuccessResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.message.as_deref(), Some("Password history cleared successfully"));

    let req = test::TestRequest::get().uri("/history").insert_header(auth).to_request();
    let history: HistoryListResponse = test::call_and_read_body_json(&app, req).await;
    assert!(history.history.is_empty());
}

#[actix_web::test]
async fn test_history_is_scoped_to_token_subject() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/generate")
        .insert_header(bearer("alice"))
        .set_json(GenerationRequest::default())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/history").insert_header(bearer("bob")).to_request();
    let history: HistoryListResponse = test::call_and_read_body_json(&app, req).await;
    assert!(history.history.is_empty());
}
