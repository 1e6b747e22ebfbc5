// src/api/mod.rs
use actix_web::{error::InternalError, web, App, HttpResponse, HttpServer};
use actix_cors::Cors;
use std::sync::Arc;
use crate::core::auth::TokenVerifier;
use crate::core::PasswordService;
use utoipa::{OpenApi, Modify};
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use types::SuccessResponse;

// Registers the bearer scheme referenced by the protected paths
#[derive(Default)]
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = &mut openapi.components {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password,

        crate::api::handlers::history::list_history,
        crate::api::handlers::history::delete_history_item,
        crate::api::handlers::history::clear_history,

        crate::api::handlers::system::health_check
    ),
    components(
        schemas(
            crate::models::GenerationRequest,
            crate::models::SymbolGroupSelection,
            crate::models::StrengthLabel,
            crate::models::ScoreResult,
            crate::models::HistoryEntry,

            crate::api::types::SuccessResponse,
            crate::api::types::HealthResponse,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::PasswordAnalysisRequest,
            crate::api::types::PasswordAnalysisResponse,
            crate::api::types::HistoryListResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Generator", description = "Password generation and strength analysis"),
        (name = "History", description = "Per-user history of generated passwords"),
        (name = "System", description = "Service health")
    ),
    info(
        title = "SecureGen API",
        version = "0.1.0",
        description = "Password generation and management API",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// JSON extractor config that reports malformed bodies in the usual envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest()
            .json(SuccessResponse::failed(format!("Invalid request body: {}", err)));
        InternalError::from_response(err, response).into()
    })
}

pub async fn start_server(
    service: Arc<PasswordService>,
    verifier: TokenVerifier,
    address: &str,
    port: u16,
) -> std::io::Result<()> {
    log::info!("Starting SecureGen API server on {}:{}", address, port);

    let service_data = web::Data::new(service);
    let verifier_data = web::Data::new(verifier);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .allowed_headers(vec![
                "Authorization",
                "Content-Type",
                "Accept",
            ])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(actix_web::middleware::Logger::default())
            .app_data(service_data.clone())
            .app_data(verifier_data.clone())
            .app_data(json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
pub mod middleware;
pub mod utils;
