// src/api/middleware/auth.rs

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage, HttpResponse,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;
use crate::api::types::SuccessResponse;
use crate::core::auth::{AuthError, TokenVerifier};
use crate::utils::preview;
use log::{debug, warn, error};

// Resolves the bearer token to an Identity and stores it in the request extensions
pub struct TokenValidator;

impl<S, B> Transform<S, ServiceRequest> for TokenValidator
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = TokenValidatorMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TokenValidatorMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct TokenValidatorMiddleware<S> {
    service: Rc<S>,
}

fn unauthorized<B>(req: ServiceRequest, error: &AuthError) -> ServiceResponse<EitherBody<B>> {
    let response = HttpResponse::Unauthorized()
        .insert_header(("WWW-Authenticate", "Bearer"))
        .json(SuccessResponse::failed(format!("Could not validate credentials: {}", error)))
        .map_into_right_body();
    let (request, _payload) = req.into_parts();
    ServiceResponse::new(request, response)
}

impl<S, B> Service<ServiceRequest> for TokenValidatorMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        // Handle OPTIONS requests immediately (for CORS preflight)
        if req.method() == actix_web::http::Method::OPTIONS {
            return Box::pin(async move {
                let res = service.call(req).await?;
                Ok(res.map_into_left_body())
            });
        }

        Box::pin(async move {
            let header = req
                .headers()
                .get("Authorization")
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);

            let Some(verifier) = req.app_data::<web::Data<TokenVerifier>>().cloned() else {
                error!("❌ TokenValidator used without a TokenVerifier in app data");
                return Ok(unauthorized(req, &AuthError::NotConfigured));
            };

            if let Some(value) = &header {
                debug!("🔍 Found authorization header: {}", preview(value));
            }

            match verifier.validate_header(header.as_deref()) {
                Ok(identity) => {
                    debug!("✅ Token validation successful for {}", identity);
                    req.extensions_mut().insert(identity);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(e) => {
                    warn!("❌ Token validation failed: {}", e);
                    Ok(unauthorized(req, &e))
                }
            }
        })
    }
}
