//! CORS middleware for the dashboard.
//!
//! The dashboard calls the API from a different origin with its identity
//! provider's headers attached. Every response carries the same two CORS
//! headers, and any `OPTIONS` request is answered directly with an empty
//! 200 so preflights never reach a handler.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{
        header::{self, HeaderMap, HeaderValue},
        Method,
    },
    Error, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

/// Value of `Access-Control-Allow-Origin`
pub const ALLOW_ORIGIN: &str = "*";

/// Value of `Access-Control-Allow-Headers`
pub const ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// CORS middleware factory
#[derive(Default)]
pub struct Cors;

impl Cors {
    pub fn new() -> Self {
        Self
    }
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}

impl<S, B> Transform<S, ServiceRequest> for Cors
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CorsService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsService {
            service: Rc::new(service),
        }))
    }
}

/// CORS middleware service implementation
pub struct CorsService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for CorsService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if req.method() == Method::OPTIONS {
            log::debug!("Answering CORS preflight for {}", req.path());
            let (request, _payload) = req.into_parts();
            let mut response = HttpResponse::Ok().finish();
            apply_cors_headers(response.headers_mut());
            let response = ServiceResponse::new(request, response).map_into_right_body();
            return Box::pin(async move { Ok(response) });
        }

        let service = Rc::clone(&self.service);
        Box::pin(async move {
            let mut response = service.call(req).await?;
            apply_cors_headers(response.headers_mut());
            Ok(response.map_into_left_body())
        })
    }
}
