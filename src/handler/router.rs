//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: preflight short-circuit, route
//! matching, and CORS header application.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::Config;
use crate::handler::api;
use crate::http;
use crate::logger;
use crate::pages;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();

    if config.access_log {
        logger::log_request(method, req.uri(), req.version());
    }

    // Preflight requests short-circuit before routing
    if *method == Method::OPTIONS {
        return Ok(http::build_preflight_response(req.headers()));
    }

    let mut response = route_request(method, path);
    http::apply_cors(&mut response);
    Ok(response)
}

/// Route a request to its handler based on method and path.
///
/// `HEAD` follows the same table as `GET`; hyper strips the body on the way
/// out. Any other method falls through to the not-found page, as does any
/// unmatched path.
fn route_request(method: &Method, path: &str) -> Response<Full<Bytes>> {
    if !matches!(*method, Method::GET | Method::HEAD) {
        return pages::not_found();
    }

    match path {
        "/" => pages::home(),
        "/api" => pages::api_documentation(),
        "/health" => api::handle_health(),
        _ => route_api_operation(path).unwrap_or_else(pages::not_found),
    }
}

/// Match `/api/{op}/{a}/{b}`; anything else is `None`
fn route_api_operation(path: &str) -> Option<Response<Full<Bytes>>> {
    let rest = path.strip_prefix("/api/")?;
    let mut segments = rest.split('/');
    let (op, a, b) = (segments.next()?, segments.next()?, segments.next()?);
    if segments.next().is_some() {
        return None;
    }

    let operation = api::Operation::from_segment(op)?;
    Some(api::handle_operation(operation, a, b))
}
