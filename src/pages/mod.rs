//! Static page rendering
//!
//! The three HTML documents the server ships: the home page with its
//! embedded calculator, the API documentation page, and the not-found page.
//! All are embedded at compile time and identical across requests.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use crate::http;

const HOME_HTML: &str = include_str!("home.html");
const API_DOC_HTML: &str = include_str!("api_doc.html");
const NOT_FOUND_HTML: &str = include_str!("not_found.html");

/// Serve the home page with the embedded calculator UI
pub fn home() -> Response<Full<Bytes>> {
    http::build_html_response(StatusCode::OK, HOME_HTML)
}

/// Serve the API documentation page
pub fn api_documentation() -> Response<Full<Bytes>> {
    http::build_html_response(StatusCode::OK, API_DOC_HTML)
}

/// Serve the not-found page
pub fn not_found() -> Response<Full<Bytes>> {
    http::build_html_response(StatusCode::NOT_FOUND, NOT_FOUND_HTML)
}
