// API module entry
// Mock endpoints standing in for the hosted resume-analysis service

mod handlers;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};

/// API route handler
///
/// Dispatches by exact (method, path) match; everything else under `/api/`
/// is a 404 regardless of method.
pub async fn handle_api_request<B>(req: Request<B>) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match (method, path.as_str()) {
        (Method::GET, "/api/templates") => handlers::handle_templates(),
        (Method::POST, "/api/analyze") => handlers::handle_analyze(req).await,
        _ => response::not_found(),
    }
}
