// Mock endpoint handlers
// The responses simulate the hosted analysis service so the front-end can be
// developed offline; nothing here inspects the submitted resume.

use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::header::CONTENT_LENGTH;
use hyper::{HeaderMap, Request, Response, StatusCode};

use super::response;
use super::types;

/// GET /api/templates
pub fn handle_templates() -> Response<Full<Bytes>> {
    response::json_response(StatusCode::OK, &types::templates())
}

/// POST /api/analyze
///
/// The submitted resume is read off the wire and discarded; the report is a
/// constant. Request framing is still validated so a missing `Content-Length`
/// surfaces as a client error instead of a handler failure.
pub async fn handle_analyze<B>(req: Request<B>) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    if let Err(reason) = declared_content_length(req.headers()) {
        return response::bad_request(&reason);
    }

    match req.into_body().collect().await {
        Ok(_) => response::json_response(StatusCode::OK, &types::analysis_report()),
        Err(e) => response::server_error(&e.to_string()),
    }
}

/// Validate the declared body length of an analyze request
fn declared_content_length(headers: &HeaderMap) -> Result<u64, String> {
    let value = headers
        .get(CONTENT_LENGTH)
        .ok_or_else(|| "missing Content-Length header".to_string())?;
    let text = value
        .to_str()
        .map_err(|_| "Content-Length header is not valid ASCII".to_string())?;
    text.parse::<u64>()
        .map_err(|_| format!("invalid Content-Length value '{text}'"))
}
