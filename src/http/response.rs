//! HTTP response building module
//!
//! Provides builders for the response shapes the server produces, decoupled
//! from specific business logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 404 Not Found response with a plain-text description
pub fn build_404_response(message: &str) -> Response<Full<Bytes>> {
    let body = message.to_string();
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(body.clone())))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from(body)))
        })
}

/// Build OPTIONS response (CORS preflight acknowledgment)
///
/// The body stays empty; the CORS headers are appended centrally by the
/// router like on every other response.
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 response carrying a static file's exact bytes
pub fn build_file_response(content: Vec<u8>, content_type: &'static str) -> Response<Full<Bytes>> {
    let content_length = content.len();
    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(content)))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_404_carries_message() {
        let resp = build_404_response("Endpoint not found");
        assert_eq!(resp.status(), 404);
        assert_eq!(resp.headers()["Content-Type"], "text/plain; charset=utf-8");
    }

    #[test]
    fn test_options_is_empty_200() {
        use hyper::body::Body as _;

        let resp = build_options_response();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.body().size_hint().exact(), Some(0));
        assert!(resp.headers().get("Content-Type").is_none());
    }

    #[test]
    fn test_file_response_sets_length_and_type() {
        let resp = build_file_response(b"hello".to_vec(), "text/plain; charset=utf-8");
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "5");
    }
}
