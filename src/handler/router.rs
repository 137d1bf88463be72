//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Decides the handling branch from
//! method and path, and stamps the CORS headers on every response that
//! leaves the server.

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};

use crate::api;
use crate::config::AppState;
use crate::handler::static_files;
use crate::http::{self, cors};
use crate::logger;

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    remote_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut response = route_request(req, &state).await;
    cors::apply(response.headers_mut());

    if state.access_log {
        let body_bytes = response.body().size_hint().exact().unwrap_or(0);
        logger::log_access(
            &remote_addr,
            method.as_str(),
            &path,
            response.status().as_u16(),
            body_bytes,
        );
    }

    Ok(response)
}

/// Decide the handling branch for a request
///
/// Preflight is acknowledged for any path, API paths dispatch by method
/// inside the API module, remaining GETs hit the static tree, and anything
/// else is not an endpoint this server has.
async fn route_request<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: std::fmt::Display,
{
    if req.method() == Method::OPTIONS {
        return http::build_options_response();
    }

    if req.uri().path().starts_with("/api/") {
        return api::handle_api_request(req).await;
    }

    if req.method() == Method::GET {
        return static_files::serve(req.uri().path(), state).await;
    }

    http::build_404_response("Endpoint not found")
}
