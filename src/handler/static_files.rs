//! Static file serving module
//!
//! Maps URL paths to files under the configured root, with the root
//! substitution for `/` and traversal-safe resolution.

use std::io;
use std::path::PathBuf;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::config::AppState;
use crate::http::{self, mime};
use crate::logger;

/// Serve a static file for a GET request
pub async fn serve(path: &str, state: &AppState) -> Response<Full<Bytes>> {
    match load(path, state).await {
        Ok((content, content_type)) => http::build_file_response(content, content_type),
        Err(e) => http::build_404_response(&format!("File not found: {e}")),
    }
}

/// Resolve a URL path against the static root and read the file
///
/// The candidate is canonicalized and must stay under the canonicalized
/// root; anything that escapes (symlinks included) is treated as missing.
async fn load(path: &str, state: &AppState) -> io::Result<(Vec<u8>, &'static str)> {
    let resolved = resolve(path, state).await?;

    let content = fs::read(&resolved).await?;
    let content_type = mime::get_content_type(resolved.extension().and_then(|e| e.to_str()));
    Ok((content, content_type))
}

async fn resolve(path: &str, state: &AppState) -> io::Result<PathBuf> {
    let relative = if path == "/" {
        state.config.static_files.index.as_str()
    } else {
        path.trim_start_matches('/')
    };

    let candidate = state.static_root.join(relative);
    let resolved = fs::canonicalize(&candidate).await?;

    if !resolved.starts_with(&state.static_root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            resolved.display()
        ));
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "path is outside the static root",
        ));
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, LoggingConfig, ServerConfig, StaticConfig};
    use http_body_util::BodyExt;
    use std::fs as std_fs;
    use std::path::Path;

    /// Build a scratch site directory plus a sibling file outside it
    fn scratch_site(name: &str) -> PathBuf {
        let base = std::env::temp_dir().join(format!(
            "aira-server-test-{}-{name}",
            std::process::id()
        ));
        let _ = std_fs::remove_dir_all(&base);
        let root = base.join("public");
        std_fs::create_dir_all(&root).unwrap();
        std_fs::write(root.join("index.html"), "<html>index</html>").unwrap();
        std_fs::write(root.join("app.js"), "console.log('aira');").unwrap();
        std_fs::write(base.join("secret.txt"), "outside the root").unwrap();
        base
    }

    fn state_for(root: &Path) -> AppState {
        let config = Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                open_browser: false,
            },
            static_files: StaticConfig {
                root: root.display().to_string(),
                index: "index.html".to_string(),
            },
            logging: LoggingConfig {
                access_log: false,
                access_log_file: None,
                error_log_file: None,
            },
        };
        AppState::new(config, std_fs::canonicalize(root).unwrap())
    }

    async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
        resp.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_serves_exact_file_bytes() {
        let base = scratch_site("exact-bytes");
        let state = state_for(&base.join("public"));

        let resp = serve("/app.js", &state).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "application/javascript");
        assert_eq!(&body_bytes(resp).await[..], b"console.log('aira');");
    }

    #[tokio::test]
    async fn test_root_serves_index_document() {
        let base = scratch_site("root-index");
        let state = state_for(&base.join("public"));

        let root_resp = serve("/", &state).await;
        assert_eq!(root_resp.status(), 200);
        assert_eq!(
            root_resp.headers()["Content-Type"],
            "text/html; charset=utf-8"
        );
        let root_body = body_bytes(root_resp).await;

        let index_resp = serve("/index.html", &state).await;
        assert_eq!(body_bytes(index_resp).await, root_body);
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let base = scratch_site("missing");
        let state = state_for(&base.join("public"));

        let resp = serve("/missing.html", &state).await;
        assert_eq!(resp.status(), 404);
        let body = body_bytes(resp).await;
        assert!(String::from_utf8_lossy(&body).starts_with("File not found:"));
    }

    #[tokio::test]
    async fn test_traversal_is_rejected() {
        let base = scratch_site("traversal");
        let state = state_for(&base.join("public"));

        // secret.txt exists one level above the root
        let resp = serve("/../secret.txt", &state).await;
        assert_eq!(resp.status(), 404);

        let resp = serve("/subdir/../../secret.txt", &state).await;
        assert_eq!(resp.status(), 404);
    }
}
