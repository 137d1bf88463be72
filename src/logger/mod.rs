//! Logger module
//!
//! Server lifecycle logging plus a CLF-style access log, written to
//! stdout/stderr or to files per configuration.

mod writer;

use std::net::SocketAddr;

use chrono::Local;

use crate::config::Config;

/// Initialize the logger with configuration
///
/// Should be called once at application startup. Helpers fall back to
/// stdout/stderr before this runs, so early startup failures stay visible.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    if writer::is_initialized() {
        writer::get().write_info(message);
    } else {
        println!("{message}");
    }
}

/// Write to error log
fn write_error(message: &str) {
    if writer::is_initialized() {
        writer::get().write_error(message);
    } else {
        eprintln!("{message}");
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("AIRA development server started");
    write_info(&format!(
        "Serving files from: {}",
        config.static_files.root
    ));
    write_info(&format!("Listening on: http://{addr}"));
    write_info("Note: API responses are mocked for development");
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    write_info("Press Ctrl+C to stop the server");
    write_info("======================================\n");
}

pub fn log_server_stopped() {
    write_info("\nServer stopped, listener closed");
}

/// Log one served request in Common Log Format
pub fn log_access(remote_addr: &SocketAddr, method: &str, path: &str, status: u16, bytes: u64) {
    write_info(&access_line(
        remote_addr,
        method,
        path,
        status,
        bytes,
        &Local::now().format("%d/%b/%Y:%H:%M:%S %z").to_string(),
    ));
}

fn access_line(
    remote_addr: &SocketAddr,
    method: &str,
    path: &str,
    status: u16,
    bytes: u64,
    timestamp: &str,
) -> String {
    format!("{remote_addr} - - [{timestamp}] \"{method} {path} HTTP/1.1\" {status} {bytes}")
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_browser_opened(url: &str) {
    write_info(&format!("Browser opened at {url}"));
}

pub fn log_browser_failed(url: &str, err: &std::io::Error) {
    write_error(&format!("[WARN] Could not open browser: {err}"));
    write_info(&format!("Please open {url} manually"));
}
