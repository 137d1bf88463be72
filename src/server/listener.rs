// Reusable listener module

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Create a `TcpListener` with address reuse enabled.
///
/// A development server gets restarted constantly; `SO_REUSEADDR` lets the
/// new process bind while the old port sits in TIME_WAIT, and on Unix
/// `SO_REUSEPORT` additionally tolerates a not-yet-exited predecessor.
pub fn create_reusable_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_listener_binds_and_reports_addr() {
        let addr = "127.0.0.1:0".parse().unwrap();
        let listener = create_reusable_listener(addr).expect("bind should succeed");
        let local = listener.local_addr().unwrap();
        assert!(local.port() > 0);
        assert!(local.ip().is_loopback());
    }
}
