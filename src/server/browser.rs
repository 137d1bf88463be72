// Browser launch module
// One-shot convenience for local development

use std::time::Duration;

use crate::logger;

/// Delay before launching the browser so the listener is already serving
/// by the time the first page load arrives.
const OPEN_DELAY: Duration = Duration::from_secs(1);

/// Open the default browser at `url` on a detached task.
///
/// Fire-and-forget: nothing consumes the result, and a failure (headless
/// machine, no default browser) is logged without affecting the server.
pub fn spawn_browser_open(url: String) {
    tokio::spawn(async move {
        tokio::time::sleep(OPEN_DELAY).await;
        match open::that(&url) {
            Ok(()) => logger::log_browser_opened(&url),
            Err(e) => logger::log_browser_failed(&url, &e),
        }
    });
}
