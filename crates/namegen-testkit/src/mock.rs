//! Shared mockito server for parallel HTTP tests

use lazy_static::lazy_static;
use mockito::{Server, ServerGuard};
use std::sync::Mutex;

lazy_static! {
    /// Global mockito server shared by every test in the process
    pub static ref SHARED_MOCK_SERVER: Mutex<ServerGuard> = Mutex::new(Server::new());
}

/// Lock the shared mock server
///
/// Hold the lock only while creating mocks, and give each test its own
/// URL paths so parallel tests never see each other's mocks.
///
/// ```no_run
/// use namegen_testkit::get_shared_mock_server;
///
/// let (url, _mock) = {
///     let mut server = get_shared_mock_server();
///     let mock = server
///         .mock("GET", "/my-test/names.tsv")
///         .with_body("Name\r\nAda\r\n")
///         .create();
///     (format!("{}/my-test", server.url()), mock)
/// };
/// ```
pub fn get_shared_mock_server() -> std::sync::MutexGuard<'static, ServerGuard> {
    SHARED_MOCK_SERVER
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
