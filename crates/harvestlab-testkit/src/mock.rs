//! Mock server infrastructure for testing
//!
//! This module provides a shared mockito server for parallel test execution.
//! Tests register mocks under unique paths so they never collide.

use lazy_static::lazy_static;
use mockito::{Server, ServerGuard};
use std::sync::Mutex;

lazy_static! {
    /// Global shared mockito server for all tests
    pub static ref SHARED_MOCK_SERVER: Mutex<ServerGuard> = Mutex::new(Server::new());
}

/// Get reference to shared mock server
///
/// # Best Practices for Avoiding Mock Collisions
///
/// 1. **Use unique paths per test**: e.g. `/orgs/<test-name>/repositories`
/// 2. **Mock cleanup is automatic**: Mocks are removed when the Mock object drops
/// 3. **Lock scope matters**: Acquire the server lock only during mock setup,
///    not during the entire test execution
///
/// # Examples
///
/// ```no_run
/// use harvestlab_testkit::get_shared_mock_server;
///
/// fn test_with_shared_server() {
///     let (mock, url) = {
///         let mut server = get_shared_mock_server();
///         let mock = server
///             .mock("GET", "/orgs/unique-org/repositories")
///             .with_status(200)
///             .create();
///         (mock, server.url())
///     }; // Lock released here
///
///     // ... fetch from `url` ...
///     mock.assert();
/// }
/// ```
pub fn get_shared_mock_server() -> std::sync::MutexGuard<'static, ServerGuard> {
    // A panic while holding the lock leaves the server itself usable
    SHARED_MOCK_SERVER
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
