//! Configuration options for backend clients.

/// Options a backend receives when asked to create a client for one request.
///
/// Only settings that actually influence the transport are carried here. Timeouts and the
/// cookie jar configured on the facade are not forwarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// Proxy URL all outbound connections should be routed through.
    ///
    /// The string is passed as configured and is only parsed by the backend, so a malformed
    /// value surfaces as [`crate::Error::InvalidProxy`] when the client is created.
    pub proxy: Option<String>,
}
