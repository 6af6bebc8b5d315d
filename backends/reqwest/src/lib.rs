//! The default fluent-request backend, built on [`reqwest`].
//!
//! The blocking interface is served by driving reqwest's async client on a tokio runtime.
//! When called from inside a multi-threaded tokio runtime the current one is reused through
//! `block_in_place`; otherwise a current-thread runtime owned by the backend is created on
//! first use and kept for subsequent requests.
//!
//! A caller-owned multi-threaded runtime must have its time driver enabled: reqwest's
//! connection pool and [`Context`](fluent_request_interface::Context) deadlines both sleep on
//! it.

mod blocking;
mod client;
mod error;
mod request;
mod response;

use std::sync::{Arc, OnceLock};

use fluent_request_interface::backend::Backend;
use fluent_request_interface::{ClientOptions, Result};
use tokio::runtime::Runtime;

pub use blocking::{ReqwestBlockingClient, ReqwestBlockingResponse};
pub use error::ReqwestBackendError;

/// The backend implementation using reqwest.
#[derive(Debug, Clone, Default)]
pub struct ReqwestBackend {
    managed_runtime: Arc<OnceLock<Runtime>>,
}

impl ReqwestBackend {
    /// Creates a backend with its own lazily-initialized runtime.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for ReqwestBackend {
    type Client = ReqwestBlockingClient;

    fn create_client(&self, options: ClientOptions) -> Result<Self::Client> {
        ReqwestBlockingClient::new(options, self.managed_runtime.clone())
    }
}
