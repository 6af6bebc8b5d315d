//! Type-erased backend interface traits.
//!
//! The traits in this module are automatically implemented for types that implement the
//! corresponding traits from [`crate::backend`], so backend developers don't need to
//! implement them directly.

use std::any::Any;
use std::io;

use super::{Backend, BackendClient, BackendResponse};
use crate::{ClientOptions, Request, Result};

/// Trait for type-erased backends.
///
/// Automatically implemented for types implementing [`Backend`].
pub trait AnyBackend: Send + Sync + 'static {
    /// Creates a new client with the given options.
    fn create_client(&self, options: ClientOptions) -> Result<Box<dyn AnyBackendClient>>;
}

/// Trait for type-erased backend clients.
///
/// Automatically implemented for types implementing [`BackendClient`].
pub trait AnyBackendClient: Any + Send + Sync + 'static {
    /// Sends a request and returns the response.
    fn request(&self, req: Request) -> Result<Box<dyn AnyBackendResponse>>;
}

/// Trait for type-erased responses.
///
/// Automatically implemented for types implementing [`BackendResponse`].
pub trait AnyBackendResponse: io::Read + Any + Send + 'static {
    /// Returns the HTTP status code.
    fn status(&self) -> u16;
    /// Returns the content-length of the body, if known.
    fn content_length(&self) -> Option<u64>;
    /// Reads the whole remaining body into memory.
    fn bytes(&mut self) -> Result<Vec<u8>>;
}

// These implementations allow backend types implementing the base traits
// to be used with the type-erased trait system automatically.

impl<B> AnyBackend for B
where
    B: Backend,
{
    fn create_client(&self, options: ClientOptions) -> Result<Box<dyn AnyBackendClient>> {
        Ok(Box::new(Backend::create_client(self, options)?))
    }
}

impl<C> AnyBackendClient for C
where
    C: BackendClient,
{
    fn request(&self, req: Request) -> Result<Box<dyn AnyBackendResponse>> {
        Ok(Box::new(BackendClient::request(self, req)?))
    }
}

impl<R> AnyBackendResponse for R
where
    R: BackendResponse,
{
    fn status(&self) -> u16 {
        BackendResponse::status(self)
    }

    fn content_length(&self) -> Option<u64> {
        BackendResponse::content_length(self)
    }

    fn bytes(&mut self) -> Result<Vec<u8>> {
        BackendResponse::bytes(self)
    }
}
