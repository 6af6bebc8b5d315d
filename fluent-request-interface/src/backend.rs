//! Core backend interface traits.
//!
//! Backend developers implement [`Backend`] and [`BackendClient`], along with a custom
//! [`BackendResponse`] type. The facade only talks to the type-erased traits in [`any`],
//! which are implemented automatically.
//!
//! All operations are blocking: the calling thread is parked until the backend is done.

use std::io;

use crate::{ClientOptions, Request};

pub mod any;

/// A factory of backend clients.
///
/// The facade asks for a fresh client on every executed request, passing the options that
/// request was configured with.
pub trait Backend: Send + Sync + 'static {
    /// The type of client this backend creates.
    type Client: BackendClient;

    /// Creates a client honoring `options`.
    ///
    /// A malformed proxy must be reported here as [`crate::Error::InvalidProxy`].
    fn create_client(&self, options: ClientOptions) -> crate::Result<Self::Client>;
}

/// A client able to send requests.
pub trait BackendClient: Send + Sync + 'static {
    /// The type of response returned by this client.
    type Response: BackendResponse;

    /// Sends a request and returns the response head once it is available.
    ///
    /// Implementations must give up with [`crate::Error::Cancelled`] or
    /// [`crate::Error::DeadlineExceeded`] once `req.context` ends.
    fn request(&self, req: Request) -> crate::Result<Self::Response>;
}

/// A response whose body has not been read yet.
///
/// Extends [`io::Read`] so the body can be consumed incrementally as well.
pub trait BackendResponse: io::Read + Send + 'static {
    /// Returns the HTTP status code.
    fn status(&self) -> u16;

    /// Returns the content-length of the body, if known.
    fn content_length(&self) -> Option<u64>;

    /// Reads the whole remaining body into memory.
    ///
    /// The default implementation drains [`io::Read`] and maps failures to
    /// [`crate::Error::Body`]. The advertised content length only sizes the first allocation,
    /// up to [`PREALLOCATE_LIMIT`].
    fn bytes(&mut self) -> crate::Result<Vec<u8>> {
        let hint = self
            .content_length()
            .map_or(0, |len| len.min(PREALLOCATE_LIMIT as u64) as usize);
        let mut buf = Vec::with_capacity(hint);
        io::Read::read_to_end(self, &mut buf).map_err(crate::Error::Body)?;
        Ok(buf)
    }
}

/// Upper bound on the buffer reserved up front by [`BackendResponse::bytes`].
pub const PREALLOCATE_LIMIT: usize = 64 * 1024;
