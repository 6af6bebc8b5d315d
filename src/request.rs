use std::borrow::Cow;

pub use fluent_request_interface::Method;

use crate::body::Body;

/// The part of a request the caller may still adjust before it is executed.
///
/// Headers and body are plain fields: there is no header-builder layer, callers push onto
/// [`PendingRequest::headers`] directly through [`crate::Client::request_mut`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    /// The HTTP method.
    pub method: Method,
    /// Additional headers, sent in order.
    pub headers: Vec<(Cow<'static, str>, Cow<'static, str>)>,
    /// The request body.
    pub body: Option<Body>,
}

impl PendingRequest {
    /// An empty request for `method`.
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: vec![],
            body: None,
        }
    }
}
