use std::{borrow::Cow, fmt};

use url::Url;

use crate::{body::Body, Context};

/// HTTP methods a request can be issued with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
}

impl Method {
    /// The method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved request handed to a backend client.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method.
    pub method: Method,
    /// The parsed target URL.
    pub url: Url,
    /// Headers to send in addition to the ones the backend adds itself.
    pub additional_headers: Vec<(Cow<'static, str>, Cow<'static, str>)>,
    /// The request body, if any.
    pub body: Option<Body>,
    /// The cancellation scope the backend must honor.
    pub context: Context,
}
