use std::{borrow::Cow, fmt, sync::Arc};

use fluent_request_interface::backend::{
    any::{AnyBackend, AnyBackendResponse},
    Backend,
};
use fluent_request_interface::{Error, Request};
use url::Url;

use super::{OptHandle, Options};
use crate::{body::Body, request::PendingRequest, Method};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unexecuted,
    Executed {
        status: u16,
        content_length: Option<u64>,
    },
}

/// A single-use request handle.
///
/// A `Client` holds a method, a target URL and its [`Options`]. Nothing touches the network
/// until [`Client::bytes`] or [`Client::string`] is called. Every call of those accessors
/// executes the request again: calling `bytes` twice on a `POST` sends two `POST`s.
///
/// ```no_run
/// use fluent_request::{set_proxy, Client};
///
/// let body = Client::get("http://example.com/", [set_proxy("http://127.0.0.1:3128")])
///     .with_header("accept", "text/html")
///     .string()?;
/// # Ok::<(), fluent_request::Error>(())
/// ```
pub struct Client {
    url: String,
    request: PendingRequest,
    options: Options,
    backend: Option<Arc<dyn AnyBackend>>,
    state: State,
}

impl Client {
    /// Creates an unexecuted request. `url` is only parsed once the request is executed.
    pub fn new(
        method: Method,
        url: impl Into<String>,
        modifiers: impl IntoIterator<Item = OptHandle>,
    ) -> Self {
        Self {
            url: url.into(),
            request: PendingRequest::new(method),
            options: Options::with_modifiers(modifiers),
            backend: default_backend(),
            state: State::Unexecuted,
        }
    }

    /// Creates a `GET` request.
    pub fn get(url: impl Into<String>, modifiers: impl IntoIterator<Item = OptHandle>) -> Self {
        Self::new(Method::Get, url, modifiers)
    }

    /// Creates a `POST` request.
    pub fn post(url: impl Into<String>, modifiers: impl IntoIterator<Item = OptHandle>) -> Self {
        Self::new(Method::Post, url, modifiers)
    }

    /// Creates a `PUT` request.
    pub fn put(url: impl Into<String>, modifiers: impl IntoIterator<Item = OptHandle>) -> Self {
        Self::new(Method::Put, url, modifiers)
    }

    /// Creates a `DELETE` request.
    pub fn delete(url: impl Into<String>, modifiers: impl IntoIterator<Item = OptHandle>) -> Self {
        Self::new(Method::Delete, url, modifiers)
    }

    /// Creates a `HEAD` request.
    pub fn head(url: impl Into<String>, modifiers: impl IntoIterator<Item = OptHandle>) -> Self {
        Self::new(Method::Head, url, modifiers)
    }

    /// Replaces the whole configuration of this request.
    pub fn set_opt(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Appends a header to the pending request.
    pub fn with_header(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.request.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the body of the pending request.
    pub fn with_body(mut self, body: Body) -> Self {
        self.request.body = Some(body);
        self
    }

    /// Executes through `backend` instead of the default one.
    pub fn with_backend(mut self, backend: impl Backend) -> Self {
        self.backend = Some(Arc::new(backend));
        self
    }

    /// The target URL as given.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The options this request executes with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The pending request.
    pub fn request(&self) -> &PendingRequest {
        &self.request
    }

    /// Mutable access to the pending request, e.g. to set headers directly.
    pub fn request_mut(&mut self) -> &mut PendingRequest {
        &mut self.request
    }

    /// Returns `true` once a response head has been received.
    pub fn is_executed(&self) -> bool {
        matches!(self.state, State::Executed { .. })
    }

    /// Status code of the last received response.
    pub fn status(&self) -> Option<u16> {
        match self.state {
            State::Executed { status, .. } => Some(status),
            State::Unexecuted => None,
        }
    }

    /// `content-length` of the last received response, if the backend knew it.
    pub fn content_length(&self) -> Option<u64> {
        match self.state {
            State::Executed { content_length, .. } => content_length,
            State::Unexecuted => None,
        }
    }

    fn execute(&mut self) -> crate::Result<Box<dyn AnyBackendResponse>> {
        self.state = State::Unexecuted;
        let url = parse_url(&self.url)?;
        let backend = self.backend.as_ref().ok_or(Error::NoBackend)?;
        let client = backend.create_client(self.options.client_options())?;

        tracing::debug!(
            method = %self.request.method,
            %url,
            proxy = self.options.proxy(),
            "sending request"
        );
        let response = client.request(Request {
            method: self.request.method,
            url,
            additional_headers: self.request.headers.clone(),
            body: self.request.body.clone().map(Into::into),
            context: self.options.context().clone(),
        })?;

        let status = response.status();
        let content_length = response.content_length();
        tracing::debug!(status, ?content_length, "received response");
        self.state = State::Executed {
            status,
            content_length,
        };
        Ok(response)
    }

    /// Executes the request and reads the whole response body.
    pub fn bytes(&mut self) -> crate::Result<Vec<u8>> {
        let mut response = self.execute()?;
        AnyBackendResponse::bytes(&mut *response)
    }

    /// Executes the request and returns the response body as text.
    ///
    /// The bytes are taken as they are: no charset is detected and nothing is transcoded.
    /// Sequences that are not valid UTF-8 are replaced with `U+FFFD`.
    #[doc(alias = "text")]
    pub fn string(&mut self) -> crate::Result<String> {
        let bytes = self.bytes()?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }
}

/// Parses `raw` as an absolute URL.
///
/// ASCII control characters anywhere and spaces at either end are rejected; `Url::parse`
/// would otherwise strip or percent-encode them and send a different URL.
fn parse_url(raw: &str) -> crate::Result<Url> {
    let bytes = raw.as_bytes();
    let position = bytes
        .iter()
        .position(u8::is_ascii_control)
        .or_else(|| (bytes.first() == Some(&b' ')).then_some(0))
        .or_else(|| (bytes.last() == Some(&b' ')).then(|| bytes.len() - 1));
    if let Some(position) = position {
        return Err(Error::InvalidUrlCharacter {
            position,
            byte: bytes[position],
        });
    }
    Url::parse(raw).map_err(Error::InvalidUrl)
}

fn default_backend() -> Option<Arc<dyn AnyBackend>> {
    cfg_if::cfg_if! {
        if #[cfg(feature = "reqwest")] {
            Some(Arc::new(fluent_request_backend_reqwest::ReqwestBackend::new()))
        } else {
            None
        }
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("url", &self.url)
            .field("request", &self.request)
            .field("options", &self.options)
            .field("has_backend", &self.backend.is_some())
            .field("state", &self.state)
            .finish()
    }
}
