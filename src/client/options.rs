use std::{fmt, time::Duration};
#[cfg(feature = "reqwest")]
use std::sync::Arc;

use fluent_request_interface::{ClientOptions, Context};
#[cfg(feature = "reqwest")]
use reqwest::cookie::{CookieStore, Jar};

/// A modifier applied over the default [`Options`] when a [`crate::Client`] is built.
///
/// Each modifier provided by this crate writes exactly one field and never reads the others,
/// so modifiers compose freely; when two touch the same field the later one wins.
pub type OptHandle = Box<dyn FnOnce(&mut Options) + Send + 'static>;

/// Per-request settings.
///
/// Built once from [`Options::default`] plus modifiers and then copied into the client it
/// configures. Changing an `Options` value afterwards does not affect clients built from it.
///
/// `connect_timeout`, `read_write_timeout` and `cookie_jar` are accepted for callers that want
/// to record them but are not handed to the backend: they currently have no effect on the
/// request. Use a [`Context`] with a deadline to bound a call.
#[derive(Clone)]
pub struct Options {
    /// Time allowed to establish a connection. Not enforced.
    pub connect_timeout: Duration,
    /// Time allowed per read or write. Not enforced.
    pub read_write_timeout: Duration,
    /// Cookie storage for the request. Not consulted by the backend.
    #[cfg(feature = "reqwest")]
    #[cfg_attr(docsrs, doc(cfg(feature = "reqwest")))]
    pub cookie_jar: Arc<dyn CookieStore>,
    context: Context,
    proxy: String,
}

impl Options {
    /// Default for [`Options::connect_timeout`].
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
    /// Default for [`Options::read_write_timeout`].
    pub const DEFAULT_READ_WRITE_TIMEOUT: Duration = Duration::from_secs(5);

    /// The fallible form of [`Options::default`].
    ///
    /// The in-memory cookie jar cannot fail to construct, so this always succeeds; it exists
    /// so that callers do not depend on that.
    pub fn try_default() -> crate::Result<Self> {
        Ok(Self::default())
    }

    /// The default options with `modifiers` applied in order.
    pub fn with_modifiers(modifiers: impl IntoIterator<Item = OptHandle>) -> Self {
        let mut options = Self::default();
        options.apply(modifiers);
        options
    }

    /// Applies `modifiers` in order.
    pub fn apply(&mut self, modifiers: impl IntoIterator<Item = OptHandle>) {
        for modifier in modifiers {
            modifier(self);
        }
    }

    /// The proxy all traffic is routed through, or `None` for the backend's default.
    pub fn proxy(&self) -> Option<&str> {
        (!self.proxy.is_empty()).then_some(&*self.proxy)
    }

    /// The cancellation scope of the request.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// The subset of options forwarded to the backend.
    pub(crate) fn client_options(&self) -> ClientOptions {
        ClientOptions {
            proxy: self.proxy().map(str::to_owned),
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            read_write_timeout: Self::DEFAULT_READ_WRITE_TIMEOUT,
            #[cfg(feature = "reqwest")]
            cookie_jar: Arc::new(Jar::default()),
            context: Context::background(),
            proxy: String::new(),
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("connect_timeout", &self.connect_timeout)
            .field("read_write_timeout", &self.read_write_timeout)
            .field("context", &self.context)
            .field("proxy", &self.proxy)
            .finish_non_exhaustive()
    }
}

/// Routes the request through `proxy`. An empty string means no proxy.
///
/// The URL is not validated here; a malformed proxy fails the request when it is executed.
pub fn set_proxy(proxy: impl Into<String>) -> OptHandle {
    let proxy = proxy.into();
    Box::new(move |opt| opt.proxy = proxy)
}

/// Attaches a cancellation scope to the request.
///
/// When the request is executed from inside a multi-threaded tokio runtime, the default
/// backend waits on that runtime, so a context with a deadline needs its time driver
/// (`Builder::enable_time` or `enable_all`). Outside a runtime, or inside a current-thread one,
/// the backend's own runtime is used instead.
pub fn set_context(ctx: Context) -> OptHandle {
    Box::new(move |opt| opt.context = ctx)
}

/// Sets [`Options::connect_timeout`].
pub fn set_connect_timeout(timeout: Duration) -> OptHandle {
    Box::new(move |opt| opt.connect_timeout = timeout)
}

/// Sets [`Options::read_write_timeout`].
pub fn set_read_write_timeout(timeout: Duration) -> OptHandle {
    Box::new(move |opt| opt.read_write_timeout = timeout)
}

/// Sets [`Options::cookie_jar`], e.g. to share one jar between requests.
#[cfg(feature = "reqwest")]
#[cfg_attr(docsrs, doc(cfg(feature = "reqwest")))]
pub fn set_cookie_jar(jar: Arc<dyn CookieStore>) -> OptHandle {
    Box::new(move |opt| opt.cookie_jar = jar)
}
