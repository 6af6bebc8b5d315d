//! A fluent, blocking request builder over a pluggable HTTP backend.
//!
//! ## Overview
//!
//! `fluent-request` does not speak HTTP itself. It lets a caller pick a method and a URL,
//! adjust a handful of per-request options, and then read the response body as bytes or text.
//! Connection handling, TLS, redirects and keep-alive belong to the backend, which by default
//! is [`reqwest`](https://docs.rs/reqwest).
//!
//! ## Usage
//!
//! ```no_run
//! let text = fluent_request::get("https://example.com", []).string()?;
//! println!("{text}");
//! # Ok::<(), fluent_request::Error>(())
//! ```
//!
//! Options are set with modifiers, applied in order over the defaults:
//!
//! ```no_run
//! use std::time::Duration;
//! use fluent_request::{set_context, set_proxy, Context};
//!
//! let ctx = Context::with_timeout(Duration::from_secs(10));
//! let bytes = fluent_request::post("http://httpbin.org/post", [
//!     set_proxy("http://127.0.0.1:3128"),
//!     set_context(ctx),
//! ])
//! .with_body(fluent_request::Body::json_bytes(&br#"{"key":"value"}"#[..]))
//! .bytes()?;
//! # Ok::<(), fluent_request::Error>(())
//! ```
//!
//! A fully built [`Options`] value can replace the configuration wholesale with
//! [`Client::set_opt`].
//!
//! ### Threading
//!
//! All operations block the calling thread. A [`Client`] is used for one request/response
//! cycle and shares nothing with other clients, unless the caller hands the same cookie jar or
//! [`Context`] to several of them.
//!
//! ### Cancellation
//!
//! A [`Context`] attached through [`set_context`] is handed to the backend, which abandons the
//! call once the context is cancelled or its deadline passes. The timeouts stored in
//! [`Options`] are not enforced.
//!
//! ## Features
//!
//! - `reqwest` (default): use the reqwest backend when no other backend is given through
//!   [`Client::with_backend`]. Also provides the cookie jar types ([`Jar`], [`CookieStore`],
//!   `Options::cookie_jar` and [`set_cookie_jar`]). Without it reqwest is not built at all
//!   and a backend must be supplied through [`Client::with_backend`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(missing_docs)]

mod body;
mod client;
mod request;

pub use body::Body;
#[cfg(feature = "reqwest")]
pub use client::set_cookie_jar;
pub use client::{
    set_connect_timeout, set_context, set_proxy, set_read_write_timeout, Client, OptHandle,
    Options,
};
pub use fluent_request_interface::{CancelHandle, Context, Error, Result};
pub use request::{Method, PendingRequest};
#[cfg(feature = "reqwest")]
#[cfg_attr(docsrs, doc(cfg(feature = "reqwest")))]
pub use reqwest::cookie::{CookieStore, Jar};

/// Interfaces for implementing a custom backend.
pub mod backend {
    pub use fluent_request_interface::backend::{Backend, BackendClient, BackendResponse};
    pub use fluent_request_interface::{Body, ClientOptions, Request};
}

/// Creates a `GET` request. See [`Client`].
pub fn get(url: impl Into<String>, modifiers: impl IntoIterator<Item = OptHandle>) -> Client {
    Client::get(url, modifiers)
}

/// Creates a `POST` request. See [`Client`].
pub fn post(url: impl Into<String>, modifiers: impl IntoIterator<Item = OptHandle>) -> Client {
    Client::post(url, modifiers)
}

/// Creates a `PUT` request. See [`Client`].
pub fn put(url: impl Into<String>, modifiers: impl IntoIterator<Item = OptHandle>) -> Client {
    Client::put(url, modifiers)
}

/// Creates a `DELETE` request. See [`Client`].
pub fn delete(url: impl Into<String>, modifiers: impl IntoIterator<Item = OptHandle>) -> Client {
    Client::delete(url, modifiers)
}

/// Creates a `HEAD` request. See [`Client`].
pub fn head(url: impl Into<String>, modifiers: impl IntoIterator<Item = OptHandle>) -> Client {
    Client::head(url, modifiers)
}
