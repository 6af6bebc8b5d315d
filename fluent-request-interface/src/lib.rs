//! Interface definitions for fluent-request HTTP backends.
//!
//! This crate provides the interface that backends must implement to be driven by the
//! `fluent-request` facade. It defines the request descriptor handed to a backend, the
//! cancellation [`Context`] that travels with it, and the error type shared by all layers.
//!
//! ## Backends
//!
//! A backend implements [`backend::Backend`], which creates a [`backend::BackendClient`] for
//! a given set of [`ClientOptions`]. The facade creates one client per executed request, so
//! backends are free to bake the options (e.g. a proxy) into the client they return.
//!
//! Type-erased counterparts live in [`backend::any`] and are implemented automatically.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod backend;
pub mod body;
pub mod client;
mod context;
mod error;
mod request;

pub use body::Body;
pub use client::ClientOptions;
pub use context::{CancelHandle, Context};
pub use error::{Error, Result};
pub use request::{Method, Request};
