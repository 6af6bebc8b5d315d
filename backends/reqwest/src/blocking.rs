use std::future::Future;
use std::io::{self, Read};
use std::sync::{Arc, OnceLock};

use fluent_request_interface::backend::{BackendClient, BackendResponse};
use fluent_request_interface::{ClientOptions, Context, Request, Result as FluentResult};
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

use crate::client::build_reqwest_client;
use crate::error::ReqwestBackendError;
use crate::response::ReqwestResponse;

/// A blocking client wrapping a [`reqwest::Client`] built for one set of options.
#[derive(Clone)]
pub struct ReqwestBlockingClient {
    client: reqwest::Client,
    managed_runtime: Arc<OnceLock<Runtime>>,
}

impl ReqwestBlockingClient {
    pub(crate) fn new(
        options: ClientOptions,
        managed_runtime: Arc<OnceLock<Runtime>>,
    ) -> FluentResult<Self> {
        // reqwest needs a runtime context only once a request is sent
        let client = build_reqwest_client(&options)?;
        Ok(Self {
            client,
            managed_runtime,
        })
    }
}

impl BackendClient for ReqwestBlockingClient {
    type Response = ReqwestBlockingResponse;

    fn request(&self, req: Request) -> FluentResult<Self::Response> {
        let context = req.context.clone();
        let request_builder = crate::request::build_request(&self.client, req)?;
        let response = execute_with_runtime(&self.managed_runtime, || {
            with_context(&context, async {
                request_builder
                    .send()
                    .await
                    .map_err(|e| ReqwestBackendError::Reqwest(e).into())
            })
        })?;

        Ok(ReqwestBlockingResponse {
            response: ReqwestResponse::new(response),
            context,
            managed_runtime: self.managed_runtime.clone(),
        })
    }
}

/// A response whose body is pulled on the caller's thread.
pub struct ReqwestBlockingResponse {
    response: ReqwestResponse,
    context: Context,
    managed_runtime: Arc<OnceLock<Runtime>>,
}

/// Races `task` against the end of `context`.
async fn with_context<T>(
    context: &Context,
    task: impl Future<Output = FluentResult<T>>,
) -> FluentResult<T> {
    if let Some(err) = context.err() {
        return Err(err);
    }
    if context.is_background() {
        return task.await;
    }
    tokio::select! {
        res = task => res,
        err = context.done() => Err(err),
    }
}

/// Create a new tokio runtime for blocking operations
fn create_managed_runtime() -> Runtime {
    tracing::trace!("creating managed tokio runtime");
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to create managed tokio runtime")
}

/// Execute an async task with proper runtime handling
fn execute_with_runtime<F, Fut, T>(managed_runtime: &OnceLock<Runtime>, task: F) -> T
where
    F: FnOnce() -> Fut + Send,
    Fut: Future<Output = T>,
    T: Send,
{
    match Handle::try_current() {
        // Inside a multi-threaded tokio runtime - use block_in_place + Handle::block_on
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(|| handle.block_on(task()))
        }
        // Inside a current-thread runtime - block_on must not run on this thread
        Ok(_) => {
            tracing::trace!("current-thread runtime detected, blocking on a scoped thread");
            std::thread::scope(|s| {
                s.spawn(|| {
                    let runtime = managed_runtime.get_or_init(create_managed_runtime);
                    runtime.block_on(task())
                })
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
        }
        // Outside tokio runtime - use managed runtime
        Err(_) => {
            let runtime = managed_runtime.get_or_init(create_managed_runtime);
            runtime.block_on(task())
        }
    }
}

impl BackendResponse for ReqwestBlockingResponse {
    fn status(&self) -> u16 {
        self.response.status()
    }

    fn content_length(&self) -> Option<u64> {
        self.response.content_length()
    }

    fn bytes(&mut self) -> FluentResult<Vec<u8>> {
        let Self {
            response,
            context,
            managed_runtime,
        } = self;
        execute_with_runtime(managed_runtime, || {
            with_context(context, response.collect_all_bytes())
        })
    }
}

impl Read for ReqwestBlockingResponse {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let written = self.response.write_to(buf);
            if written > 0 || buf.is_empty() {
                break Ok(written);
            }
            let Self {
                response,
                context,
                managed_runtime,
            } = self;
            let received = execute_with_runtime(managed_runtime, || {
                with_context(context, async {
                    response
                        .receive_data_frame_buffered()
                        .await
                        .map_err(fluent_request_interface::Error::Body)
                })
            })
            .map_err(|e| match e {
                fluent_request_interface::Error::Body(e) => e,
                other => io::Error::other(other),
            })?;
            if received == 0 {
                break Ok(0);
            }
        }
    }
}
