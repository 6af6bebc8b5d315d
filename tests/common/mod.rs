#![allow(dead_code)]

use std::io::{self, Cursor, Read};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use fluent_request::backend::{Backend, BackendClient, BackendResponse, ClientOptions, Request};
use fluent_request::Error;

/// What the stub should do once a request reaches it.
#[derive(Clone)]
pub enum Reply {
    Body(u16, Vec<u8>),
    ConnectionRefused,
    Sleep(Duration, Vec<u8>),
    /// Waits for the request context to end and reports why.
    HonorContext,
    BrokenBody,
}

#[derive(Default)]
struct Log {
    clients: Vec<ClientOptions>,
    requests: Vec<(ClientOptions, Request)>,
}

/// A backend that records every client it creates and every request it receives.
#[derive(Clone)]
pub struct RecordingBackend {
    log: Arc<Mutex<Log>>,
    reply: Reply,
}

impl RecordingBackend {
    pub fn new(reply: Reply) -> Self {
        Self {
            log: Arc::default(),
            reply,
        }
    }

    pub fn ok(body: &str) -> Self {
        Self::new(Reply::Body(200, body.as_bytes().to_vec()))
    }

    pub fn clients_created(&self) -> usize {
        self.log.lock().unwrap().clients.len()
    }

    pub fn requests(&self) -> Vec<(ClientOptions, Request)> {
        self.log.lock().unwrap().requests.clone()
    }

    /// Where the request would have been sent: the proxy if one was configured, the target
    /// host otherwise.
    pub fn last_destination(&self) -> Option<String> {
        let (options, req) = self.requests().pop()?;
        Some(match options.proxy {
            Some(proxy) => proxy,
            None => req.url.host_str().unwrap_or_default().to_owned(),
        })
    }
}

impl Backend for RecordingBackend {
    type Client = RecordingClient;

    fn create_client(&self, options: ClientOptions) -> fluent_request::Result<Self::Client> {
        if let Some(proxy) = &options.proxy {
            url::Url::parse(proxy).map_err(|source| Error::InvalidProxy {
                proxy: proxy.clone(),
                source,
            })?;
        }
        self.log.lock().unwrap().clients.push(options.clone());
        Ok(RecordingClient {
            options,
            backend: self.clone(),
        })
    }
}

pub struct RecordingClient {
    options: ClientOptions,
    backend: RecordingBackend,
}

impl BackendClient for RecordingClient {
    type Response = StubResponse;

    fn request(&self, req: Request) -> fluent_request::Result<Self::Response> {
        let context = req.context.clone();
        self.backend
            .log
            .lock()
            .unwrap()
            .requests
            .push((self.options.clone(), req));
        let (status, body) = match &self.backend.reply {
            Reply::Body(status, body) => (*status, body.clone()),
            Reply::ConnectionRefused => {
                return Err(Error::transport(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    "connection refused",
                )))
            }
            Reply::Sleep(delay, body) => {
                std::thread::sleep(*delay);
                (200, body.clone())
            }
            Reply::HonorContext => {
                let rt = tokio::runtime::Builder::new_current_thread()
                    .enable_time()
                    .build()
                    .unwrap();
                return Err(rt.block_on(context.done()));
            }
            Reply::BrokenBody => {
                return Ok(StubResponse {
                    status: 200,
                    body: Cursor::new(vec![]),
                    broken: true,
                })
            }
        };
        Ok(StubResponse {
            status,
            body: Cursor::new(body),
            broken: false,
        })
    }
}

pub struct StubResponse {
    status: u16,
    body: Cursor<Vec<u8>>,
    broken: bool,
}

impl Read for StubResponse {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.broken {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "peer went away"));
        }
        self.body.read(buf)
    }
}

impl BackendResponse for StubResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn content_length(&self) -> Option<u64> {
        (!self.broken).then(|| self.body.get_ref().len() as u64)
    }
}
