use std::{
    future::poll_fn,
    io,
    pin::Pin,
    task::{ready, Context, Poll},
};

use bytes::Bytes;
use fluent_request_interface::Result as FluentResult;
use http::response::Parts;
use http_body::Body as _;

use crate::error::ReqwestBackendError;

#[derive(Debug)]
pub(crate) struct ReqwestResponse {
    parts: Parts,
    body: Pin<Box<reqwest::Body>>,
    buffer: Bytes,
}

impl ReqwestResponse {
    pub fn new(response: reqwest::Response) -> Self {
        let http_response: http::Response<reqwest::Body> = response.into();
        let (parts, body) = http_response.into_parts();

        Self {
            parts,
            body: Box::pin(body),
            buffer: Bytes::new(),
        }
    }

    pub fn status(&self) -> u16 {
        self.parts.status.as_u16()
    }

    pub fn content_length(&self) -> Option<u64> {
        self.body.size_hint().exact()
    }

    /// Drains the body, starting with whatever an earlier `read` left buffered.
    pub async fn collect_all_bytes(&mut self) -> FluentResult<Vec<u8>> {
        let mut bufs = vec![std::mem::take(&mut self.buffer)];
        loop {
            let frame = self
                .receive_data_frame()
                .await
                .map_err(ReqwestBackendError::Io)?;
            let Some(frame) = frame else {
                break;
            };
            bufs.push(frame);
        }
        Ok(bufs.concat())
    }

    pub fn write_to(&mut self, buf: &mut [u8]) -> usize {
        let to_write = buf.len().min(self.buffer.len());
        if to_write > 0 {
            let src = self.buffer.split_to(to_write);
            buf[..to_write].copy_from_slice(&src);
        }
        to_write
    }

    fn poll_receive_data_frame(&mut self, cx: &mut Context<'_>) -> Poll<io::Result<Option<Bytes>>> {
        loop {
            let frame = ready!(self.body.as_mut().poll_frame(cx));
            return Poll::Ready(match frame {
                None => Ok(None),
                Some(Err(e)) => Err(io::Error::other(e)),
                Some(Ok(f)) => match f.into_data() {
                    Ok(data) if !data.is_empty() => Ok(Some(data)),
                    // trailers or an empty data frame
                    _ => continue,
                },
            });
        }
    }

    async fn receive_data_frame(&mut self) -> io::Result<Option<Bytes>> {
        poll_fn(|cx| self.poll_receive_data_frame(cx)).await
    }

    pub async fn receive_data_frame_buffered(&mut self) -> io::Result<usize> {
        let buffer = self.receive_data_frame().await?.unwrap_or_default();
        let len = buffer.len();
        self.buffer = buffer;
        Ok(len)
    }
}
