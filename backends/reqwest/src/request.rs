use std::borrow::Cow;

use fluent_request_interface::{Body, Method, Request};
use http::{header::CONTENT_TYPE, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder};

use crate::error::{ReqwestBackendError, Result};

pub fn convert_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
        Method::Head => reqwest::Method::HEAD,
    }
}

fn convert_header_name(s: Cow<'static, str>) -> Result<HeaderName> {
    HeaderName::from_bytes(s.as_bytes())
        .map_err(|_| ReqwestBackendError::InvalidHeaderName(s.into_owned()))
}

fn convert_header_value(k: &str, v: Cow<'static, str>) -> Result<HeaderValue> {
    match v {
        Cow::Borrowed(s) => HeaderValue::from_str(s),
        Cow::Owned(s) => HeaderValue::from_bytes(s.as_bytes()),
    }
    .map_err(|_| ReqwestBackendError::InvalidHeaderValue(k.into()))
}

/// Translates a resolved request into a reqwest builder. The context is not consumed here;
/// the caller races the send against it.
pub fn build_request(client: &Client, req: Request) -> Result<RequestBuilder> {
    let mut request_builder = client.request(convert_method(req.method), req.url);

    for (key, value) in req.additional_headers {
        let value = convert_header_value(&key, value)?;
        request_builder = request_builder.header(convert_header_name(key)?, value);
    }

    match req.body {
        None => {}
        Some(Body::Bytes {
            content: Cow::Borrowed(content),
            content_type,
        }) => {
            request_builder = request_builder
                .header(CONTENT_TYPE, &*content_type)
                .body(content);
        }
        Some(Body::Bytes {
            content: Cow::Owned(content),
            content_type,
        }) => {
            request_builder = request_builder
                .header(CONTENT_TYPE, &*content_type)
                .body(content);
        }
    }

    Ok(request_builder)
}
