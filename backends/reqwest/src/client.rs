use fluent_request_interface::{ClientOptions, Error as FluentError, Result as FluentResult};
use reqwest::{Client, Proxy};
use url::Url;

use crate::error::ReqwestBackendError;

pub fn build_reqwest_client(options: &ClientOptions) -> FluentResult<Client> {
    let mut builder = Client::builder();

    if let Some(proxy) = &options.proxy {
        let proxy_url = Url::parse(proxy).map_err(|source| FluentError::InvalidProxy {
            proxy: proxy.clone(),
            source,
        })?;
        tracing::trace!(proxy = %proxy_url, "routing all traffic through proxy");
        builder = builder.proxy(Proxy::all(proxy_url).map_err(ReqwestBackendError::Reqwest)?);
    }

    Ok(builder.build().map_err(ReqwestBackendError::Reqwest)?)
}
