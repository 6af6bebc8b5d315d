#[cfg(test)]
mod tests {
    use fluent_request::{set_proxy, Error, Options};

    use crate::*;

    #[test]
    fn test_request_goes_through_proxy() {
        const PATH: &str = "proxy/forwarded";
        let _handle = crate::add_hyper_fixture(PATH, |req| async move {
            let res = Response::new(Full::new(Bytes::from_static(b"via proxy")));
            let ok = req.uri().host() == Some("proxied.invalid");
            (res, ok.then_some(()).ok_or(req))
        });

        // the fixture server plays the proxy; the target host does not resolve
        let text = fluent_request::get(
            "http://proxied.invalid/proxy/forwarded",
            [set_proxy(crate::base_url())],
        )
        .string()
        .unwrap();
        assert_eq!(text, "via proxy");
    }

    #[test]
    fn test_set_opt_replaces_proxy() {
        const PATH: &str = "proxy/replaced";
        let _handle = crate::add_hyper_fixture(PATH, |req| async move {
            let res = Response::new(Full::new(Bytes::from_static(b"second proxy")));
            let ok = req.uri().host() == Some("replaced.invalid");
            (res, ok.then_some(()).ok_or(req))
        });

        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let text = fluent_request::get(
            "http://replaced.invalid/proxy/replaced",
            [set_proxy(format!("http://127.0.0.1:{port}"))],
        )
        .set_opt(Options::with_modifiers([set_proxy(crate::base_url())]))
        .string()
        .unwrap();
        assert_eq!(text, "second proxy");
    }

    #[test]
    fn test_malformed_proxy() {
        let err = fluent_request::get(crate::url("proxy/unused"), [set_proxy("not a proxy")])
            .bytes()
            .unwrap_err();
        match err {
            Error::InvalidProxy { proxy, .. } => assert_eq!(proxy, "not a proxy"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_proxy_connects_directly() {
        const PATH: &str = "proxy/direct";
        let _handle = crate::add_hyper_fixture(PATH, |req| async move {
            let res = Response::new(Full::new(Bytes::from_static(b"direct")));
            // origin-form request line, so no host in the URI
            let ok = req.uri().host().is_none();
            (res, ok.then_some(()).ok_or(req))
        });

        let text = fluent_request::get(crate::url(PATH), [set_proxy("")])
            .string()
            .unwrap();
        assert_eq!(text, "direct");
    }
}
