#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;
    use hyper::{Method, StatusCode};

    use crate::*;

    #[test]
    fn test_get_text() {
        const PATH: &str = "responses/get_text";
        const BODY: &str = r#"{"message": "Hello, world!"}"#;
        let _handle = crate::add_hyper_fixture(PATH, |req| async move {
            let res = Response::new(Full::new(Bytes::from(BODY)));
            (res, (req.method() == Method::GET).then_some(()).ok_or(req))
        });

        let mut client = fluent_request::get(crate::url(PATH), []);
        let content = client.string().unwrap();
        assert_eq!(content, BODY);
        assert_eq!(client.status(), Some(200));
        assert_eq!(client.content_length(), Some(BODY.len() as u64));
    }

    #[test]
    fn test_get_bytes() {
        const PATH: &str = "responses/get_bytes";
        const BODY: &[u8] = b"\x01\x02\x03\x04\xff\xfe";
        let _handle = crate::add_hyper_fixture(PATH, |req| async move {
            let res = Response::new(Full::new(Bytes::from(BODY)));
            (res, (req.method() == Method::GET).then_some(()).ok_or(req))
        });

        let mut client = fluent_request::get(crate::url(PATH), []);
        let content = client.bytes().unwrap();
        assert_eq!(content, BODY);
        assert_eq!(Some(content.len() as u64), client.content_length());
    }

    #[test]
    fn test_large_body_length_matches() {
        const PATH: &str = "responses/large_body";
        const LEN: usize = 1024 * 1024 + 7;
        let _handle = crate::add_hyper_fixture(PATH, |_req| async move {
            let body: Vec<u8> = (0..LEN).map(|i| (i % 251) as u8).collect();
            (Response::new(Full::new(Bytes::from(body))), Ok(()))
        });

        let mut client = fluent_request::get(crate::url(PATH), []);
        let content = client.bytes().unwrap();
        assert_eq!(content.len(), LEN);
        assert_eq!(client.content_length(), Some(LEN as u64));
        assert!(content.iter().enumerate().all(|(i, b)| *b == (i % 251) as u8));
    }

    #[test]
    fn test_status_codes_are_not_errors() {
        const PATH: &str = "responses/status_codes";
        const STATUS_CODES: [u16; 4] = [400, 404, 500, 502];
        let _handle = crate::add_hyper_fixture(PATH, |mut req| async move {
            let mut res = Response::new(Full::new(Bytes::from_static(b"status body")));
            let body = req.body_mut().collect().await.ok().and_then(|bytes| {
                let status = String::from_utf8_lossy(&bytes.to_bytes()).parse().ok()?;
                StatusCode::from_u16(status).ok()
            });
            match body {
                Some(status) => {
                    *res.status_mut() = status;
                    (res, Ok(()))
                }
                None => (res, Err(req)),
            }
        });

        for expected_status_code in STATUS_CODES {
            let mut client = fluent_request::post(crate::url(PATH), []).with_body(
                fluent_request::Body::text(expected_status_code.to_string(), "text/plain"),
            );
            assert_eq!(client.string().unwrap(), "status body");
            assert_eq!(client.status(), Some(expected_status_code));
        }
    }

    #[test]
    fn test_head_has_no_body() {
        const PATH: &str = "responses/head";
        let _handle = crate::add_hyper_fixture(PATH, |req| async move {
            let res = Response::new(Full::new(Bytes::new()));
            (res, (req.method() == Method::HEAD).then_some(()).ok_or(req))
        });

        let mut client = fluent_request::head(crate::url(PATH), []);
        assert!(client.bytes().unwrap().is_empty());
        assert_eq!(client.status(), Some(200));
    }

    #[test]
    fn test_string_replaces_invalid_utf8() {
        const PATH: &str = "responses/invalid_utf8";
        let _handle = crate::add_hyper_fixture(PATH, |_req| async move {
            let mut res = Response::new(Full::new(Bytes::from_static(b"caf\xe9")));
            res.headers_mut()
                .insert("content-type", "text/plain; charset=latin1".parse().unwrap());
            (res, Ok(()))
        });

        // no transcoding even though the server names a charset
        let text = fluent_request::get(crate::url(PATH), []).string().unwrap();
        assert_eq!(text, "caf\u{fffd}");
    }
}
