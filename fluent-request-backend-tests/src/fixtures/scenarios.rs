#[cfg(test)]
mod tests {
    use futures::stream;
    use http_body_util::StreamBody;
    use hyper::body::Frame;

    use crate::*;

    #[test]
    fn test_chunked_response() {
        const PATH: &str = "scenarios/chunked";
        const CHUNKS: [&str; 4] = ["first,", "second,", "", "third"];
        let _handle = crate::add_hyper_fixture(PATH, |_req| async move {
            let frames = CHUNKS
                .into_iter()
                .map(|chunk| Ok::<_, hyper::Error>(Frame::data(Bytes::from_static(chunk.as_bytes()))));
            let body: BoxedBody = StreamBody::new(stream::iter(frames)).boxed();
            (Response::new(body), Ok(()))
        });

        let mut client = fluent_request::get(crate::url(PATH), []);
        assert_eq!(client.string().unwrap(), "first,second,third");
        // no content-length on a chunked response
        assert_eq!(client.content_length(), None);
        assert_eq!(client.status(), Some(200));
    }

    #[test]
    fn test_independent_clients_on_many_threads() {
        const PATH: &str = "scenarios/echo_query";
        let _handle = crate::add_hyper_fixture(PATH, |req| async move {
            let query = req.uri().query().unwrap_or_default().to_owned();
            (Response::new(Full::new(Bytes::from(query))), Ok(()))
        });

        let threads: Vec<_> = (0..8)
            .map(|i| {
                let url = format!("{}?n={i}", crate::url(PATH));
                std::thread::spawn(move || fluent_request::get(url, []).string())
            })
            .collect();
        for (i, thread) in threads.into_iter().enumerate() {
            assert_eq!(thread.join().unwrap().unwrap(), format!("n={i}"));
        }
    }

    #[test]
    fn test_client_inside_tokio_runtime() {
        const PATH: &str = "scenarios/in_runtime";
        let _handle = crate::add_hyper_fixture(PATH, |_req| async move {
            (Response::new(Full::new(Bytes::from_static(b"ok"))), Ok(()))
        });

        let url = crate::url(PATH);
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let text = rt.block_on(async move { fluent_request::get(url, []).string() });
        assert_eq!(text.unwrap(), "ok");
    }
}
