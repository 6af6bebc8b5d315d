use std::borrow::Cow;

use fluent_request_interface::Body as BodyImpl;

/// A request body buffered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    pub(crate) inner: BodyImpl,
}

impl Body {
    /// A text body with the given content type.
    pub fn text(
        text: impl Into<Cow<'static, str>>,
        content_type: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            inner: BodyImpl::Bytes {
                content: match text.into() {
                    Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
                    Cow::Owned(s) => Cow::Owned(s.into_bytes()),
                },
                content_type: content_type.into(),
            },
        }
    }

    /// A binary body with the given content type.
    pub fn bytes(
        bytes: impl Into<Cow<'static, [u8]>>,
        content_type: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            inner: BodyImpl::Bytes {
                content: bytes.into(),
                content_type: content_type.into(),
            },
        }
    }

    /// Pre-serialized JSON sent as `application/json`.
    pub fn json_bytes(bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        Self::bytes(bytes, "application/json")
    }
}

impl From<Body> for BodyImpl {
    fn from(body: Body) -> Self {
        body.inner
    }
}
