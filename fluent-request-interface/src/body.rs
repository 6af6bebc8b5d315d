//! Request body types.

use std::borrow::Cow;

/// A request body buffered in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Raw bytes with their content type.
    Bytes {
        /// The body content.
        content: Cow<'static, [u8]>,
        /// The value sent as `content-type`.
        content_type: Cow<'static, str>,
    },
}
