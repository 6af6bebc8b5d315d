mod builder;
mod options;

pub use builder::Client;
#[cfg(feature = "reqwest")]
pub use options::set_cookie_jar;
pub use options::{
    set_connect_timeout, set_context, set_proxy, set_read_write_timeout, OptHandle, Options,
};
