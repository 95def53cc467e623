//! HTTP transport layer.

mod transport;

pub use transport::{HttpTransport, HttpTransportBuilder, TransportError};
