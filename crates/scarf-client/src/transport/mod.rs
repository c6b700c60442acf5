//! Transport layer: the default blocking HTTP implementation.

pub mod http_client;

pub use http_client::HttpClient;
