mod client;
mod config;
pub mod queries;

#[cfg(test)]
pub use client::fake;
pub use client::{
    ContentStoreError, HttpTransport, QueryParams, ReqwestTransport, SanityClient,
    TransportResponse,
};
pub use config::{ContentStoreConfig, DEFAULT_API_VERSION};
