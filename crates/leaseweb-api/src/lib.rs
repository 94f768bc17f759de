// leaseweb-api: Async Rust client for the Leaseweb management API
// (Public Cloud v1 + Dedicated Server v2)

pub mod client;
pub mod dedicated_server;
pub mod error;
pub mod pagination;
pub mod public_cloud;
pub mod transport;

pub use client::{ApiClient, Configuration};
pub use dedicated_server::DedicatedServerClient;
pub use error::{Error, ErrorBody};
pub use pagination::{Metadata, Page, collect_all, next_offset};
pub use public_cloud::PublicCloudClient;
pub use transport::{TlsMode, TransportConfig};
