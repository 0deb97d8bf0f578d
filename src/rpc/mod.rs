pub mod request_config;
pub mod router;
pub mod transport;

pub use request_config::RequestConfiguration;
pub use router::Router;
pub use transport::RpcTransport;
