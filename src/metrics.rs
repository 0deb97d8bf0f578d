use solana_client::rpc_request::RpcRequest;
use std::time::Duration;
use tracing::info;

pub trait Metrics: Send + Sync {
    fn record_request_elapsed(&self, method: RpcRequest, elapsed: Duration);
    fn record_request_failed(&self, method: RpcRequest);
}

pub struct LoggingMetrics;

impl Metrics for LoggingMetrics {
    fn record_request_elapsed(&self, method: RpcRequest, elapsed: Duration) {
        info!(target: "metrics", method = %method, elapsed_ms = elapsed.as_millis(), "Recorded RPC request duration");
    }

    fn record_request_failed(&self, method: RpcRequest) {
        info!(target: "metrics", method = %method, "Recorded RPC request failure");
    }
}
