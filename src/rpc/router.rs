use super::{request_config::RequestConfiguration, transport::RpcTransport};
use crate::metrics::Metrics;
use serde::de::DeserializeOwned;
use solana_client::{client_error::ClientError, rpc_request::RpcRequest};
use std::{sync::Arc, time::Instant};
use tracing::{debug, info, warn};

/// Encodes parameter lists, dispatches them over a transport and decodes the reply.
pub struct Router {
    transport: Arc<dyn RpcTransport>,
    metrics: Arc<dyn Metrics>,
}

impl Router {
    pub fn new(transport: Arc<dyn RpcTransport>, metrics: Arc<dyn Metrics>) -> Self {
        info!("Init RPC router");
        Self { transport, metrics }
    }

    pub fn url(&self) -> String {
        self.transport.url()
    }

    pub async fn request<T: DeserializeOwned>(
        &self,
        method: RpcRequest,
        parameters: &[RequestConfiguration],
    ) -> Result<T, ClientError> {
        let params = serde_json::to_value(parameters)?;
        debug!("Dispatching {} with params {}", method, params);

        let now = Instant::now();
        let result = self.transport.send(method, params).await;
        self.metrics.record_request_elapsed(method, now.elapsed());

        let value = result.inspect_err(|e| {
            warn!("RPC request {} failed: {}", method, e);
            self.metrics.record_request_failed(method);
        })?;

        serde_json::from_value(value).map_err(|e| {
            warn!("Failed to decode {} response: {}", method, e);
            self.metrics.record_request_failed(method);
            ClientError::from(e)
        })
    }
}
