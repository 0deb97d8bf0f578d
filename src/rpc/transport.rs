use serde_json::Value;
use solana_client::{
    client_error::ClientError, nonblocking::rpc_client::RpcClient, rpc_request::RpcRequest,
};
use std::{future::Future, pin::Pin};

/// Raw JSON-RPC send, one request in and one JSON result out.
pub trait RpcTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: RpcRequest,
        params: Value,
    ) -> Pin<Box<dyn Future<Output = Result<Value, ClientError>> + Send + 'a>>;

    fn url(&self) -> String;
}

impl RpcTransport for RpcClient {
    fn send<'a>(
        &'a self,
        request: RpcRequest,
        params: Value,
    ) -> Pin<Box<dyn Future<Output = Result<Value, ClientError>> + Send + 'a>> {
        Box::pin(RpcClient::send::<Value>(self, request, params))
    }

    fn url(&self) -> String {
        RpcClient::url(self)
    }
}
