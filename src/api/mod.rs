pub mod get_slot;
pub mod template;

pub use template::{ApiTemplate, execute};

use crate::{
    metrics::Metrics,
    rpc::{Router, RpcTransport},
};
use solana_client::client_error::{ClientError, ClientErrorKind};
use std::sync::Arc;
use tokio::sync::oneshot;

/// Completion handler handed the outcome of a single request.
pub type Completion<T> = Box<dyn FnOnce(Result<T, ClientError>) + Send + 'static>;

/// Entry point for the typed RPC methods.
///
/// Cloning is cheap; every clone shares the same [`Router`].
#[derive(Clone)]
pub struct Api {
    router: Arc<Router>,
}

impl Api {
    pub fn new(router: Router) -> Self {
        Self {
            router: Arc::new(router),
        }
    }

    pub fn from_transport(transport: Arc<dyn RpcTransport>, metrics: Arc<dyn Metrics>) -> Self {
        Self::new(Router::new(transport, metrics))
    }
}

// Resolves with whatever the dispatched completion receives. The dispatched
// work is not tied to the returned future, so dropping it leaves the request running.
pub(crate) async fn resume_once<T, F>(dispatch: F) -> Result<T, ClientError>
where
    T: Send + 'static,
    F: FnOnce(Completion<T>),
{
    let (sender, receiver) = oneshot::channel();
    dispatch(Box::new(move |result| {
        let _ = sender.send(result);
    }));

    receiver.await.unwrap_or_else(|_| {
        Err(ClientError {
            kind: ClientErrorKind::Custom(
                "request completed without delivering a result".to_string(),
            ),
            request: None,
        })
    })
}
