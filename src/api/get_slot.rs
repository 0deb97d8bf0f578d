use super::{Api, resume_once};
use crate::rpc::RequestConfiguration;
use solana_client::{client_error::ClientError, rpc_request::RpcRequest};
use solana_sdk::{clock::Slot, commitment_config::CommitmentLevel};
use tokio::task::JoinHandle;

impl Api {
    /// Returns the slot that has reached the given or default commitment level.
    ///
    /// `on_complete` is invoked exactly once from a task spawned on the current
    /// tokio runtime. Must be called from within a runtime.
    pub fn get_slot_with_callback<F>(
        &self,
        commitment: Option<CommitmentLevel>,
        on_complete: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Result<Slot, ClientError>) + Send + 'static,
    {
        let router = self.router.clone();
        tokio::spawn(async move {
            let parameters = [RequestConfiguration::new(commitment)];
            on_complete(router.request(RpcRequest::GetSlot, &parameters).await);
        })
    }

    /// Returns the slot that has reached the given or default commitment level.
    ///
    /// Dropping the returned future does not cancel the request already sent.
    pub async fn get_slot(&self, commitment: Option<CommitmentLevel>) -> Result<Slot, ClientError> {
        resume_once(|completion| {
            self.get_slot_with_callback(commitment, completion);
        })
        .await
    }
}

pub mod templates {
    use crate::api::{Api, ApiTemplate, Completion};
    use solana_sdk::{clock::Slot, commitment_config::CommitmentLevel};
    use tokio::task::JoinHandle;

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct GetSlot {
        pub commitment: Option<CommitmentLevel>,
    }

    impl GetSlot {
        pub fn new(commitment: Option<CommitmentLevel>) -> Self {
            Self { commitment }
        }
    }

    impl ApiTemplate for GetSlot {
        type Success = Slot;

        fn perform(&self, api: &Api, completion: Completion<Slot>) -> JoinHandle<()> {
            api.get_slot_with_callback(self.commitment, completion)
        }
    }
}
