use super::{Api, Completion, resume_once};
use solana_client::client_error::ClientError;
use tokio::task::JoinHandle;

/// A request captured as a value, to be performed later against an [`Api`].
pub trait ApiTemplate: Send + Sync {
    type Success: Send + 'static;

    fn perform(&self, api: &Api, completion: Completion<Self::Success>) -> JoinHandle<()>;
}

/// Performs `template` and waits for its completion.
pub async fn execute<T>(template: &T, api: &Api) -> Result<T::Success, ClientError>
where
    T: ApiTemplate + ?Sized,
{
    resume_once(|completion| {
        template.perform(api, completion);
    })
    .await
}
