use mockall::{mock, predicate::*};
use serde_json::{Value, json};
use solana_client::{
    client_error::{ClientError, ClientErrorKind},
    rpc_request::RpcRequest,
};
use solana_sdk::{clock::Slot, commitment_config::CommitmentLevel};
use solana_slot_api::{
    api::{Api, ApiTemplate, Completion, execute, get_slot::templates::GetSlot},
    metrics::LoggingMetrics,
    rpc::RpcTransport,
};
use std::{future::Future, pin::Pin, sync::Arc};
use tokio::{sync::oneshot, task::JoinHandle};

mock! {
    pub RpcTransport {}
    impl RpcTransport for RpcTransport {
        fn send<'a>(
            &'a self,
            request: RpcRequest,
            params: Value,
        ) -> Pin<Box<dyn Future<Output = Result<Value, ClientError>> + Send + 'a>>;

        fn url(&self) -> String;
    }
}

fn mock_transport() -> MockRpcTransport {
    let mut mock = MockRpcTransport::new();
    mock.expect_url()
        .returning(|| "http://localhost:8899".to_string());
    mock
}

#[test]
fn test_template_captures_commitment() {
    let template = GetSlot::new(Some(CommitmentLevel::Confirmed));
    assert_eq!(template.commitment, Some(CommitmentLevel::Confirmed));
    assert_eq!(GetSlot::default().commitment, None);
}

#[tokio::test]
async fn test_perform_delivers_success_through_completion() {
    let mut transport = mock_transport();
    transport
        .expect_send()
        .with(eq(RpcRequest::GetSlot), eq(json!([{ "commitment": "finalized" }])))
        .times(1)
        .returning(|_, _| Box::pin(async { Ok(json!(123456789)) }));
    let api = Api::from_transport(Arc::new(transport), Arc::new(LoggingMetrics));

    let (sender, receiver) = oneshot::channel();
    GetSlot::new(Some(CommitmentLevel::Finalized))
        .perform(
            &api,
            Box::new(move |result| {
                sender.send(result).unwrap();
            }),
        )
        .await
        .unwrap();

    assert_eq!(receiver.await.unwrap().unwrap(), 123456789);
}

#[tokio::test]
async fn test_execute_forwards_failure() {
    let mut transport = mock_transport();
    transport.expect_send().times(1).returning(|_, _| {
        let err = ClientError {
            kind: ClientErrorKind::Custom("connection lost".to_string()),
            request: None,
        };
        Box::pin(async { Err(err) })
    });
    let api = Api::from_transport(Arc::new(transport), Arc::new(LoggingMetrics));

    let err = execute(&GetSlot::default(), &api).await.unwrap_err();
    match err.kind() {
        ClientErrorKind::Custom(msg) => assert_eq!(msg, "connection lost"),
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[tokio::test]
async fn test_templates_dispatch_polymorphically() {
    let mut transport = mock_transport();
    transport
        .expect_send()
        .with(eq(RpcRequest::GetSlot), eq(json!([{}])))
        .times(1)
        .returning(|_, _| Box::pin(async { Ok(json!(10)) }));
    transport
        .expect_send()
        .with(eq(RpcRequest::GetSlot), eq(json!([{ "commitment": "processed" }])))
        .times(1)
        .returning(|_, _| Box::pin(async { Ok(json!(12)) }));
    let api = Api::from_transport(Arc::new(transport), Arc::new(LoggingMetrics));

    let queue: Vec<Box<dyn ApiTemplate<Success = Slot>>> = vec![
        Box::new(GetSlot::default()),
        Box::new(GetSlot::new(Some(CommitmentLevel::Processed))),
    ];

    let mut slots = Vec::new();
    for template in &queue {
        slots.push(execute(template.as_ref(), &api).await.unwrap());
    }

    assert_eq!(slots, vec![10, 12]);
}

struct AbandonedRequest;

impl ApiTemplate for AbandonedRequest {
    type Success = Slot;

    fn perform(&self, _api: &Api, completion: Completion<Slot>) -> JoinHandle<()> {
        drop(completion);
        tokio::spawn(async {})
    }
}

#[tokio::test]
async fn test_execute_reports_dropped_completion() {
    let api = Api::from_transport(Arc::new(mock_transport()), Arc::new(LoggingMetrics));

    let err = execute(&AbandonedRequest, &api).await.unwrap_err();
    match err.kind() {
        ClientErrorKind::Custom(msg) => {
            assert_eq!(msg, "request completed without delivering a result")
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}
