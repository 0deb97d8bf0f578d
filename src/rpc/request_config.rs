use serde::Serialize;
use solana_sdk::commitment_config::CommitmentLevel;

/// Configuration object sent as an element of a JSON-RPC parameter list.
///
/// Unset fields are omitted, so `RequestConfiguration::default()` encodes as `{}`
/// and the node falls back to its own defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitment: Option<CommitmentLevel>,
}

impl RequestConfiguration {
    pub fn new(commitment: Option<CommitmentLevel>) -> Self {
        Self { commitment }
    }
}
