use solana_sdk::commitment_config::CommitmentLevel;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("invalid commitment level: {0}")]
    InvalidCommitment(String),
    #[error("invalid value for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub rpc_url: String,
    pub api_key: String,
    pub commitment: Option<CommitmentLevel>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env_file(path: &str) -> Result<Self, ConfigError> {
        let vars = load_dotenv(path)?;

        let rpc_url = vars
            .get("SOLANA_RPC_URL")
            .ok_or(ConfigError::Missing("SOLANA_RPC_URL"))?
            .clone();

        let api_key = vars.get("API_KEY").cloned().unwrap_or_default();

        let commitment = vars
            .get("COMMITMENT")
            .map(|s| parse_commitment(s))
            .transpose()?;

        let request_timeout_seconds = match vars.get("REQUEST_TIMEOUT_SECONDS") {
            Some(s) => s.parse().map_err(|_| ConfigError::InvalidNumber {
                key: "REQUEST_TIMEOUT_SECONDS",
                value: s.clone(),
            })?,
            None => 30,
        };

        Ok(Config {
            rpc_url,
            api_key,
            commitment,
            request_timeout: Duration::from_secs(request_timeout_seconds),
        })
    }

    /// Full endpoint, with the API key appended to the base URL.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.rpc_url, self.api_key)
    }
}

// The API key is never written out.
impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rpc_url={} api_key={} commitment={:?} request_timeout={}s",
            self.rpc_url,
            if self.api_key.is_empty() { "<unset>" } else { "<redacted>" },
            self.commitment,
            self.request_timeout.as_secs()
        )
    }
}

pub fn parse_commitment(value: &str) -> Result<CommitmentLevel, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "processed" => Ok(CommitmentLevel::Processed),
        "confirmed" => Ok(CommitmentLevel::Confirmed),
        "finalized" => Ok(CommitmentLevel::Finalized),
        _ => Err(ConfigError::InvalidCommitment(value.to_string())),
    }
}

fn load_dotenv(path: &str) -> Result<HashMap<String, String>, io::Error> {
    let mut vars: HashMap<String, String> = HashMap::new();
    let content = fs::read_to_string(path)?;

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            vars.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    Ok(vars)
}
