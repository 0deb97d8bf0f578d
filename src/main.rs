use solana_client::nonblocking::rpc_client::RpcClient;
use solana_slot_api::{
    api::Api,
    config::{Config, parse_commitment},
    metrics::LoggingMetrics,
};
use std::{env, sync::Arc};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env_file(".env")?;
    info!("Loaded config: {}", config);

    let commitment = match env::args().nth(1) {
        Some(arg) => Some(parse_commitment(&arg)?),
        None => config.commitment,
    };

    let client = RpcClient::new_with_timeout(config.endpoint(), config.request_timeout);
    let api = Api::from_transport(Arc::new(client), Arc::new(LoggingMetrics));

    match api.get_slot(commitment).await {
        Ok(slot) => {
            info!("Current slot at {:?} commitment: {}", commitment, slot);
            println!("{}", slot);
            Ok(())
        }
        Err(e) => {
            error!("Failed to get slot: {}", e);
            Err(e.into())
        }
    }
}
