use std::sync::Arc;

use clap::Parser;
use simple_signer::{AppState, DsaKeyPair, run};
use tracing::info;

#[derive(Parser)]
struct Args {
    #[clap(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,
    #[clap(long, env = "PORT", default_value = "5000")]
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("simple_signer=info".parse().expect("valid directive")),
        )
        .init();

    let args = Args::parse();

    // One key pair for the process lifetime, generated before the
    // listener is bound. Never persisted.
    let keypair = Arc::new(DsaKeyPair::generate());
    info!(
        algorithm = keypair.algorithm(),
        public_key_fingerprint = %keypair.public_key_fingerprint(),
        "generated process key pair"
    );

    run(args.host, args.port, AppState { keypair })
        .await
        .expect("server failed");
}
