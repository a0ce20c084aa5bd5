//! Power cycle status example
//!
//! Prints the power status, turns the projector on, prints it again, turns it
//! off and prints it a last time.

use pjlink::Projector;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let Ok(ip) = std::env::var("PROJECTOR_IP") else {
        eprintln!("PROJECTOR_IP has to be specified.");
        std::process::exit(1);
    };
    let password = std::env::var("PROJECTOR_PASSWORD").unwrap_or_default();

    let projector = Projector::new(ip, password);

    print_status(&projector).await;

    if let Err(e) = projector.turn_on().await {
        error!("{}", e);
    }
    print_status(&projector).await;

    if let Err(e) = projector.turn_off().await {
        error!("{}", e);
    }
    print_status(&projector).await;
}

async fn print_status(projector: &Projector) {
    match projector.get_power_status().await {
        Ok(status) => info!("{}", status),
        Err(e) => error!("{}", e),
    }
}
