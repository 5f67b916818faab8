use shiproute::db::{seed, Store};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        "\
Usage: seed_ports [OPTIONS]

Replace the port catalog with the reference ports.

Options:
  --database-url=URL  Database to seed (default: $DATABASE_URL)
  --help              Show this help message"
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shiproute=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = match args.iter().find_map(|a| a.strip_prefix("--database-url=")) {
        Some(url) => url.to_string(),
        None => env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set or passed as --database-url=URL")?,
    };

    let store = Store::connect(&database_url).await?;
    tracing::info!("Connected to {} store", store.backend_name());

    let result = seed::seed_reference_ports(store.port_repository().as_ref()).await;
    store.close().await;

    let written = result?;
    tracing::info!("Ports seeded successfully ({} ports)", written);
    Ok(())
}
