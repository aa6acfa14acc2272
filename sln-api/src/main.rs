use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::Parser;
use sln_api::config::ApiConfig;
use sln_api::handlers::AppState;
use sln_api::helpers::bank::create_bank_client;
use sln_api::helpers::identity::IdentitySettings;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "sln-api", version, about = "StarLogo Nova projects API")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override server.host
    #[arg(long)]
    host: Option<String>,

    /// Override server.port
    #[arg(long)]
    port: Option<u16>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ApiConfig::load(cli.config.as_deref())?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.as_str()));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let bank = create_bank_client(&config.bank)?;
    info!(bank = %bank.service_name(), "Using assessment bank");

    let state = web::Data::new(AppState {
        bank,
        identity: IdentitySettings {
            user_realm: config.bank.user_realm.clone(),
            default_user: config.bank.default_user.clone(),
        },
    });

    let bind_addr = config.bind_addr();
    let allowed_origins = config.cors.allowed_origins.clone();
    info!("Starting sln-api server at http://{}", bind_addr);

    HttpServer::new(move || {
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "PATCH", "OPTIONS"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(state.clone())
            .configure(sln_api::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
