//! Song catalog - a REST API for managing songs and browsing catalog statistics

mod api;
mod config;
mod core;
mod db;
mod error;
mod models;

#[cfg(test)]
mod test_utils;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use crate::config::{Paths, Settings};
use crate::core::CatalogService;
use crate::db::{run_migrations, DbEngine, SongTable};

/// Song catalog server
#[derive(Parser, Debug)]
#[command(name = "songcatalog")]
#[command(version)]
#[command(about = "A REST API for managing a catalog of songs")]
struct Args {
    /// Host address to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// SQLite connection string, e.g. sqlite:songs.db
    #[arg(long)]
    database_url: Option<String>,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,

    /// Path to config directory
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    /// Command-line flags take precedence over file and environment
    fn apply(self, settings: &mut Settings) {
        if let Some(host) = self.host {
            settings.host = host;
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(url) = self.database_url {
            settings.database_url = url;
        }
        if self.debug {
            settings.debug = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = Args::parse();

    let paths = Paths::new(args.config.take())?;
    let mut settings = Settings::load(&paths)?;
    args.apply(&mut settings);

    init_logging(settings.debug);

    info!("Song catalog v{} starting...", env!("CARGO_PKG_VERSION"));
    info!("Config directory: {:?}", paths.config_dir());

    run_server(settings).await
}

fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "info" };

    let filter = tracing_subscriber::EnvFilter::new(format!("{},sqlx=warn", log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

async fn run_server(settings: Settings) -> Result<()> {
    info!("Connecting to database...");
    let engine = DbEngine::connect(&settings.database_url).await?;
    run_migrations(&engine).await?;

    let catalog = actix_web::web::Data::new(CatalogService::new(SongTable::new(&engine)));

    let addr = settings.bind_addr();
    info!("Server listening on http://{}{}", addr, settings.api_prefix);

    use actix_cors::Cors;
    use actix_web::{middleware, web, App, HttpServer};

    let api_prefix = settings.api_prefix.clone();
    let allowed_origins = settings.allowed_origins.clone();

    HttpServer::new(move || {
        let cors = if allowed_origins.is_empty() {
            Cors::default().allow_any_origin()
        } else {
            allowed_origins
                .iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
                .supports_credentials()
        }
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

        App::new()
            .app_data(catalog.clone())
            .wrap(middleware::NormalizePath::trim())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .service(web::scope(&api_prefix).configure(api::configure))
    })
    .bind(addr)?
    .run()
    .await?;

    engine.close().await;
    info!("Server stopped");

    Ok(())
}
