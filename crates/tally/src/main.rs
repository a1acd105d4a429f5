use clap::{Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use tally_core::Catalog;
use tally_serve::{AppState, AuthSettings};

#[derive(Parser)]
#[command(name = "tally")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server.
    Serve,
    /// Print the OpenAPI document.
    Openapi,
    /// Load the checklist catalog and report what it defines.
    CheckCatalog,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve => serve().await,
        Command::Openapi => println!("{}", tally_serve::openapi::generate_spec()),
        Command::CheckCatalog => check_catalog(),
    }
}

async fn serve() {
    let catalog_path = env_or("TALLY_CATALOG_PATH", "data/checklists.json");
    let catalog = match Catalog::load(Path::new(&catalog_path)) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(error = %err, "catalog load failed");
            std::process::exit(1);
        }
    };
    if catalog.is_empty() {
        tracing::warn!(path = %catalog_path, "catalog defines no areas");
    }

    let db_path = env_or("TALLY_DB_PATH", ".tally/answers.db");
    if let Some(parent) = Path::new(&db_path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let port = std::env::var("TALLY_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(4810);
    let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port);

    let auth = AuthSettings {
        admin_login: std::env::var("TALLY_ADMIN_LOGIN").ok(),
        admin_password: std::env::var("TALLY_ADMIN_PASSWORD").ok(),
        dashboard_password: std::env::var("TALLY_DASHBOARD_PASSWORD").ok(),
    };

    let state = AppState {
        db_path,
        catalog: Arc::new(catalog),
        auth: Arc::new(auth),
    };

    tracing::info!(%addr, "tally listening");
    if let Err(err) = tally_serve::serve(state, addr).await {
        tracing::error!(error = %err, "serve error");
    }
}

fn check_catalog() {
    let catalog_path = env_or("TALLY_CATALOG_PATH", "data/checklists.json");
    match Catalog::load(Path::new(&catalog_path)) {
        Ok(catalog) => {
            for area in catalog.areas() {
                let lists = catalog.checklists(area).unwrap_or(&[]);
                let questions: usize = lists.iter().map(|list| list.questions.len()).sum();
                println!(
                    "{area}: {} checklists, {questions} questions",
                    lists.len()
                );
            }
        }
        Err(err) => {
            eprintln!("catalog check failed: {err}");
            std::process::exit(1);
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
