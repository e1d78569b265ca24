mod api;
mod domain;
mod server;

use anyhow::{Context, Result};
use axum::http::StatusCode;
use clap::{Args, Parser, Subcommand};
use std::net::{IpAddr, SocketAddr};
use tracing_subscriber::EnvFilter;

use crate::api::protocol::ConversionResponse;

#[derive(Parser)]
#[command(
    name = "case-converter",
    about = "Convert text between snake, kebab, camel, pascal and upper case",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(Args, Debug, Clone)]
struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "CASE_CONVERTER_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "CASE_CONVERTER_PORT", default_value_t = 5700)]
    port: u16,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default when no subcommand given)
    Serve(ServeArgs),

    /// Convert a single text and print the JSON response
    Convert {
        /// Text to convert
        text: String,

        /// Target case: SNAKE, KEBAB, CAMEL, PASCAL or UPPER
        #[arg(short = 'c', long)]
        to_case: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => serve(cli.serve).await?,

        Some(Commands::Serve(args)) => serve(args).await?,

        Some(Commands::Convert { text, to_case }) => {
            let response = api::handlers::handle_conversion(&text, to_case.as_deref());
            let json = response
                .to_json()
                .context("Failed to serialize response")?;
            println!("{json}");

            if let Some(code) = exit_code(&response) {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}

/// Process status for `convert`: none on success, 1 for rejected input,
/// 2 for an internal fault.
fn exit_code(response: &ConversionResponse) -> Option<i32> {
    match response.status() {
        StatusCode::OK => None,
        StatusCode::BAD_REQUEST => Some(1),
        _ => Some(2),
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    let addr = SocketAddr::new(args.host, args.port);
    tracing::info!("case-converter {} starting", env!("CARGO_PKG_VERSION"));
    server::http::run(addr).await
}
