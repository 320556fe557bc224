use anyhow::{Context, Result};
use clap::Parser;
use portfolio_site::server::{self, AppState};
use portfolio_site::{logging, SiteConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Serve the portfolio with live rendering", long_about = None)]
struct Args {
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Generated tree served under /dist.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let mut config = SiteConfig::load_or_default(args.config.as_deref())?;
    if let Some(output) = args.output {
        config.output_dir = output;
    }

    let app = server::router(AppState::new(config)?);
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;

    println!("🚀 Dev server running on http://localhost:{}", args.port);
    println!("📖 Portfolio at http://localhost:{}/portfolio", args.port);
    println!("📦 Generated site at http://localhost:{}/dist", args.port);

    axum::serve(listener, app).await?;
    Ok(())
}
