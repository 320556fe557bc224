use anyhow::{Context, Result};
use clap::Parser;
use notify::{RecursiveMode, Watcher};
use portfolio_site::{logging, SiteConfig, SiteGenerator};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Build the static portfolio site", long_about = None)]
struct Args {
    /// JSON config file; every field is optional.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// Treat content integrity issues as errors.
    #[arg(long)]
    strict: bool,

    /// Rebuild when the assets or the config file change.
    #[arg(short, long)]
    watch: bool,
}

fn load_config(args: &Args) -> Result<SiteConfig> {
    let mut config = SiteConfig::load_or_default(args.config.as_deref())?;
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }
    if let Some(assets) = &args.assets {
        config.assets_dir = assets.clone();
    }
    Ok(config)
}

fn build(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let generator = SiteGenerator::new(config)?.strict(args.strict);
    let report = generator.generate().context("site generation failed")?;
    println!(
        "✅ {} pages and {} assets written to {}",
        report.pages,
        report.assets,
        generator.output_dir().display()
    );
    if report.issues > 0 {
        println!("⚠️  {} content integrity issue(s), see log", report.issues);
    }
    Ok(())
}

fn watch(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx)?;
    watcher
        .watch(&config.assets_dir, RecursiveMode::Recursive)
        .with_context(|| format!("cannot watch {}", config.assets_dir.display()))?;
    if let Some(path) = &args.config {
        watcher.watch(path, RecursiveMode::NonRecursive)?;
    }

    println!("👀 Watching {} for changes", config.assets_dir.display());
    while let Ok(event) = rx.recv() {
        if let Err(e) = event {
            tracing::warn!(error = %e, "watch error");
            continue;
        }
        // Editors write in bursts; fold them into one rebuild.
        while rx.recv_timeout(Duration::from_millis(200)).is_ok() {}
        println!("🔄 Change detected, rebuilding");
        if let Err(e) = build(args) {
            tracing::error!(error = %e, "rebuild failed");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    println!("🏗️  Building portfolio site");
    build(&args)?;

    if args.watch {
        watch(&args)?;
    }
    Ok(())
}
