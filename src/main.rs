mod cli;

use anyhow::Result;
use bvexport::{config, processor};
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            // Verbose mode: include the per-fragment debug detail
            "bvexport=debug,bvexport_av=debug".to_string()
        } else {
            // Normal mode: per-directory progress and the run summary
            "bvexport=info,bvexport_av=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    let config = config::load_config_or_default(cli.config.as_deref())?;

    let options = processor::ExportOptions {
        ffmpeg_path: config.tools.ffmpeg_path.clone(),
        dry_run: cli.dry_run,
    };

    let summary = processor::run_export(&cli.cache_root, &cli.export_dir, &options)?;
    summary.log();

    Ok(())
}
