use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bvexport")]
#[command(author, version, about = "Export cached Bilibili videos to MP4")]
pub struct Cli {
    /// Root of the cache tree to scan for downloaded videos
    #[arg(required = true)]
    pub cache_root: PathBuf,

    /// Directory that receives the exported MP4 files
    #[arg(required = true)]
    pub export_dir: PathBuf,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Report what would be exported without invoking the muxer
    #[arg(long)]
    pub dry_run: bool,
}
