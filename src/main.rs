use std::path::{Path, PathBuf};

use clap::Parser;
use element_finder::config::{FileConfig, FinderConfig, DEFAULT_CONFIG_FILE};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(author, version, about = "Finds a page element by id and locates its counterpart in a modified page", long_about = None)]
struct Args {
    /// Path to the origin HTML file
    origin: PathBuf,

    /// Path to the modified HTML file
    modified: PathBuf,

    /// TOML config file (defaults to ./element_finder_config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Id of the element to look up in the origin file
    #[arg(short, long)]
    target_id: Option<String>,

    /// File the comparison report is appended to
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the attribute diff between the origin element and its match
    #[arg(long)]
    show_diff: bool,

    /// Log debug details
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Log errors only
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let file_config = match &args.config {
        Some(path) => FileConfig::load(path, true)?,
        None => FileConfig::load(Path::new(DEFAULT_CONFIG_FILE), false)?,
    };
    let config = FinderConfig::layered(file_config, args.target_id, args.output);

    let outcome = element_finder::run(&config, &args.origin, &args.modified)?;

    println!("{}", outcome.report.path);
    if args.show_diff {
        match &outcome.diff {
            Some(diff) => print!("{diff}"),
            None => println!("no match"),
        }
    }

    Ok(())
}
