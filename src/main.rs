//! mock-generator — generate C++ mock classes for a source tree.
//!
//! Runs ctags over the given paths (or reads an existing tag listing with
//! `--tags`), parses it and writes one `mock_*` file per source/header.

use anyhow::{Context, Result};
use clap::Parser;
use mock_generator::ctags::Ctags;
use mock_generator::render::{self, GenerateConfig};
use mock_generator::tags;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mock-generator",
    version,
    about = "C++ mock generator driven by ctags"
)]
struct Cli {
    /// Directories or files to scan. Defaults to the current directory.
    paths: Vec<PathBuf>,

    /// Exclude files and directories matching PATTERN (repeatable)
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN")]
    excludes: Vec<String>,

    /// Output files to DIRECTORY
    #[arg(short = 'o', long = "out", value_name = "DIRECTORY", default_value = render::DEFAULT_OUT_DIR)]
    out: PathBuf,

    /// Read tags from FILE ("-" for stdin) instead of running ctags
    #[arg(long, value_name = "FILE")]
    tags: Option<String>,

    /// ctags executable
    #[arg(long, value_name = "BIN", default_value = "ctags")]
    ctags: String,

    /// Show debug logs
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let text = match cli.tags.as_deref() {
        Some(source) => read_tags(source)?,
        None => run_ctags(&cli)?,
    };

    let model = tags::parse(&text);
    if model.is_empty() {
        log::warn!("no classes or functions found");
        return Ok(());
    }

    let config = GenerateConfig {
        out_dir: cli.out,
        ..Default::default()
    };
    render::write_mocks(&model, &config)?;
    Ok(())
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

/// Read a tag listing from a file, or from stdin for "-".
fn read_tags(source: &str) -> Result<String> {
    if source == "-" {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read stdin")?;
        return Ok(input);
    }
    fs::read_to_string(source).with_context(|| format!("failed to read {}", source))
}

fn run_ctags(cli: &Cli) -> Result<String> {
    let mut ctags = Ctags::new(cli.ctags.clone());
    for pattern in &cli.excludes {
        ctags = ctags.exclude(pattern.clone());
    }
    for path in &cli.paths {
        ctags = ctags.path(path.clone());
    }
    ctags.run()
}
