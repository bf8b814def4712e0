use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use kmldom::{Config, Mode, Object, Strictness};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "kmldom",
    version,
    about = "Parse KML and write it back pretty-printed or compact"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
    /// Write without indentation or newlines
    #[arg(long)]
    compact: bool,
    /// Reject unknown and misplaced elements instead of keeping them
    #[arg(long)]
    strict: bool,
}

impl Args {
    fn config(&self) -> Config {
        let strictness = if self.strict {
            Strictness::Strict
        } else {
            Strictness::Lenient
        };
        Config::default().with_strictness(strictness)
    }

    fn mode(&self) -> Mode {
        if self.compact {
            Mode::Compact
        } else {
            Mode::Pretty
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();
    let input = read_input(&args.input)?;

    let tree = kmldom::parse_with_config(&input, args.config()).with_context(|| {
        match &args.input {
            Some(path) => format!("failed to parse {}", path.display()),
            None => "failed to parse stdin".to_string(),
        }
    })?;
    info!(root = %tree.kind(), "parsed");

    let output = kmldom::serialize(&tree, args.mode());
    debug!(bytes = output.len(), "serialized");
    write_output(&args.output, output.as_bytes())?;
    Ok(())
}

fn read_input(path: &Option<PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.trim().is_empty() {
                bail!("no input provided on stdin");
            }
            Ok(buffer)
        }
    }
}

fn write_output(path: &Option<PathBuf>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, data)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(data).context("failed to write stdout")?;
            Ok(())
        }
    }
}
