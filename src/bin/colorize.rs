use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

/// Colorize sprites.
///
/// Reads the `test.col` manifest in `--dir` and writes one recolored PNG per entry into
/// `--dir/autocolor/`.
#[derive(Parser, Debug)]
#[command(name = "colorize", version)]
struct Cli {
    /// Source files directory path.
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let dir = std::fs::canonicalize(&cli.dir)
        .with_context(|| format!("resolve directory '{}'", cli.dir.display()))?;

    let report = colorize::run_in_dir(&dir, &colorize::BatchOpts::default())?;

    eprintln!(
        "wrote {} sprite(s) to {}",
        report.outputs.len(),
        dir.join(colorize::OUTPUT_DIR_NAME).display()
    );
    Ok(())
}
