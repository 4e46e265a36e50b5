use std::path::PathBuf;
use std::process;

use clap::Parser;
use stubgen_cli::{GeneratorConfig, StubGenerator};

/// Generate declaration-only PHP stub files for static analysis.
#[derive(Parser, Debug)]
#[command(name = "stubgen", version, about)]
struct Cli {
    /// Root directory of the PHP application to scan
    app_root: PathBuf,

    /// Directory to write stub files into
    output_dir: PathBuf,

    /// JSON config file overriding the built-in WHMCS defaults
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("{e}");
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> stubgen_cli::Result<()> {
    let config = match &cli.config {
        Some(path) => GeneratorConfig::from_json_file(path)?,
        None => GeneratorConfig::default(),
    };

    let generator = StubGenerator::new(cli.app_root, cli.output_dir, config);
    let summary = generator.run()?;

    println!(
        "Scanned {} files, wrote {} function stubs and {} container stubs.",
        summary.files_scanned, summary.functions_written, summary.containers_written
    );
    Ok(())
}
