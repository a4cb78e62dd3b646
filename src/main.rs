use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use notebook_discovery::logging::{self, Verbosity};
use notebook_discovery::output::OutputFormatter;
use notebook_discovery::{cli, discover_from_config};
use tracing::info;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    info!(root = %args.root.display(), format = args.format.as_str(), "discovering notebooks");
    let cases = discover_from_config(&args.root, args.config.as_deref())
        .with_context(|| format!("Failed to discover notebooks in {}", args.root.display()))?;

    let rendered = OutputFormatter::format(&cases, args.format)?;

    match args.output_file {
        Some(ref path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!(path = %path.display(), count = cases.len(), "wrote notebook listing");
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
