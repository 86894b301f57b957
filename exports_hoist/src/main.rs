use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "exports-hoist")]
#[command(
    about = "Regenerate a package manifest's exports map from its vendored sub-packages",
    long_about = None
)]
struct Cli {
    /// Path to the package whose manifest should be regenerated.
    #[arg(value_name = "PACKAGE_PATH")]
    package_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let package_path = cli
        .package_path
        .context("missing package path argument")?;
    exports_hoist::hoist::hoist_package_exports(&package_path)
        .with_context(|| format!("failed to regenerate exports for {}", package_path.display()))
}
