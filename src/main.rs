use anyhow::Result;
use clap::Parser;

use wine_eda::app::App;
use wine_eda::cli::{init_logging, AnalyzeArgs};

fn main() -> Result<()> {
    let args = AnalyzeArgs::parse();
    init_logging(args.verbose);

    let config = args.resolve()?;
    log::debug!("Configuration: {config:?}");

    let report = App::new(config).analyze()?;
    for image in report.images() {
        println!("{}", image.display());
    }
    Ok(())
}
