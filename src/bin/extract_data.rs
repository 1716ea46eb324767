use anyhow::Result;
use clap::Parser;

use wine_eda::app::App;
use wine_eda::cli::{init_logging, ExtractArgs};

fn main() -> Result<()> {
    let args = ExtractArgs::parse();
    init_logging(args.verbose);

    let report = App::new(args.resolve()?).extract()?;
    println!("Data files extracted to {}", report.destination.display());
    Ok(())
}
