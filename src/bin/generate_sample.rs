use anyhow::{Context, Result};
use clap::Parser;

use wine_eda::cli::{init_logging, SampleArgs};
use wine_eda::data::sample::{generate_table, write_table};
use wine_eda::data::WineKind;

fn main() -> Result<()> {
    let args = SampleArgs::parse();
    init_logging(args.verbose);

    let jobs = [
        (WineKind::Red, args.red_rows, args.seed, "winequality-red.csv"),
        (WineKind::White, args.white_rows, args.seed.wrapping_add(1), "winequality-white.csv"),
    ];

    for (kind, rows, seed, file_name) in jobs {
        let table = generate_table(kind, rows, seed);
        let path = args.out_dir.join(file_name);
        write_table(&table, &path, b';')
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("Wrote {rows} {kind} samples to {}", path.display());
    }

    println!("Wrote sample tables to {}", args.out_dir.display());
    Ok(())
}
