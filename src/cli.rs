//! Command-line arguments of the three programs.
//!
//! Every flag is optional: with no arguments each program runs on the
//! defaults from [`Config`]. A JSON file given with `--config` is applied
//! first, then any flag overrides it.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::error::Result;

/// Exploratory analysis of the red and white wine-quality tables.
///
/// Writes box plots, a quality histogram, correlation heatmaps and a
/// feature-importance chart into the results directory.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct AnalyzeArgs {
    /// JSON configuration file
    #[arg(short, long, value_name = "FILE", env = "WINE_EDA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Red wine table (";"-separated)
    #[arg(long, value_name = "FILE", env = "WINE_EDA_RED")]
    pub red: Option<PathBuf>,

    /// White wine table (";"-separated)
    #[arg(long, value_name = "FILE", env = "WINE_EDA_WHITE")]
    pub white: Option<PathBuf>,

    /// Output directory for the figures
    #[arg(short, long, value_name = "DIR", env = "WINE_EDA_RESULTS_DIR")]
    pub results_dir: Option<PathBuf>,

    /// Number of bins in the quality histogram
    #[arg(long, value_name = "COUNT")]
    pub bins: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl AnalyzeArgs {
    /// Defaults, then the config file, then flags.
    pub fn resolve(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(red) = &self.red {
            config.red_path = red.clone();
        }
        if let Some(white) = &self.white {
            config.white_path = white.clone();
        }
        if let Some(dir) = &self.results_dir {
            config.results_dir = dir.clone();
        }
        if let Some(bins) = self.bins {
            config.histogram_bins = bins;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Unpack the downloaded wine-quality archive into the data directory.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct ExtractArgs {
    /// JSON configuration file
    #[arg(short, long, value_name = "FILE", env = "WINE_EDA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Zip archive to unpack (a leading "~" is expanded)
    #[arg(short, long, value_name = "FILE", env = "WINE_EDA_ARCHIVE")]
    pub archive: Option<PathBuf>,

    /// Destination directory
    #[arg(short, long, value_name = "DIR", env = "WINE_EDA_DATA_DIR")]
    pub dest: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExtractArgs {
    pub fn resolve(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(archive) = &self.archive {
            config.archive_path = archive.clone();
        }
        if let Some(dest) = &self.dest {
            config.data_dir = dest.clone();
        }
        Ok(config)
    }
}

/// Write a synthetic red/white pair in the dataset's file format.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct SampleArgs {
    /// Directory to write winequality-red.csv and winequality-white.csv into
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    pub out_dir: PathBuf,

    /// Rows in the red table
    #[arg(long, default_value_t = 1599)]
    pub red_rows: usize,

    /// Rows in the white table
    #[arg(long, default_value_t = 4898)]
    pub white_rows: usize,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Initialise `env_logger` at `info` (or `debug` with `verbose`); `RUST_LOG`
/// takes precedence when set.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn no_arguments_means_defaults() {
        let args = AnalyzeArgs::try_parse_from(["wine-eda"]).unwrap();
        // env vars could be set in a developer shell; only check parsing here
        assert!(!args.verbose);
        let cfg = AnalyzeArgs::default().resolve().unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"results_dir": "from-file", "histogram_bins": 5}}"#).unwrap();

        let args = AnalyzeArgs {
            config: Some(file.path().to_path_buf()),
            results_dir: Some(PathBuf::from("from-flag")),
            ..Default::default()
        };
        let cfg = args.resolve().unwrap();
        assert_eq!(cfg.results_dir, PathBuf::from("from-flag"));
        assert_eq!(cfg.histogram_bins, 5);
    }

    #[test]
    fn zero_bins_flag_is_rejected() {
        let args = AnalyzeArgs {
            bins: Some(0),
            ..Default::default()
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn extract_flags() {
        let args = ExtractArgs::try_parse_from([
            "extract-data",
            "--archive",
            "/tmp/wine+quality.zip",
            "--dest",
            "out",
        ])
        .unwrap();
        let cfg = args.resolve().unwrap();
        assert_eq!(cfg.archive_path, PathBuf::from("/tmp/wine+quality.zip"));
        assert_eq!(cfg.data_dir, PathBuf::from("out"));
    }

    #[test]
    fn sample_defaults_match_published_row_counts() {
        let args = SampleArgs::try_parse_from(["generate-sample"]).unwrap();
        assert_eq!(args.red_rows, 1599);
        assert_eq!(args.white_rows, 4898);
    }
}
