use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EdaError, Result};

// ---------------------------------------------------------------------------
// Config – every path and chart constant the two programs need
// ---------------------------------------------------------------------------

/// Run configuration. Every field has a default so an empty JSON object
/// (or no file at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Red wine table.
    pub red_path: PathBuf,
    /// White wine table.
    pub white_path: PathBuf,
    /// Where the charts are written. Created if absent.
    pub results_dir: PathBuf,
    /// Downloaded archive; a leading `~` is expanded to the home directory.
    pub archive_path: PathBuf,
    /// Extraction target for the archive.
    pub data_dir: PathBuf,
    /// Field separator of both tables.
    pub delimiter: char,
    /// Name of the label column.
    pub quality_column: String,
    /// Bin count of the quality histogram.
    pub histogram_bins: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            red_path: PathBuf::from("data/winequality-red.csv"),
            white_path: PathBuf::from("data/winequality-white.csv"),
            results_dir: PathBuf::from("results/figures"),
            archive_path: PathBuf::from("~/browser_downloads/wine+quality.zip"),
            data_dir: PathBuf::from("data"),
            delimiter: ';',
            quality_column: "quality".to_string(),
            histogram_bins: 10,
        }
    }
}

impl Config {
    /// Load a JSON configuration file. Missing fields fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EdaError::MissingInput {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| EdaError::Config(format!("{}: {e}", path.display())))
    }

    /// Load `path` if given, otherwise start from defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.histogram_bins == 0 {
            return Err(EdaError::Config("histogram_bins must be at least 1".into()));
        }
        if !self.delimiter.is_ascii() {
            return Err(EdaError::Config(format!(
                "delimiter {:?} is not a single-byte character",
                self.delimiter
            )));
        }
        if self.quality_column.trim().is_empty() {
            return Err(EdaError::Config("quality_column must not be empty".into()));
        }
        Ok(())
    }

    /// Delimiter as the byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }

    /// Archive path with `~` expanded.
    pub fn resolved_archive_path(&self) -> PathBuf {
        expand_home(&self.archive_path)
    }
}

/// Expand a leading `~` component using `HOME` (or `USERPROFILE` on Windows).
/// Paths without a tilde, or with no home variable set, are returned as is.
pub fn expand_home(path: &Path) -> PathBuf {
    let mut components = path.components();
    match components.next() {
        Some(std::path::Component::Normal(first)) if first == "~" => {
            let home = std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE"));
            match home {
                Some(home) => PathBuf::from(home).join(components.as_path()),
                None => path.to_path_buf(),
            }
        }
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_object_yields_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let cfg: Config =
            serde_json::from_str(r#"{"results_dir": "out", "histogram_bins": 7}"#).unwrap();
        assert_eq!(cfg.results_dir, PathBuf::from("out"));
        assert_eq!(cfg.histogram_bins, 7);
        assert_eq!(cfg.red_path, PathBuf::from("data/winequality-red.csv"));
        assert_eq!(cfg.delimiter, ';');
    }

    #[test]
    fn validate_rejects_zero_bins_and_wide_delimiter() {
        let mut cfg = Config::default();
        assert!(cfg.validate().is_ok());

        cfg.histogram_bins = 0;
        assert!(matches!(cfg.validate(), Err(EdaError::Config(_))));

        cfg.histogram_bins = 10;
        cfg.delimiter = '§';
        assert!(matches!(cfg.validate(), Err(EdaError::Config(_))));
    }

    #[test]
    fn missing_config_file_is_missing_input() {
        let err = Config::from_file(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, EdaError::MissingInput { .. }));
    }

    #[test]
    fn paths_without_tilde_are_untouched() {
        let p = Path::new("/tmp/wine+quality.zip");
        assert_eq!(expand_home(p), p.to_path_buf());
        let rel = Path::new("downloads/~/x.zip");
        assert_eq!(expand_home(rel), rel.to_path_buf());
    }

    #[test]
    fn tilde_is_expanded_when_home_is_known() {
        let expanded = expand_home(Path::new("~/browser_downloads/wine+quality.zip"));
        if std::env::var_os("HOME").is_some() || std::env::var_os("USERPROFILE").is_some() {
            assert!(!expanded.starts_with("~"));
            assert!(expanded.ends_with("browser_downloads/wine+quality.zip"));
        }
    }
}
