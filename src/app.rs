use anyhow::{Context, Result};

use crate::analysis::{self, PipelineReport};
use crate::config::Config;
use crate::data::load_pair;
use crate::extract::{extract_archive, ExtractReport};

// ---------------------------------------------------------------------------
// App – the two top-level operations behind the binaries
// ---------------------------------------------------------------------------

pub struct App {
    pub config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load both tables and run every analysis pass.
    pub fn analyze(&self) -> Result<PipelineReport> {
        self.config.validate().context("checking configuration")?;

        let (red, white) = load_pair(&self.config).context("loading wine tables")?;
        log::info!(
            "Loaded {} red and {} white samples ({} columns)",
            red.len(),
            white.len(),
            red.width()
        );

        let report = analysis::run_all(&red, &white, &self.config)
            .with_context(|| format!("writing figures to {}", self.config.results_dir.display()))?;

        log::info!("{} figures written", report.images().len());
        Ok(report)
    }

    /// Unpack the configured archive into the data directory.
    pub fn extract(&self) -> Result<ExtractReport> {
        let archive = self.config.resolved_archive_path();
        let report = extract_archive(&archive, &self.config.data_dir)
            .with_context(|| format!("extracting {}", archive.display()))?;
        log::info!(
            "Data files extracted to {} ({} files)",
            report.destination.display(),
            report.files.len()
        );
        Ok(report)
    }
}
