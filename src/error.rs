use std::path::PathBuf;

use thiserror::Error;

use crate::data::WineKind;
use crate::plot::PlotError;

/// Errors raised by the loader, the analysis passes and the extractor.
///
/// Every variant is fatal for the run; nothing is retried or downgraded to a
/// partial result.
#[derive(Error, Debug)]
pub enum EdaError {
    /// An input file (data table or archive) does not exist.
    #[error("input not found at {}", path.display())]
    MissingInput { path: PathBuf },

    /// The input exists but is not a numeric, rectangular table.
    #[error("malformed input in {}: {detail}", path.display())]
    MalformedInput { path: PathBuf, detail: String },

    /// A column the analysis needs is absent from one of the tables.
    #[error("{kind} table has no column '{column}'")]
    MissingColumn { kind: WineKind, column: String },

    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error(transparent)]
    Plot(#[from] PlotError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EdaError {
    pub fn malformed(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        EdaError::MalformedInput {
            path: path.into(),
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EdaError>;
