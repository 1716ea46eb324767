//! Data layer: table model, loading and synthetic sample generation.
//!
//! Architecture:
//! ```text
//!  winequality-red.csv / winequality-white.csv   (";"-separated)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → WineTable
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ WineTable  │  column names + column-major f64 values
//!   └───────────┘
//!        │
//!        ▼
//!   analysis passes (stats, charts)
//! ```
//!
//! `sample` produces files in the same layout for local runs and tests.

pub mod loader;
pub mod model;
pub mod sample;

pub use loader::{load_pair, load_table};
pub use model::{WineKind, WineTable};
