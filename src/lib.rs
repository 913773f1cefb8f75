//! `rarefaction-summary` turns rarefaction-curve outputs into a depth table written as TSV.
//!
//! Two independent pipelines are provided, each `load → aggregate → reshape → write`:
//!
//! - **CSV**: one column per `depth-<D>_iter-<I>`, one row per sample. Each depth's block of
//!   `iterations` columns is reduced to its median or mean ([`pipeline::run_csv`]).
//! - **JSONP**: `callback({"data": [[group, depth, v1, ..., vk, meta], ...]})`. Each record is
//!   reduced to the mean of `v1..vk` and laid out group by depth ([`pipeline::run_jsonp`]).
//!
//! Output is tab-separated with `,` as decimal separator, written atomically to
//! `<prefix>.tsv`.
//!
//! ## Quick example
//!
//! ```no_run
//! use rarefaction_summary::ingestion::LoadOptions;
//! use rarefaction_summary::pipeline::{run_csv, CsvSummaryOptions};
//! use rarefaction_summary::processing::StatMethod;
//!
//! # fn main() -> Result<(), rarefaction_summary::RarefactionError> {
//! let opts = CsvSummaryOptions {
//!     method: StatMethod::Median,
//!     ..Default::default()
//! };
//! let load = LoadOptions::default();
//! let written = run_csv("observed_features.csv", "results/observed", &opts, &load)?;
//! println!("wrote {}", written.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV and JSONP loaders, unified entrypoint, observers
//! - [`processing`]: depth extraction, windowed statistics, group means, reshaping
//! - [`output`]: TSV writer
//! - [`pipeline`]: end-to-end runs and their options
//! - [`types`]: in-memory tables
//! - [`error`]: the shared error type

pub mod cli;
pub mod error;
pub mod ingestion;
pub mod output;
pub mod pipeline;
pub mod processing;
pub mod types;

pub use error::{RarefactionError, RarefactionResult};
