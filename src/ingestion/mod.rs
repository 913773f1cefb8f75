//! Input loading.
//!
//! Most callers should use [`load_from_path`] (from [`unified`]) which picks the loader by
//! [`LoadOptions::format`] or file extension and optionally reports to an
//! [`IngestionObserver`].
//!
//! Format-specific functions live in [`csv`] and [`jsonp`].

pub mod csv;
pub mod jsonp;
pub mod observability;
pub mod unified;

pub use jsonp::{JsonpExtraction, JsonpPayload};
pub use observability::{
    IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats, TracingObserver,
};
pub use unified::{load_from_path, InputFormat, LoadOptions, LoadedInput};
