//! Aggregation and reshaping.
//!
//! CSV path:
//!
//! - [`extract_depths()`]: distinct depths from the `depth-<D>_iter-<I>` header
//! - [`window_stats()`]: median or mean per fixed-size iteration window
//!
//! JSONP path:
//!
//! - [`group_means()`]: mean per (group, depth) record
//! - [`reshape_means()`]: group-by-depth table with a validated shared header
//!
//! ## Example: CSV rows to statistics
//!
//! ```rust
//! use rarefaction_summary::processing::{extract_depths, window_stats, StatMethod};
//! use rarefaction_summary::types::RawTable;
//!
//! let table = RawTable::new(
//!     ["sample", "depth-1_iter-1", "depth-1_iter-2", "depth-2_iter-1", "depth-2_iter-2"]
//!         .map(String::from)
//!         .to_vec(),
//!     vec![["S1", "4", "6", "10", "12"].map(String::from).to_vec()],
//! );
//!
//! let depths = extract_depths(&table).unwrap();
//! assert_eq!(depths.as_slice(), &[1, 2]);
//!
//! let stats = window_stats(&table.rows, StatMethod::Mean, 2).unwrap();
//! assert_eq!(stats[0].values, vec![5.0, 11.0]);
//! ```

pub mod group_mean;
pub mod header;
pub mod reshape;
pub mod stats;
pub mod window;

pub use group_mean::group_means;
pub use header::extract_depths;
pub use reshape::reshape_means;
pub use stats::StatMethod;
pub use window::{check_header_blocks, check_window_count, window_stats, DEFAULT_ITERATIONS};
