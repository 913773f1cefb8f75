//! Output serialization.

pub mod tsv;

pub use tsv::{format_decimal, output_path, write_tsv, write_tsv_to_writer};
