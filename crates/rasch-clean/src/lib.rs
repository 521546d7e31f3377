//! Response matrix cleaning.
//!
//! Turns a raw, possibly ragged grid exported from a spreadsheet into a
//! rectangular matrix of 0/1/missing responses ready for Rasch estimation.
//! No schema is supplied: item columns are inferred from header text and
//! from how binary each column's content is.
//!
//! # Pipeline
//!
//! - **Normalization**: each cell reads as correct, incorrect or missing
//! - **Header classification**: label-like vs question-like header text
//! - **Ratio analysis**: fraction of binary cells per column
//! - **Selection**: candidate columns, best contiguous block, fallbacks
//! - **Assembly**: projection, row filtering, optional fill
//!
//! Every stage is a total, pure function; nothing here returns an error.
//!
//! # Example
//!
//! ```
//! use rasch_clean::clean;
//! use rasch_model::{RawCell, RawMatrix};
//!
//! let raw = RawMatrix::new(vec![
//!     vec!["Ism".into(), "Q1".into(), "Q2".into()],
//!     vec!["Ali".into(), RawCell::Int(1), "no".into()],
//! ]);
//! let matrix = clean(&raw, None);
//! assert_eq!(matrix.height(), 1);
//! assert_eq!(matrix.width(), 2);
//! ```

pub mod assemble;
pub mod block;
pub mod config;
pub mod header;
pub mod normalize;
pub mod ratio;
pub mod select;
pub mod tokens;

pub use assemble::{CleanReport, clean, clean_with_report, infer_item_columns};
pub use block::{contiguous_runs, pick_best_block, top_ratio_columns};
pub use config::{CleanConfig, ConfigError, ItemCountRange};
pub use header::{HeaderClass, classify_header};
pub use normalize::{CellClass, classify, normalize};
pub use ratio::{binary_ratio, column_signals};
pub use select::{Candidates, select_candidates, select_items};
