//! Data model shared by the response-matrix crates.
//!
//! Raw uploads are held as [`RawMatrix`] grids of [`RawCell`] values; the
//! cleaning pipeline turns them into a [`CleanedMatrix`] of ternary
//! [`Response`] values and reports which columns it kept as an
//! [`ItemSelection`].

pub mod cell;
pub mod column;
pub mod matrix;
pub mod response;

pub use cell::{RawCell, RawMatrix};
pub use column::{ColumnIndex, ColumnSignal, ItemBlock, ItemSelection, SelectionStage};
pub use matrix::CleanedMatrix;
pub use response::{FillMissing, InvalidFillValue, Response};
