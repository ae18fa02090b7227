//! Text transformation algorithms.
//!
//! This crate provides three independent, pure string transformations:
//!
//! - **rle**: run-length encoding (and its inverse)
//! - **lfs**: longest substring made only of globally frequent characters
//! - **date**: loosely formatted dates normalized to `YYYY-MM-DD`
//!
//! Every operation takes its input by reference, keeps all state local to
//! the call, and reports malformed input through [`InvalidInput`].

pub mod date;
pub mod error;
pub mod lfs;
pub mod rle;

pub use date::{DateComponent, lookup_month, reformat_date};
pub use error::{InvalidInput, Result};
pub use lfs::{FrequencyMap, longest_frequent_substring};
pub use rle::{decode, encode};
