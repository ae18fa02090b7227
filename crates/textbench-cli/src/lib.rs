//! Library components of the textbench timing harness.

pub mod bench;
pub mod logging;
pub mod summary;
