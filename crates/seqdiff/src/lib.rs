#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

mod aligner;
mod alignment;
mod backtrace;
mod config;
pub mod ops;
mod table;

pub use aligner::Aligner;
pub use alignment::Alignment;
pub use backtrace::trace_back;
pub use config::{AlignerConfig, Metric, Recurrence, RunOrder};
pub use ops::{EditOp, EditScript, OpKind, Run};
pub use table::AlignmentTable;

/// The version of the crate.
pub const VERSION: &str = "0.1.0";

/// Aligns `source` against `target` with the default configuration.
///
/// The result holds the run-length encoded edit script that turns `source`
/// into `target`, the common subsequence recovered on the way, and the
/// difference metric.
///
/// # Examples
///
/// ```
/// let alignment = seqdiff::align(b"AB", b"B");
///
/// assert_eq!(alignment.common_subsequence(), b"B");
/// assert_eq!(alignment.runs().len(), 2);
/// ```
#[must_use]
pub fn align<T: PartialEq + Clone>(source: &[T], target: &[T]) -> Alignment<T> {
    Aligner::default().align(source, target)
}

/// Aligns two strings, symbol by symbol over their `char`s, with the default
/// configuration.
#[must_use]
pub fn align_str(source: &str, target: &str) -> Alignment<char> {
    Aligner::default().align_str(source, target)
}
