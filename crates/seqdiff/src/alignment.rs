//! The result of aligning two sequences.

use crate::{
    ops::{EditScript, Run},
    RunOrder,
};

/// An alignment of a source sequence against a target sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alignment<T> {
    /// The difference metric chosen in the aligner's configuration.
    metric: isize,
    /// The common subsequence, from start to end.
    common: Vec<T>,
    /// The run-length encoded edit script.
    script: EditScript<T>,
    /// The order of the runs in `script`.
    order: RunOrder,
}

impl<T> Alignment<T> {
    /// Packages the parts of an alignment.
    pub(crate) const fn new(metric: isize, common: Vec<T>, script: EditScript<T>, order: RunOrder) -> Self {
        Self {
            metric,
            common,
            script,
            order,
        }
    }

    /// The difference metric.
    pub const fn metric(&self) -> isize {
        self.metric
    }

    /// The common subsequence recovered by the backtrace, from start to end.
    pub fn common_subsequence(&self) -> &[T] {
        &self.common
    }

    /// The edit script.
    pub const fn script(&self) -> &EditScript<T> {
        &self.script
    }

    /// The runs of the edit script.
    pub fn runs(&self) -> &[Run<T>] {
        self.script.runs()
    }

    /// The order of the runs.
    pub const fn order(&self) -> RunOrder {
        self.order
    }

    /// Splits the alignment into its metric, common subsequence and script.
    pub fn into_parts(self) -> (isize, Vec<T>, EditScript<T>) {
        (self.metric, self.common, self.script)
    }
}

impl<T: Clone> Alignment<T> {
    /// Rebuilds the source sequence from the `Copy` and `Delete` runs.
    pub fn source(&self) -> Vec<T> {
        self.oriented(self.script.source())
    }

    /// Rebuilds the target sequence from the `Copy` and `Add` runs.
    pub fn target(&self) -> Vec<T> {
        self.oriented(self.script.target())
    }

    /// Puts symbols collected in script order back into forward order.
    fn oriented(&self, mut symbols: Vec<T>) -> Vec<T> {
        if self.order == RunOrder::Reverse {
            symbols.reverse();
        }
        symbols
    }
}

impl Alignment<char> {
    /// The common subsequence as a string.
    #[must_use]
    pub fn common_text(&self) -> String {
        self.common.iter().collect()
    }
}
