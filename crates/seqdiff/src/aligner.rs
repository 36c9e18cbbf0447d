//! The aligner tying the table, the backtrace and the metric together.

use crate::{backtrace, ops::EditScript, AlignerConfig, Alignment, AlignmentTable, RunOrder};

/// Aligns pairs of sequences under a fixed configuration.
///
/// The aligner holds no state between calls; every alignment computes and
/// drops its own table, so one aligner can be shared freely across threads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Aligner {
    /// The policies used for every alignment.
    config: AlignerConfig,
}

impl Aligner {
    /// Creates an aligner with the given configuration.
    #[must_use]
    pub const fn new(config: AlignerConfig) -> Self {
        Self { config }
    }

    /// The configuration of the aligner.
    #[must_use]
    pub const fn config(&self) -> &AlignerConfig {
        &self.config
    }

    /// Computes the table of partial-match scores for two sequences.
    ///
    /// # Arguments
    ///
    /// * `source` - The sequence to transform; it runs along the columns.
    /// * `target` - The sequence to reach; it runs along the rows.
    pub fn dp_table<T: PartialEq>(&self, source: &[T], target: &[T]) -> AlignmentTable {
        AlignmentTable::new(source, target, self.config.recurrence)
    }

    /// Walks `table` back from its terminal cell.
    ///
    /// Returns the edit script in the configured run order and the common
    /// subsequence from start to end.
    pub fn trace_back<T: PartialEq + Clone>(
        &self,
        table: &AlignmentTable,
        source: &[T],
        target: &[T],
    ) -> (EditScript<T>, Vec<T>) {
        let (mut script, common) = backtrace::trace_back(table, source, target);
        if self.config.run_order == RunOrder::Forward {
            script.reverse();
        }
        (script, common)
    }

    /// Aligns `source` against `target`.
    ///
    /// # Arguments
    ///
    /// * `source` - The sequence to transform.
    /// * `target` - The sequence to reach.
    ///
    /// # Returns
    ///
    /// The edit script, in the configured run order, the common subsequence
    /// and the configured metric.
    pub fn align<T: PartialEq + Clone>(&self, source: &[T], target: &[T]) -> Alignment<T> {
        let table = self.dp_table(source, target);
        ftlog::trace!("Alignment table ({}x{}):\n{table}", table.n_rows(), table.n_cols());

        let (script, common) = self.trace_back(&table, source, target);
        let metric = self.config.metric.evaluate(&script, common.len());
        ftlog::debug!(
            "Aligned {} source and {} target symbols: {} runs, {} common, metric {metric}",
            source.len(),
            target.len(),
            script.len(),
            common.len()
        );

        Alignment::new(metric, common, script, self.config.run_order)
    }

    /// Aligns two strings over their `char`s.
    pub fn align_str(&self, source: &str, target: &str) -> Alignment<char> {
        let source = source.chars().collect::<Vec<_>>();
        let target = target.chars().collect::<Vec<_>>();
        self.align(&source, &target)
    }
}
