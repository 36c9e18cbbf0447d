//! Policies for the open choices in the alignment.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ops::{EditScript, OpKind};

/// How a cell of the alignment table is derived from its neighbours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recurrence {
    /// `max(up, left)` plus one on a match.
    ///
    /// The match bonus is added on top of the larger neighbour instead of the
    /// diagonal predecessor, so cells can exceed the length of a longest
    /// common subsequence of the prefixes.
    #[default]
    Reference,
    /// The textbook longest-common-subsequence recurrence: the diagonal
    /// predecessor plus one on a match, `max(up, left)` otherwise.
    Canonical,
}

/// The scalar difference reported for an alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// The number of runs minus the length of the common subsequence.
    ///
    /// Identical non-empty inputs give `1 - len`, which is negative.
    #[default]
    RunsMinusCommon,
    /// The number of single-symbol additions and deletions in the script.
    EditDistance,
}

/// The order in which the runs of an edit script are returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunOrder {
    /// From the start of both sequences to their end.
    #[default]
    Forward,
    /// The order in which the backtrace discovers them, from the end of both
    /// sequences to their start. The symbols inside each run are reversed too.
    Reverse,
}

impl Metric {
    /// Evaluates the metric for a script and the length of the common
    /// subsequence recovered with it.
    #[must_use]
    pub fn evaluate<T>(self, script: &EditScript<T>, common_len: usize) -> isize {
        match self {
            Self::RunsMinusCommon => signed(script.len()) - signed(common_len),
            Self::EditDistance => signed(script.count(OpKind::Add) + script.count(OpKind::Delete)),
        }
    }
}

/// Converts a count to `isize`, saturating on the (unreachable in practice)
/// overflow.
fn signed(n: usize) -> isize {
    isize::try_from(n).unwrap_or(isize::MAX)
}

/// Builds the error message for an unrecognized policy name.
fn unknown(what: &str, s: &str, expected: &[&str]) -> String {
    format!("Unknown {what} `{s}`. Expected one of: {}.", expected.join(", "))
}

impl FromStr for Recurrence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reference" => Ok(Self::Reference),
            "canonical" | "lcs" => Ok(Self::Canonical),
            _ => Err(unknown("recurrence", s, &["reference", "canonical"])),
        }
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "runs-minus-common" => Ok(Self::RunsMinusCommon),
            "edit-distance" => Ok(Self::EditDistance),
            _ => Err(unknown("metric", s, &["runs-minus-common", "edit-distance"])),
        }
    }
}

impl FromStr for RunOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "forward" => Ok(Self::Forward),
            "reverse" => Ok(Self::Reverse),
            _ => Err(unknown("run order", s, &["forward", "reverse"])),
        }
    }
}

/// The configuration of an `Aligner`.
///
/// Every field defaults to the reference behaviour, so a partial config only
/// needs to name what it changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::module_name_repetitions)]
pub struct AlignerConfig {
    /// How the alignment table is filled.
    pub recurrence: Recurrence,
    /// The metric reported with the alignment.
    pub metric: Metric,
    /// The order of the runs in the edit script.
    pub run_order: RunOrder,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AlignerConfig {
    /// The reference configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            recurrence: Recurrence::Reference,
            metric: Metric::RunsMinusCommon,
            run_order: RunOrder::Forward,
        }
    }

    /// Sets the table recurrence.
    #[must_use]
    pub const fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    /// Sets the reported metric.
    #[must_use]
    pub const fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Sets the order of the runs.
    #[must_use]
    pub const fn with_run_order(mut self, run_order: RunOrder) -> Self {
        self.run_order = run_order;
        self
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::ops::EditOp;

    #[test_case("reference", Recurrence::Reference)]
    #[test_case("Canonical", Recurrence::Canonical)]
    #[test_case(" lcs ", Recurrence::Canonical)]
    fn parse_recurrence(s: &str, expected: Recurrence) {
        assert_eq!(s.parse::<Recurrence>(), Ok(expected));
    }

    #[test_case("runs-minus-common", Metric::RunsMinusCommon)]
    #[test_case("EDIT-DISTANCE", Metric::EditDistance)]
    fn parse_metric(s: &str, expected: Metric) {
        assert_eq!(s.parse::<Metric>(), Ok(expected));
    }

    #[test_case("forward", RunOrder::Forward)]
    #[test_case("reverse", RunOrder::Reverse)]
    fn parse_run_order(s: &str, expected: RunOrder) {
        assert_eq!(s.parse::<RunOrder>(), Ok(expected));
    }

    #[test]
    fn parse_unknown() {
        let err = "myers".parse::<Recurrence>().unwrap_err();
        assert!(err.contains("`myers`"));
        assert!(err.contains("reference, canonical"));
        assert!("levenshtein".parse::<Metric>().is_err());
        assert!("".parse::<RunOrder>().is_err());
    }

    #[test]
    fn builders() {
        let config = AlignerConfig::new()
            .with_recurrence(Recurrence::Canonical)
            .with_metric(Metric::EditDistance)
            .with_run_order(RunOrder::Reverse);
        assert_eq!(config.recurrence, Recurrence::Canonical);
        assert_eq!(config.metric, Metric::EditDistance);
        assert_eq!(config.run_order, RunOrder::Reverse);
        assert_eq!(AlignerConfig::default(), AlignerConfig::new());
    }

    #[test]
    fn deserialize_partial() -> Result<(), String> {
        let config: AlignerConfig =
            serde_json::from_str(r#"{ "metric": "edit-distance" }"#).map_err(|e| e.to_string())?;
        assert_eq!(config, AlignerConfig::new().with_metric(Metric::EditDistance));

        let config: AlignerConfig = serde_json::from_str("{}").map_err(|e| e.to_string())?;
        assert_eq!(config, AlignerConfig::default());

        let json = serde_json::to_string(&config).map_err(|e| e.to_string())?;
        assert_eq!(
            json,
            r#"{"recurrence":"reference","metric":"runs-minus-common","run_order":"forward"}"#
        );

        assert!(serde_json::from_str::<AlignerConfig>(r#"{ "run_order": "sideways" }"#).is_err());

        Ok(())
    }

    #[test]
    fn metrics() {
        let script: EditScript<char> = [
            EditOp::Add('G'),
            EditOp::Copy('A'),
            EditOp::Delete('G'),
            EditOp::Copy('C'),
            EditOp::Delete('A'),
            EditOp::Delete('T'),
        ]
        .into_iter()
        .collect();

        assert_eq!(Metric::RunsMinusCommon.evaluate(&script, 2), 3);
        assert_eq!(Metric::EditDistance.evaluate(&script, 2), 4);

        let same: EditScript<char> = "abc".chars().map(EditOp::Copy).collect();
        assert_eq!(Metric::RunsMinusCommon.evaluate(&same, 3), -2);
        assert_eq!(Metric::EditDistance.evaluate(&same, 3), 0);

        let empty = EditScript::<char>::new();
        assert_eq!(Metric::RunsMinusCommon.evaluate(&empty, 0), 0);
    }
}
