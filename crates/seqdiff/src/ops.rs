//! Edit operations and their run-length encoding.

use core::fmt::{self, Display};

/// The kind of an edit operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// The symbol appears, unchanged, in both sequences.
    Copy,
    /// The symbol appears only in the target sequence.
    Add,
    /// The symbol appears only in the source sequence.
    Delete,
}

impl OpKind {
    /// The name used when rendering runs of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Copy => "Copy",
            Self::Add => "Add",
            Self::Delete => "Delete",
        }
    }

    /// Whether operations of this kind carry a symbol of the source sequence.
    #[must_use]
    pub const fn in_source(self) -> bool {
        match self {
            Self::Copy | Self::Delete => true,
            Self::Add => false,
        }
    }

    /// Whether operations of this kind carry a symbol of the target sequence.
    #[must_use]
    pub const fn in_target(self) -> bool {
        match self {
            Self::Copy | Self::Add => true,
            Self::Delete => false,
        }
    }
}

impl Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single edit operation and the symbol it acts on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EditOp<T> {
    /// Keep a symbol shared by both sequences.
    Copy(T),
    /// Insert a symbol of the target sequence.
    Add(T),
    /// Remove a symbol of the source sequence.
    Delete(T),
}

impl<T> EditOp<T> {
    /// The kind of the operation.
    pub const fn kind(&self) -> OpKind {
        match self {
            Self::Copy(_) => OpKind::Copy,
            Self::Add(_) => OpKind::Add,
            Self::Delete(_) => OpKind::Delete,
        }
    }

    /// The symbol the operation acts on.
    pub const fn symbol(&self) -> &T {
        match self {
            Self::Copy(s) | Self::Add(s) | Self::Delete(s) => s,
        }
    }

    /// Splits the operation into its kind and symbol.
    pub fn into_parts(self) -> (OpKind, T) {
        match self {
            Self::Copy(s) => (OpKind::Copy, s),
            Self::Add(s) => (OpKind::Add, s),
            Self::Delete(s) => (OpKind::Delete, s),
        }
    }

    /// Builds an operation of the given kind.
    pub fn from_parts(kind: OpKind, symbol: T) -> Self {
        match kind {
            OpKind::Copy => Self::Copy(symbol),
            OpKind::Add => Self::Add(symbol),
            OpKind::Delete => Self::Delete(symbol),
        }
    }
}

/// A maximal run of consecutive operations of the same kind.
///
/// A run always holds at least one symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Run<T> {
    /// The kind shared by every operation in the run.
    kind: OpKind,
    /// The symbols, in the order of the script holding the run.
    symbols: Vec<T>,
}

impl<T> Run<T> {
    /// Opens a run with a single symbol.
    pub fn new(kind: OpKind, symbol: T) -> Self {
        Self {
            kind,
            symbols: vec![symbol],
        }
    }

    /// The kind of the run.
    pub const fn kind(&self) -> OpKind {
        self.kind
    }

    /// The symbols of the run.
    pub fn symbols(&self) -> &[T] {
        &self.symbols
    }

    /// The number of elementary operations merged into the run.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; runs are never empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Appends a symbol to the run.
    fn push(&mut self, symbol: T) {
        self.symbols.push(symbol);
    }

    /// Reverses the order of the symbols in the run.
    fn reverse(&mut self) {
        self.symbols.reverse();
    }
}

impl Run<char> {
    /// The symbols of the run as a string.
    #[must_use]
    pub fn text(&self) -> String {
        self.symbols.iter().collect()
    }
}

impl<T: Display> Display for Run<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('", self.kind)?;
        for s in &self.symbols {
            write!(f, "{s}")?;
        }
        f.write_str("')")
    }
}

/// A run-length encoded edit script.
///
/// Operations are merged as they are pushed: an operation of the same kind as
/// the last run extends that run, any other kind opens a new one. Adjacent
/// runs therefore always differ in kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EditScript<T> {
    /// The runs, in script order.
    runs: Vec<Run<T>>,
}

impl<T> Default for EditScript<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EditScript<T> {
    /// An empty script.
    #[must_use]
    pub const fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Appends an operation, merging it into the last run when the kinds
    /// match.
    pub fn push(&mut self, op: EditOp<T>) {
        let (kind, symbol) = op.into_parts();
        match self.runs.last_mut() {
            Some(run) if run.kind == kind => run.push(symbol),
            _ => self.runs.push(Run::new(kind, symbol)),
        }
    }

    /// The number of runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether the script has no runs.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The runs of the script.
    pub fn runs(&self) -> &[Run<T>] {
        &self.runs
    }

    /// Iterates over the runs of the script.
    pub fn iter(&self) -> core::slice::Iter<'_, Run<T>> {
        self.runs.iter()
    }

    /// The number of elementary operations in the script.
    pub fn op_count(&self) -> usize {
        self.runs.iter().map(Run::len).sum()
    }

    /// The number of elementary operations of the given kind.
    pub fn count(&self, kind: OpKind) -> usize {
        self.runs.iter().filter(|r| r.kind == kind).map(Run::len).sum()
    }

    /// Iterates over the elementary operations, borrowing their symbols.
    pub fn ops(&self) -> impl Iterator<Item = EditOp<&T>> + '_ {
        self.runs
            .iter()
            .flat_map(|r| r.symbols.iter().map(move |s| EditOp::from_parts(r.kind, s)))
    }

    /// Reverses the script: both the order of the runs and the symbols inside
    /// each run. Merging is preserved, so no run needs to be re-encoded.
    pub(crate) fn reverse(&mut self) {
        self.runs.reverse();
        self.runs.iter_mut().for_each(Run::reverse);
    }
}

impl<T: Clone> EditScript<T> {
    /// The symbols of `Copy` and `Delete` runs, in script order.
    ///
    /// For a script in forward order this is the source sequence.
    pub fn source(&self) -> Vec<T> {
        self.side(OpKind::in_source)
    }

    /// The symbols of `Copy` and `Add` runs, in script order.
    ///
    /// For a script in forward order this is the target sequence.
    pub fn target(&self) -> Vec<T> {
        self.side(OpKind::in_target)
    }

    /// Concatenates the symbols of every run whose kind is kept.
    fn side(&self, keep: fn(OpKind) -> bool) -> Vec<T> {
        self.runs
            .iter()
            .filter(|r| keep(r.kind))
            .flat_map(|r| r.symbols.iter().cloned())
            .collect()
    }
}

impl<T> FromIterator<EditOp<T>> for EditScript<T> {
    fn from_iter<I: IntoIterator<Item = EditOp<T>>>(iter: I) -> Self {
        let mut script = Self::new();
        iter.into_iter().for_each(|op| script.push(op));
        script
    }
}

impl<T> IntoIterator for EditScript<T> {
    type Item = Run<T>;
    type IntoIter = std::vec::IntoIter<Run<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a EditScript<T> {
    type Item = &'a Run<T>;
    type IntoIter = core::slice::Iter<'a, Run<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

impl<T: Display> Display for EditScript<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, run) in self.runs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{run}")?;
        }
        Ok(())
    }
}
