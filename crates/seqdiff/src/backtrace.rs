//! Reconstruction of the edit script from a filled alignment table.

use crate::{
    ops::{EditOp, EditScript},
    AlignmentTable,
};

/// Walks the table back from the terminal cell to the origin, emitting one
/// edit operation per step.
///
/// At each cell `(i, j)`:
///
/// * if the current target symbol `target[i - 1]` and source symbol
///   `source[j - 1]` are equal, the symbol is copied and both indices step
///   back;
/// * once the target is exhausted (`i == 0`) the remaining source symbols are
///   deleted, and once the source is exhausted (`j == 0`) the remaining
///   target symbols are added, without consulting the table;
/// * otherwise the cell above, `(i - 1, j)`, and the cell to the left,
///   `(i, j - 1)`, are compared. A strictly larger upper cell adds the target
///   symbol; anything else deletes the source symbol, so ties prefer
///   `Delete`.
///
/// Operations are run-length encoded as they are discovered, so the script
/// reads from the end of both sequences to their start. The common
/// subsequence is returned from start to end.
///
/// Lookups go through `AlignmentTable::get`, so a table that does not match
/// the sequences cannot cause an out-of-bounds read; it only yields a
/// different (still complete) script.
///
/// # Arguments
///
/// * `table` - The table computed for `source` and `target`.
/// * `source` - The sequence along the columns of the table.
/// * `target` - The sequence along the rows of the table.
///
/// # Returns
///
/// The edit script in discovery order and the common subsequence.
pub fn trace_back<T: PartialEq + Clone>(table: &AlignmentTable, source: &[T], target: &[T]) -> (EditScript<T>, Vec<T>) {
    let (mut i, mut j) = (target.len(), source.len());
    let mut script = EditScript::new();
    let mut common = Vec::new();

    loop {
        let y = i.checked_sub(1).and_then(|r| target.get(r));
        let x = j.checked_sub(1).and_then(|c| source.get(c));

        match (x, y) {
            (None, None) => break,
            (Some(x), Some(y)) if x == y => {
                script.push(EditOp::Copy(x.clone()));
                common.push(x.clone());
                i -= 1;
                j -= 1;
            }
            (Some(x), None) => {
                script.push(EditOp::Delete(x.clone()));
                j -= 1;
            }
            (None, Some(y)) => {
                script.push(EditOp::Add(y.clone()));
                i -= 1;
            }
            (Some(x), Some(y)) => {
                let up = table.get(i - 1, j);
                let left = table.get(i, j - 1);
                if up > left {
                    script.push(EditOp::Add(y.clone()));
                    i -= 1;
                } else {
                    script.push(EditOp::Delete(x.clone()));
                    j -= 1;
                }
            }
        }
    }

    common.reverse();

    (script, common)
}
