//! Recorded ambiguities between table-cell candidates.

use std::fmt;

/// Human-readable description of one contested table cell.
///
/// Format: `<symbol name>: <left action> / <right action>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Conflict {
    message: String,
}

impl Conflict {
    pub(crate) fn new(message: String) -> Self {
        Conflict { message }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<Conflict> for String {
    fn from(conflict: Conflict) -> Self {
        conflict.message
    }
}

/// Merge conflict logs produced by independent managers.
///
/// Each log is tagged with the index of whatever it originated from (for a
/// parallel table builder, the state each worker handled). Logs are
/// concatenated in ascending origin order; entries within one log keep their
/// discovery order, as do logs sharing an origin.
pub fn merge_conflicts(logs: impl IntoIterator<Item = (usize, Vec<Conflict>)>) -> Vec<Conflict> {
    let mut logs: Vec<(usize, Vec<Conflict>)> = logs.into_iter().collect();
    logs.sort_by_key(|(origin, _)| *origin);
    logs.into_iter().flat_map(|(_, log)| log).collect()
}
