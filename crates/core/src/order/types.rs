//! Types for the lifting-order engine.

use serde::Serialize;

use crate::meet::Entry;

/// Derived "who lifts next" snapshot.
///
/// `current_entry_id` is either `None` (no valid lifter remains, e.g. every
/// attempt has been entered) or refers to an entry present in
/// `ordered_entries`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiftingOrder {
    /// Pending entries in selection order, followed by finished entries.
    pub ordered_entries: Vec<Entry>,
    pub current_entry_id: Option<u32>,
    pub current_attempt_one_indexed: Option<u32>,
    pub next_entry_id: Option<u32>,
    pub next_attempt_one_indexed: Option<u32>,
}

impl LiftingOrder {
    /// The entry currently on the platform, if any.
    pub fn current_entry(&self) -> Option<&Entry> {
        self.current_entry_id
            .and_then(|id| self.ordered_entries.iter().find(|entry| entry.id == id))
    }
}
