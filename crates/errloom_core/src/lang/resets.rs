//! Define the context-reset vocabulary.
//!
//! A context reset closes the conversational segment accumulated so far. Each literal marker is
//! pre-associated with a `train` flag that tells the trainer whether the closed segment contributes
//! to the loss.
//!
//! ## Examples
//! ```rust
//! use errloom_core::lang::resets::{self, ResetId};
//!
//! assert_eq!(resets::from_marker("+++"), Some(ResetId::Train));
//! assert!(!resets::train(ResetId::Frozen));
//! ```

use super::registry::{Example, Since, Stability};

/// Stable identifier for every context-reset marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetId {
    /// Reset after a trainable segment.
    Train,
    /// Reset after a segment excluded from the loss.
    Frozen,
}

/// Metadata for a context-reset marker.
#[derive(Debug, Clone, Copy)]
pub struct ResetInfo {
    pub id: ResetId,
    pub marker: &'static str,
    pub train: bool,
    pub description: &'static str,
    pub since: Since,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all context-reset markers.
pub const RESETS: &[ResetInfo] = &[
    ResetInfo {
        id: ResetId::Train,
        marker: "+++",
        train: true,
        description: "Close the current context; the closed segment is trained on.",
        since: Since(0, 1),
        stability: Stability::Stable,
        examples: &[Example {
            code: "<|@_@ goal=compress|>\n<|+++|>",
            note: None,
        }],
    },
    ResetInfo {
        id: ResetId::Frozen,
        marker: "===",
        train: false,
        description: "Close the current context without training on it.",
        since: Since(0, 1),
        stability: Stability::Stable,
        examples: &[],
    },
];

/// Return the literal marker for a reset.
pub fn marker(id: ResetId) -> &'static str {
    info_for(id).marker
}

/// Return whether the segment closed by this reset is trainable.
pub fn train(id: ResetId) -> bool {
    info_for(id).train
}

/// Return the full metadata entry for a reset.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: ResetId) -> &'static ResetInfo {
    RESETS.iter().find(|r| r.id == id).expect("reset info missing")
}

/// Resolve a literal marker to its reset. Matching is exact.
pub fn from_marker(s: &str) -> Option<ResetId> {
    RESETS.iter().find(|r| r.marker == s).map(|r| r.id)
}

/// Return the reset whose marker carries the given `train` flag.
pub fn for_train(train: bool) -> ResetId {
    if train { ResetId::Train } else { ResetId::Frozen }
}
