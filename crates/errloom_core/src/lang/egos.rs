//! Define the ego (conversational role) vocabulary.
//!
//! An ego names who is speaking at a point in a synapseware document. Two egos have a literal
//! marker that may open a tag (`<|o_o|>` for the user, `<|@_@|>` for the assistant). The system ego
//! has no marker: it is only ever synthesized by the parser in front of a document that starts
//! with plain text.
//!
//! ## Notes
//! - Lookup via [`from_marker`] is **case-sensitive** and expects the bare marker (no `:uuid` suffix).
//!
//! ## Examples
//! ```rust
//! use errloom_core::lang::egos::{self, EgoId};
//!
//! assert_eq!(egos::from_marker("@_@"), Some(EgoId::Assistant));
//! assert_eq!(egos::from_marker("x_x"), None);
//! assert_eq!(egos::as_str(EgoId::User), "user");
//! ```

use super::registry::{Example, Since, Stability};

/// Stable identifier for every conversational role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EgoId {
    System,
    User,
    Assistant,
}

/// Metadata for an ego.
#[derive(Debug, Clone, Copy)]
pub struct EgoInfo {
    pub id: EgoId,
    /// Role name as consumers (chat templates, rollouts) spell it.
    pub name: &'static str,
    /// Tag marker, if the role can be opened explicitly.
    pub marker: Option<&'static str>,
    pub description: &'static str,
    pub since: Since,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Registry of all egos.
pub const EGOS: &[EgoInfo] = &[
    EgoInfo {
        id: EgoId::System,
        name: "system",
        marker: None,
        description: "Instructions preceding the first explicit turn; synthesized, never written.",
        since: Since(0, 1),
        stability: Stability::Stable,
        examples: &[Example {
            code: "You are a compressor.\n<|o_o|>",
            note: Some("Leading text is attributed to the system role."),
        }],
    },
    EgoInfo {
        id: EgoId::User,
        name: "user",
        marker: Some("o_o"),
        description: "Opens a user turn.",
        since: Since(0, 1),
        stability: Stability::Stable,
        examples: &[Example {
            code: "<|o_o|>Compress this passage.",
            note: None,
        }],
    },
    EgoInfo {
        id: EgoId::Assistant,
        name: "assistant",
        marker: Some("@_@"),
        description: "Opens an assistant turn; with arguments it also requests a sample.",
        since: Since(0, 1),
        stability: Stability::Stable,
        examples: &[Example {
            code: "<|@_@:compress goal=compress|>",
            note: Some("Assistant turn sampled under the correlation id `compress`."),
        }],
    },
];

/// Return the role name for an ego.
pub fn as_str(id: EgoId) -> &'static str {
    info_for(id).name
}

/// Return the tag marker for an ego, if it has one.
pub fn marker(id: EgoId) -> Option<&'static str> {
    info_for(id).marker
}

/// Return the full metadata entry for an ego.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: EgoId) -> &'static EgoInfo {
    EGOS.iter().find(|e| e.id == id).expect("ego info missing")
}

/// Resolve a bare tag marker to its ego.
pub fn from_marker(s: &str) -> Option<EgoId> {
    EGOS.iter().find(|e| e.marker == Some(s)).map(|e| e.id)
}

/// Resolve a role name (`"user"`, `"assistant"`, `"system"`) to its ego.
pub fn from_name(s: &str) -> Option<EgoId> {
    EGOS.iter().find(|e| e.name == s).map(|e| e.id)
}

impl std::fmt::Display for EgoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(as_str(*self))
    }
}
