//! Shareable metadata for `errloom_core::lang` registries.
//!
//! Every registry in `errloom_core::lang` is a `const` table of small `Copy` records. This submodule
//! provides the dependency-free metadata types reused across those tables.
//!
//! ## Notes
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules lives in the parser.

/// Identify the errloom version a vocabulary item is available since, as `(major, minor)`.
///
/// ## Examples
/// ```rust
/// use errloom_core::lang::registry::Since;
///
/// let since = Since(0, 1);
/// assert_eq!(since.to_string(), "0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since(pub u16, pub u16);

impl std::fmt::Display for Since {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.0, self.1)
    }
}

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Notes
/// - This is intended for docs/tooling (e.g. to warn on deprecated spellings), not for
///   feature-gating by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

impl Stability {
    /// Lowercase label used in generated reference pages.
    pub fn as_str(self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::Draft => "draft",
            Stability::Deprecated => "deprecated",
        }
    }
}

/// Represent a small example snippet for documentation.
///
/// ## Notes
/// - `code` is the example body, in synapseware syntax.
/// - `note` is an optional short explanation.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stability_labels() {
        assert_eq!(Stability::Stable.as_str(), "stable");
        assert_eq!(Stability::Draft.as_str(), "draft");
        assert_eq!(Stability::Deprecated.as_str(), "deprecated");
    }
}
