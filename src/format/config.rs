//! Formatter configuration

/// Configuration for canonical synapseware formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatConfig {
    /// Put a blank line before every turn (ego tag) except the first item
    pub blank_line_between_turns: bool,
    /// Put every tag and every text block on its own line
    pub tags_on_own_line: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            blank_line_between_turns: true,
            tags_on_own_line: true,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether turns are separated by a blank line
    pub fn with_blank_line_between_turns(mut self, enabled: bool) -> Self {
        self.blank_line_between_turns = enabled;
        self
    }

    /// Set whether tags are placed on their own lines
    pub fn with_tags_on_own_line(mut self, enabled: bool) -> Self {
        self.tags_on_own_line = enabled;
        self
    }

    /// Compact layout: tags and text run together, no blank lines
    pub fn compact() -> Self {
        Self {
            blank_line_between_turns: false,
            tags_on_own_line: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert!(config.blank_line_between_turns);
        assert!(config.tags_on_own_line);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(FormatConfig::new(), FormatConfig::default());
    }

    #[test]
    fn test_builder_chain() {
        let config = FormatConfig::new()
            .with_blank_line_between_turns(false)
            .with_tags_on_own_line(false);
        assert_eq!(config, FormatConfig::compact());
    }
}
