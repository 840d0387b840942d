//! Output writer for synapseware markup
//!
//! Tracks line starts and pending blank lines so the formatter only decides *what* separates two
//! items, never how many newlines are already in the buffer.

use errloom_core::lang::delimiters::{SPECIAL_ATTR, TAG_CLOSE, TAG_OPEN};
use errloom_syntax::{Kargs, Kwargs};

/// Writer that builds formatted markup
pub struct MarkupWriter {
    output: String,
    at_line_start: bool,
}

impl MarkupWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            at_line_start: true,
        }
    }

    /// Get the formatted output, ending in exactly one newline (or empty)
    pub fn finish(mut self) -> String {
        if !self.output.is_empty() && !self.at_line_start {
            self.output.push('\n');
        }
        self.output
    }

    /// Write a string as-is
    pub fn write(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.output.push_str(s);
        self.at_line_start = s.ends_with('\n');
    }

    /// End the current line (no-op at line start)
    pub fn end_line(&mut self) {
        if !self.at_line_start {
            self.output.push('\n');
            self.at_line_start = true;
        }
    }

    /// Ensure one blank line before the next item (no-op on empty output)
    pub fn blank_line(&mut self) {
        if self.output.is_empty() {
            return;
        }
        self.end_line();
        if !self.output.ends_with("\n\n") {
            self.output.push('\n');
        }
    }

    /// Write a complete tag: `<|base kargs... kwargs... <>special|>`
    ///
    /// `leading` keywords are written first in the given order, then the remaining keywords sorted
    /// by key, then the special attribute.
    pub fn tag(&mut self, base: &str, kargs: &Kargs, leading: &[(&str, &str)], kwargs: &Kwargs) {
        let mut tag = String::from(TAG_OPEN);
        tag.push_str(base);
        for karg in kargs {
            tag.push(' ');
            tag.push_str(karg);
        }
        for (key, value) in leading {
            tag.push_str(&format!(" {key}={value}"));
        }
        for (key, value) in kwargs.iter().filter(|(key, _)| key.as_str() != SPECIAL_ATTR) {
            tag.push_str(&format!(" {key}={value}"));
        }
        if let Some(special) = kwargs.get(SPECIAL_ATTR) {
            tag.push(' ');
            tag.push_str(SPECIAL_ATTR);
            tag.push_str(special);
        }
        // A trailing `<` would join the closer into `<|`.
        if tag.ends_with('<') {
            tag.push(' ');
        }
        tag.push_str(TAG_CLOSE);
        self.write(&tag);
    }
}

impl Default for MarkupWriter {
    fn default() -> Self {
        Self::new()
    }
}
