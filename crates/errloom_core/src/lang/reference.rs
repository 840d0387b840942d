//! Render the vocabulary registries as a Markdown reference.
//!
//! The output lists every ego, context-reset marker and delimiter with its metadata, followed by
//! the registered examples. `errloom lang` prints it; the page is derived from the tables in this
//! crate and should not be edited by hand.
//!
//! ## Examples
//! ```rust
//! let page = errloom_core::lang::reference::render_markdown();
//! assert!(page.starts_with("# Synapseware reference"));
//! assert!(page.contains("| User | `o_o` |"));
//! ```

use super::delimiters::{self, DelimiterScope};
use super::egos;
use super::registry::Example;
use super::resets;

fn trim_trailing_newlines_to_at_most_two(out: &mut String) {
    let mut count = 0usize;
    for ch in out.chars().rev() {
        if ch == '\n' {
            count += 1;
        } else {
            break;
        }
    }
    while count > 2 {
        out.pop();
        count -= 1;
    }
}

fn ensure_single_blank_line(out: &mut String) {
    trim_trailing_newlines_to_at_most_two(out);
    if out.is_empty() || out.ends_with("\n\n") {
        return;
    }
    if out.ends_with('\n') {
        out.push('\n');
    } else {
        out.push_str("\n\n");
    }
}

fn start_section(out: &mut String, heading: &str) {
    ensure_single_blank_line(out);
    out.push_str(heading);
    out.push_str("\n\n");
}

/// Render the full reference page.
pub fn render_markdown() -> String {
    let mut out = String::new();
    out.push_str("# Synapseware reference\n\n");
    out.push_str("Generated from the `errloom_core::lang` registries. Do not edit by hand.\n\n");

    out.push_str("## Contents\n\n");
    out.push_str("- [Egos](#egos)\n");
    out.push_str("- [Context resets](#context-resets)\n");
    out.push_str("- [Delimiters](#delimiters)\n\n");

    render_egos_section(&mut out);
    render_resets_section(&mut out);
    render_delimiters_section(&mut out);

    trim_trailing_newlines_to_at_most_two(&mut out);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn render_egos_section(out: &mut String) {
    start_section(out, "## Egos");

    out.push_str("| Id | Marker | Name | Description | Since | Stability |\n");
    out.push_str("|---|---|---|---|---|---|\n");
    for e in egos::EGOS {
        let marker = e.marker.map(|m| format!("`{m}`")).unwrap_or_else(|| "(implicit)".to_string());
        out.push_str(&format!(
            "| {:?} | {} | {} | {} | {} | {} |\n",
            e.id,
            marker,
            e.name,
            e.description,
            e.since,
            e.stability.as_str()
        ));
    }
    out.push('\n');

    for e in egos::EGOS {
        render_examples(out, &format!("{:?}", e.id), e.examples);
    }
}

fn render_resets_section(out: &mut String) {
    start_section(out, "## Context resets");

    out.push_str("| Id | Marker | Train | Description | Since | Stability |\n");
    out.push_str("|---|---|---|---|---|---|\n");
    for r in resets::RESETS {
        out.push_str(&format!(
            "| {:?} | `{}` | {} | {} | {} | {} |\n",
            r.id,
            r.marker,
            r.train,
            r.description,
            r.since,
            r.stability.as_str()
        ));
    }
    out.push('\n');

    for r in resets::RESETS {
        render_examples(out, &format!("{:?}", r.id), r.examples);
    }
}

fn render_delimiters_section(out: &mut String) {
    start_section(out, "## Delimiters");

    out.push_str("| Id | Spelling | Recognized | Since | Stability |\n");
    out.push_str("|---|---|---|---|---|\n");
    for d in delimiters::DELIMITERS {
        let scope = match delimiters::scope(d.id) {
            DelimiterScope::Document => "anywhere",
            DelimiterScope::LineStart => "at line start",
            DelimiterScope::Tag => "inside a tag",
        };
        // `|` inside a table cell must be escaped.
        let spelling = d.canonical.replace('|', "\\|");
        out.push_str(&format!(
            "| {:?} | `{}` | {} | {} | {} |\n",
            d.id,
            spelling,
            scope,
            d.since,
            d.stability.as_str()
        ));
    }
}

fn render_examples(out: &mut String, heading: &str, examples: &[Example]) {
    if examples.is_empty() {
        return;
    }
    out.push_str(&format!("### `{heading}`\n\n"));
    for ex in examples {
        out.push_str("```synapseware\n");
        out.push_str(ex.code);
        out.push_str("\n```\n\n");
        if let Some(note) = ex.note {
            out.push_str(note);
            out.push_str("\n\n");
        }
    }
}
