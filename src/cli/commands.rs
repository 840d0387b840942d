//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use errloom_syntax::diagnostics::format_error;
use errloom_syntax::{ParseError, Span, SynapseWare, comments, parser};
use miette::GraphicalReportHandler;

use crate::format::{FormatConfig, format_ware, line_diff};
use crate::render;

use super::{CliError, CliResult, ExitCode};

/// Maximum accepted template size (100 MB).
pub const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// File extension of synapseware templates.
pub const TEMPLATE_EXTENSION: &str = "syn";

/// Read a template from disk.
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path.display(), e)))
}

/// Render a parse error with a source snippet, falling back to `file:line:col: message`.
pub fn render_parse_error(path: &Path, source: &str, err: &ParseError) -> String {
    let name = path.display().to_string();
    let located = err.located(&name, source);
    let mut out = String::new();
    match GraphicalReportHandler::new().render_report(&mut out, &located) {
        Ok(()) => out,
        Err(_) => format_error(&name, err),
    }
}

fn load(path: &Path) -> CliResult<(String, SynapseWare)> {
    let source = read_source(path)?;
    match parser::parse(&source) {
        Ok(ware) => Ok((source, ware)),
        Err(err) => Err(CliError::failure(render_parse_error(path, &source, &err).trim_end())),
    }
}

/// Parse a template and print its spans.
pub fn parse_file(path: &Path, json: bool) -> CliResult<ExitCode> {
    let (_, ware) = load(path)?;

    if json {
        let value = render::to_json(&ware);
        let text = serde_json::to_string_pretty(&value)
            .map_err(|e| CliError::failure(format!("Cannot serialize spans: {}", e)))?;
        println!("{}", text);
    } else {
        print!("{}", render::listing(&ware));
    }
    Ok(ExitCode::SUCCESS)
}

/// Counts reported by `check`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub spans: usize,
    pub turns: usize,
    pub samplers: usize,
    pub resets: usize,
    pub classes: usize,
    pub variables: Vec<String>,
}

impl Summary {
    pub fn of(ware: &SynapseWare) -> Self {
        let mut summary = Summary {
            spans: ware.len(),
            samplers: ware.samplers().count(),
            classes: ware.class_names().count(),
            variables: ware.var_ids().into_iter().map(str::to_string).collect(),
            ..Summary::default()
        };
        for span in ware {
            match span {
                Span::Ego(_) => summary.turns += 1,
                Span::ContextReset(_) => summary.resets += 1,
                _ => {}
            }
        }
        summary
    }
}

/// Parse a template and print a summary.
pub fn check_file(path: &Path) -> CliResult<ExitCode> {
    let (_, ware) = load(path)?;
    let summary = Summary::of(&ware);

    println!(
        "✓ {}: {} span(s), {} turn(s), {} sampler(s), {} reset(s), {} directive(s)",
        path.display(),
        summary.spans,
        summary.turns,
        summary.samplers,
        summary.resets,
        summary.classes
    );
    if !summary.variables.is_empty() {
        println!("  variables: {}", summary.variables.join(", "));
    }
    Ok(ExitCode::SUCCESS)
}

/// Print the template with comment lines blanked out.
pub fn filter_file(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    print!("{}", comments::filter_comments(&source));
    Ok(ExitCode::SUCCESS)
}

/// Print the vocabulary reference page.
pub fn print_reference() -> CliResult<ExitCode> {
    print!("{}", errloom_core::lang::reference::render_markdown());
    Ok(ExitCode::SUCCESS)
}

/// Format synapseware templates.
pub fn format_files(path: &Path, check_mode: bool, diff_mode: bool, compact: bool) -> CliResult<ExitCode> {
    let files = collect_template_files(path);

    if files.is_empty() {
        return Err(CliError::failure(format!("No .{} files found", TEMPLATE_EXTENSION)));
    }

    let config = if compact {
        FormatConfig::compact()
    } else {
        FormatConfig::default()
    };

    let mut needs_formatting = false;
    let mut formatted_count = 0;
    let mut error_count = 0;

    for file_path in &files {
        let source = match read_source(file_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{}", e);
                error_count += 1;
                continue;
            }
        };

        let ware = match parser::parse(&source) {
            Ok(ware) => ware,
            Err(err) => {
                eprintln!("{}", render_parse_error(file_path, &source, &err).trim_end());
                error_count += 1;
                continue;
            }
        };

        let formatted = format_ware(&ware, config);
        let changed = source != formatted;

        if diff_mode && changed {
            println!("--- {}", file_path.display());
            print!("{}", line_diff(&source, &formatted));
            println!();
        }

        if check_mode {
            if changed {
                println!("Would reformat: {}", file_path.display());
                needs_formatting = true;
            }
        } else if diff_mode {
            if changed {
                needs_formatting = true;
            }
        } else if changed {
            if let Err(e) = fs::write(file_path, &formatted) {
                eprintln!("Error writing {}: {}", file_path.display(), e);
                error_count += 1;
            } else {
                println!("Formatted: {}", file_path.display());
                formatted_count += 1;
            }
        }
    }

    if check_mode || diff_mode {
        if let Some(line) = check_outcome(files.len(), needs_formatting, error_count, diff_mode)? {
            println!("{}", line);
        }
    } else {
        println!("\n✓ {} file(s) formatted, {} error(s)", formatted_count, error_count);
    }

    if error_count > 0 {
        return Err(CliError::new("", ExitCode::FAILURE));
    }

    Ok(ExitCode::SUCCESS)
}

/// Closing line of a `--check` / `--diff` run.
///
/// Fails when any file needs formatting; reports success only when every file was read and parsed.
fn check_outcome(
    file_count: usize,
    needs_formatting: bool,
    error_count: usize,
    diff_mode: bool,
) -> CliResult<Option<String>> {
    if needs_formatting {
        let msg = if diff_mode {
            "need formatting"
        } else {
            "would be reformatted"
        };
        return Err(CliError::failure(format!("\n{} file(s) {}", file_count, msg)));
    }
    if error_count > 0 {
        return Ok(None);
    }
    Ok(Some(format!("✓ {} file(s) already formatted", file_count)))
}

/// Collect template files under `path`, skipping hidden directories and build output.
pub fn collect_template_files(path: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if path.is_file() {
        if path.extension().is_some_and(|ext| ext == TEMPLATE_EXTENSION) {
            files.push(path.to_path_buf());
        }
    } else if path.is_dir() {
        if let Ok(entries) = fs::read_dir(path) {
            for entry in entries.flatten() {
                let entry_path = entry.path();
                if entry_path.is_dir() {
                    let name = entry_path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                    if !name.starts_with('.') && name != "target" {
                        files.extend(collect_template_files(&entry_path));
                    }
                } else if entry_path.extension().is_some_and(|ext| ext == TEMPLATE_EXTENSION) {
                    files.push(entry_path);
                }
            }
        }
    }

    files.sort();
    files
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let ware = parser::parse("Be brief.\n<|o_o|>Hi <|name|email|>\n<|@_@ goal=reply|>\n<|+++|>\n<|o_o|><|name|>")
            .unwrap();
        let summary = Summary::of(&ware);
        assert_eq!(summary.turns, 4);
        assert_eq!(summary.samplers, 1);
        assert_eq!(summary.resets, 1);
        assert_eq!(summary.classes, 1);
        assert_eq!(summary.variables, vec!["name".to_string(), "email".to_string()]);
    }

    #[test]
    fn test_check_outcome_reports_success_only_without_errors() {
        assert_eq!(
            check_outcome(2, false, 0, false).unwrap().as_deref(),
            Some("✓ 2 file(s) already formatted")
        );
        assert_eq!(check_outcome(2, false, 1, false).unwrap(), None);
        let err = check_outcome(2, true, 0, true).unwrap_err();
        assert!(err.message.contains("need formatting"));
    }

    #[test]
    fn test_check_mode_fails_on_unparsable_file() {
        let dir = std::env::temp_dir().join(format!("errloom-fmt-check-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("broken.syn");
        fs::write(&file, "<|o_o").unwrap();

        let result = format_files(&dir, true, false, false);
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&file).unwrap(), "<|o_o");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_fmt_rewrite_stays_parsable() {
        let dir = std::env::temp_dir().join(format!("errloom-fmt-write-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("angle.syn");
        let source = "<|#\n< |>";
        fs::write(&file, source).unwrap();

        format_files(&dir, false, false, false).unwrap();
        let written = fs::read_to_string(&file).unwrap();
        assert_eq!(parser::parse(&written).unwrap(), parser::parse(source).unwrap());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_render_parse_error_mentions_tag() {
        let source = "hello <|o_o";
        let err = parser::parse(source).unwrap_err();
        let rendered = render_parse_error(Path::new("chat.syn"), source, &err);
        assert!(rendered.contains("Unterminated tag"));
    }

    #[test]
    fn test_collect_ignores_other_extensions() {
        let files = collect_template_files(Path::new("Cargo.toml"));
        assert!(files.is_empty());
    }
}
