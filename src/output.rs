//! CLI output formatting.
//!
//! After a build the CLI prints what went into each column, any config
//! warnings, and where the document was written:
//!
//! ```text
//! Config: cv/config.yaml (language: en)
//! Resume: cv/resume.json
//!
//! First column
//! 001 work
//! 002 new-page
//! 003 education
//!
//! Second column
//! 001 technical-skills
//! 002 languages
//!
//! Warnings
//!     composition.first-column: unknown section 'experiance' will be skipped
//!
//! Wrote cv/en/main.tex (8412 bytes)
//! ```
//!
//! `format_*` functions return lines and do no I/O; `print_*` wrappers write
//! them to stdout.

use crate::builder::Build;
use crate::section::Block;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn format_column(title: &str, blocks: &[Block]) -> Vec<String> {
    let mut lines = vec![title.to_string()];
    if blocks.is_empty() {
        lines.push("    (empty)".to_string());
    }
    for (i, block) in blocks.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), block));
    }
    lines
}

/// Format the summary of a finished build.
pub fn format_build_output(build: &Build) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Config: {} (language: {})",
            build.config_path.display(),
            build.config.language
        ),
        format!("Resume: {}", build.config.json_resume_path.display()),
        String::new(),
    ];

    lines.extend(format_column("First column", &build.document.left));
    lines.push(String::new());
    lines.extend(format_column("Second column", &build.document.right));

    if !build.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for warning in &build.warnings {
            lines.push(format!("    {warning}"));
        }
    }
    lines
}

pub fn format_written(path: &Path, bytes: usize) -> String {
    format!("Wrote {} ({} bytes)", path.display(), bytes)
}

pub fn print_build_output(build: &Build) {
    for line in format_build_output(build) {
        println!("{}", line);
    }
}

pub fn print_written(path: &Path, bytes: usize) {
    println!();
    println!("{}", format_written(path, bytes));
}
