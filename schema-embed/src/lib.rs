//! # schema-embed
//!
//! Turns a SQL schema file into a named array of string literals that can be
//! compiled into a program.
//!
//! The input is split on `;` first and each piece is cleaned afterwards:
//! `--` comments are removed and whitespace runs collapse to one space. A
//! `;` inside a comment therefore still ends a statement.
//!
//! ## Quick Start
//!
//! ```rust
//! use schema_embed::{ArrayStyle, render};
//!
//! let out = render("create.sql", "CREATE TABLE t (id INT); -- done\n", ArrayStyle::C);
//! assert_eq!(out, "static const char* create_sql[] = {\n\t\"CREATE TABLE t (id INT)\",\n};\n");
//! ```

#[macro_use]
extern crate log;

use std::{
    fmt::Write as _,
    fs, io,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, EmbedError>;

/// Errors raised while embedding a schema file.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("could not open {} for reading", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not open {} for writing", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Target syntax of the generated array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayStyle {
    /// `static const char* name[] = { ... };`
    #[default]
    C,
    /// `pub static NAME: &[&str] = &[ ... ];`
    Rust,
}

// `--` up to and including the newline. A comment on the last line of a
// statement without a newline is kept.
static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--.*\n").expect("valid regex"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n\r\x0B\x0C]+").expect("valid regex"));

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[._]+").expect("valid regex"));

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// Derives the array identifier from a file path.
///
/// Keeps ASCII alphanumerics, `.` and `_` of the base name, then collapses
/// every run of `.`/`_` into one `_`.
pub fn safe_name(path: impl AsRef<Path>) -> String {
    let base = path
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let kept: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_'))
        .collect();

    SEPARATOR_RUN.replace_all(&kept, "_").into_owned()
}

/// Escapes backslashes and double quotes for a string literal.
pub fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Splits the schema text into cleaned statements.
///
/// Segments that are blank, or that become empty after cleaning, are
/// skipped.
pub fn statements(text: &str) -> Vec<String> {
    text.split(';')
        .filter(|segment| !segment.trim_matches(is_space).is_empty())
        .filter_map(clean_statement)
        .collect()
}

/// Cleans one `;`-delimited segment.
///
/// Removes carriage returns and newline-terminated `--` comments, then
/// collapses whitespace. Returns `None` when nothing is left.
pub fn clean_statement(segment: &str) -> Option<String> {
    let text = segment.replace('\r', "");
    let text = LINE_COMMENT.replace_all(&text, "\n");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = text.trim_matches(is_space);

    if text.is_empty() {
        None
    } else {
        Some(text.to_owned())
    }
}

/// Renders the generated array for the file `name` with contents `text`.
pub fn render(name: impl AsRef<Path>, text: &str, style: ArrayStyle) -> String {
    render_statements(&safe_name(name), &statements(text), style)
}

/// Renders already cleaned statements as an array named `ident`.
pub fn render_statements(ident: &str, statements: &[String], style: ArrayStyle) -> String {
    let mut out = String::new();
    match style {
        ArrayStyle::C => {
            let _ = write!(out, "static const char* {ident}[] = {{");
        }
        ArrayStyle::Rust => {
            let _ = write!(out, "pub static {}: &[&str] = &[", rust_ident(ident));
        }
    }

    for statement in statements {
        let _ = write!(out, "\n\t\"{}\",", escape(statement));
    }

    match style {
        ArrayStyle::C => out.push_str("\n};\n"),
        ArrayStyle::Rust => out.push_str("\n];\n"),
    }
    out
}

/// Upper-cases `ident` into a Rust static name.
///
/// Names that are empty, a bare `_` or start with a digit get a `SCHEMA`
/// prefix so the result is always a valid identifier.
pub fn rust_ident(ident: &str) -> String {
    let upper = ident.to_ascii_uppercase();
    match upper.chars().next() {
        None => "SCHEMA".to_string(),
        Some(c) if c.is_ascii_digit() || upper == "_" => format!("SCHEMA_{upper}"),
        Some(_) => upper,
    }
}

/// Reads `input`, renders it and writes the result to `output`.
///
/// Returns the number of statements written.
///
/// # Errors
///
/// Returns [`EmbedError::Read`] or [`EmbedError::Write`] naming the path.
pub fn embed_file(input: &Path, output: &Path, style: ArrayStyle) -> Result<usize> {
    let data = fs::read(input).map_err(|source| EmbedError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&data);

    let ident = safe_name(input);
    let statements = statements(&text);
    debug!("{ident}: {} statements", statements.len());

    fs::write(output, render_statements(&ident, &statements, style)).map_err(|source| {
        EmbedError::Write {
            path: output.to_path_buf(),
            source,
        }
    })?;

    Ok(statements.len())
}
