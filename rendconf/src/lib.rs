//! # rendconf - Renderer Profile Translator
//!
//! Converts legacy flat renderer profiles (`key = value` lines) into the
//! sectioned renderer config format used by the media server resources.
//!
//! ## Features
//!
//! - Fixed legacy-key to `Section/Field` mapping table
//! - `Supported` line classification into video, audio and image formats
//! - Order-preserving sections and entries, duplicates kept
//! - Byte-for-byte deterministic output
//!
//! ## Quick Start
//!
//! ```rust
//! use rendconf::translate_str;
//!
//! let input = "RendererName = TV\nSupported = f:mp4 m:video/mp4\n";
//! let doc = translate_str(input).unwrap();
//!
//! assert_eq!(
//!     doc.to_string(),
//!     "[General]\nName = TV\n\n[Video formats]\nFormat0 = f:mp4 m:video/mp4\n\n"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`document`] - Sectioned output document
//! - [`error`] - Error types and result definitions
//! - [`fields`] - Legacy key mapping table
//! - [`supported`] - `Supported` line parsing and classification
//! - [`translate`] - Per-file translation

#[macro_use]
extern crate log;

/// Sectioned output document.
pub mod document;

/// Error types and result definitions for translation.
pub mod error;

/// Legacy key to `Section/Field` mapping table.
pub mod fields;

/// `Supported` line parsing and media classification.
pub mod supported;

/// Per-file translation.
pub mod translate;

pub use document::{Document, Entry, Section};
pub use error::{Result, TranslateError};
pub use fields::{FIELD_MAP, FieldMapping, lookup};
pub use supported::{MediaKind, SupportedLine};
pub use translate::{Translator, translate_file, translate_str};

/// Key of the specially parsed format lines.
pub const SUPPORTED_KEY: &str = "Supported";
