//! # mstool
//!
//! Build-time preprocessors for the media server resources.
//!
//! ## Features
//!
//! - **Renderer import**: translates legacy flat renderer profiles into the
//!   sectioned renderer config format (see [`rendconf`])
//! - **Schema embedding**: turns a SQL schema file into a string array that
//!   can be compiled into the server (see [`schema_embed`])
//!
//! ## Modules
//!
//! - [`config`] - Optional `.mstool.toml` configuration
//! - [`ctx`] - Application context
//! - [`import`] - Renderer directory import
//! - [`schema`] - Schema file embedding
//! - [`utils`] - Logging, argument and exit helpers shared by the binaries
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use mstool::ctx::AppContext;
//!
//! let ctx = AppContext::load(None).unwrap();
//! ctx.import_renderers(Path::new("pms"), Path::new("resources")).unwrap();
//! ```

/// Tool configuration loaded from TOML.
pub mod config;

/// Application context and configuration lookup.
pub mod ctx;

/// Renderer profile directory import.
pub mod import;

/// SQL schema embedding.
pub mod schema;

/// Helpers shared by the binary targets.
pub mod utils;

#[macro_use]
extern crate log;
