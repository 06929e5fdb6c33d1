//! Lokal - language switching and translation lookup for a bilingual marketing site
//!
//! Lokal loads one JSON translation file per language, resolves dotted keys
//! against the active language with a fallback language behind it, fills in
//! `{{name}}` placeholders, and remembers the chosen language in a small
//! preference file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (resolve, language switching, check)
//! - `config`: Configuration file loading and parsing
//! - `core`: Translation tables, the localizer and preference stores
//! - `issues`: Issue type definitions and reporting
//! - `logging`: Diagnostic output setup
//! - `rules`: Coverage rules comparing each language with the fallback
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod logging;
pub mod rules;
pub mod utils;
