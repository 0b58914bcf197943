//! Bannerdoc - banner comment extractor
//!
//! Bannerdoc collects `/*! ... */` banner comments from CSS, SCSS and
//! JavaScript sources and writes them to Markdown, either as one combined
//! document or one document per source file. With import-following on, the
//! `@import` chain of a stylesheet is folded into the combined document.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, console output, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (walk, extract, plan, render, follow imports)
//! - `error`: Usage error types

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
