//! Aidlint core library.
//!
//! This crate exposes programmatic APIs for scanning a single Dockerfile
//! against a fixed catalogue of AI/ML best-practice rules.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `document`: One-shot loader for the scan target.
//! - `error`: Error kinds for the scan pipeline.
//! - `lint`: Catalogue-ordered rule evaluation.
//! - `models`: Data models for findings and report output.
//! - `output`: Human/JSON printers.
//! - `rules`: The rule catalogue and its predicates.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod lint;
pub mod models;
pub mod output;
pub mod rules;
pub mod utils;
