//! projbackup - scheduled project backups
//!
//! Archives every project directory under a root into dated artifacts on a
//! (network) destination, and commits and pushes local git working copies.
//!
//! The library holds all decision logic; the binary only parses arguments,
//! sets up logging and renders results.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod archive;
pub mod config;
pub mod discovery;
pub mod git;
pub mod logging;
pub mod models;
pub mod output;
pub mod paths;
pub mod report;
pub mod runner;
pub mod sync;
