//! markflow - trademark docketing from the command line
//!
//! Computes office-action, statement-of-use, opposition and maintenance
//! deadlines on the US federal business calendar, and reports the urgency of
//! a docket file's deadlines.

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

mod cli;
mod commands;

/// Main entry point for the markflow CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
