//! markflow - trademark docketing engine
//!
//! Derives prosecution and maintenance deadlines for trademark matters from
//! statutory timing rules, rolls them onto US federal business days, and
//! classifies their urgency.
//!
//! The rule engine lives in [`core`] and is pure: every computation takes the
//! evaluation date explicitly. [`parser`] and [`docket`] form the text
//! boundary; [`output`] renders results.

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

pub mod config;
pub mod core;
pub mod docket;
pub mod output;
pub mod parser;
pub mod paths;
