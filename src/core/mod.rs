//! Core domain logic for markflow
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Matter, Deadline, FilingBasis, StatusCode, Urgency)
//! - `services/` - Calendar, classifier, rule engine, urgency, aggregate docket
//! - `ports/` - The clock seam supplying the evaluation date

pub mod models;
pub mod ports;
pub mod services;
