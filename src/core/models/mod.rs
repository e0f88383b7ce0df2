//! Domain models for markflow
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Matter`] - A trademark application or registration
//! - [`Deadline`] - A due-date obligation on a matter
//! - [`FilingBasis`] - Statutory basis, including Madrid Protocol
//! - [`StatusCode`] - Registry prosecution status
//! - [`Urgency`] - Presentation urgency bucket
//! - [`Computation`] - Computed / not applicable / missing prerequisite

mod computation;
mod deadline;
mod filing_basis;
mod matter;
mod status_code;
mod urgency;

pub use computation::{Computation, Prerequisite};
pub use deadline::{Deadline, DeadlineStatus, DeadlineType};
pub use filing_basis::FilingBasis;
pub use matter::{Matter, MatterError};
pub use status_code::{StatusCategory, StatusCode};
pub use urgency::{Urgency, UrgencyThresholds};
