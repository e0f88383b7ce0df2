//! Urgency levels
//!
//! Discrete urgency buckets consumed by presentation layers.

use serde::{Deserialize, Serialize};

/// Urgency of a deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Due within the urgent window, or overdue
    Urgent,
    /// Due within the warning window
    Warning,
    /// Comfortably far out
    Normal,
    /// Already satisfied
    Completed,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Urgent => write!(f, "urgent"),
            Self::Warning => write!(f, "warning"),
            Self::Normal => write!(f, "normal"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Day counts bounding the urgent and warning buckets (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyThresholds {
    /// Days remaining at or below which a deadline is urgent
    #[serde(default = "default_urgent")]
    pub urgent_within_days: i64,
    /// Days remaining at or below which a deadline is a warning
    #[serde(default = "default_warning")]
    pub warning_within_days: i64,
}

const fn default_urgent() -> i64 {
    7
}

const fn default_warning() -> i64 {
    30
}

impl Default for UrgencyThresholds {
    fn default() -> Self {
        Self {
            urgent_within_days: default_urgent(),
            warning_within_days: default_warning(),
        }
    }
}
