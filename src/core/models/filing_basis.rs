//! Filing basis codes
//!
//! The statutory basis an application was filed under. The Madrid Protocol
//! basis selects a separate response-timing regime.

use serde::{Deserialize, Serialize};

/// Statutory filing basis of a trademark application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingBasis {
    /// Section 1(a): mark already in use in commerce
    #[serde(rename = "1(a)")]
    UseInCommerce,
    /// Section 1(b): bona fide intent to use
    #[serde(rename = "1(b)")]
    IntentToUse,
    /// Section 44(d): priority claim from a foreign application
    #[serde(rename = "44(d)")]
    ForeignPriority,
    /// Section 44(e): based on a foreign registration
    #[serde(rename = "44(e)")]
    ForeignRegistration,
    /// Section 66(a): extension of protection of an international registration
    #[serde(rename = "66(a)")]
    MadridProtocol,
}

impl FilingBasis {
    /// All filing bases in statutory order
    pub const ALL: [Self; 5] = [
        Self::UseInCommerce,
        Self::IntentToUse,
        Self::ForeignPriority,
        Self::ForeignRegistration,
        Self::MadridProtocol,
    ];

    /// The registry code, e.g. `66(a)`
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UseInCommerce => "1(a)",
            Self::IntentToUse => "1(b)",
            Self::ForeignPriority => "44(d)",
            Self::ForeignRegistration => "44(e)",
            Self::MadridProtocol => "66(a)",
        }
    }

    /// Short human label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UseInCommerce => "Use in Commerce",
            Self::IntentToUse => "Intent to Use",
            Self::ForeignPriority => "Foreign Priority",
            Self::ForeignRegistration => "Foreign Registration",
            Self::MadridProtocol => "Madrid Protocol",
        }
    }

    /// One-line description of the basis
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::UseInCommerce => "Currently using the mark",
            Self::IntentToUse => "Bona fide intent to use",
            Self::ForeignPriority => "Based on foreign application",
            Self::ForeignRegistration => "Based on foreign registration",
            Self::MadridProtocol => "International registration via WIPO",
        }
    }
}

impl std::fmt::Display for FilingBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for FilingBasis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|basis| basis.code() == normalized).ok_or_else(|| {
            format!("Invalid filing basis: {s}. Use: 1(a), 1(b), 44(d), 44(e), 66(a)")
        })
    }
}
