//! Status and filing-basis classification
//!
//! The Madrid Protocol check is the branch point between domestic
//! prosecution rules and the international-registration regime.

use crate::core::models::FilingBasis;

/// Whether `basis` is the Madrid Protocol basis, 66(a)
#[must_use]
pub const fn is_madrid_protocol(basis: FilingBasis) -> bool {
    match basis {
        FilingBasis::MadridProtocol => true,
        FilingBasis::UseInCommerce
        | FilingBasis::IntentToUse
        | FilingBasis::ForeignPriority
        | FilingBasis::ForeignRegistration => false,
    }
}

/// Whether a raw registry code names the Madrid Protocol basis.
///
/// Only `66(a)` qualifies (letter case aside). Any other string, including
/// codes outside the known set, is treated as domestic.
#[must_use]
pub fn is_madrid_protocol_code(code: &str) -> bool {
    code.parse::<FilingBasis>().is_ok_and(is_madrid_protocol)
}
