//! Payment capability.

use libris_core::Amount;

/// Members that can make payments.
///
/// Paying only produces a notice attributed to the payer; no balance or ledger
/// is touched.
pub trait Payable {
    fn make_payment(&self, amount: Amount) -> String;
}
