use serde::{Deserialize, Serialize};

use libris_core::{Amount, ValueObject};

/// A processed payment of some amount.
///
/// Not tied to any invoice or payer; [`Payment::make_payment`] only reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    amount: Amount,
}

impl Payment {
    pub fn new(amount: impl Into<Amount>) -> Self {
        Self {
            amount: amount.into(),
        }
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn make_payment(&self) -> String {
        format!("Payment of {} has been processed.", self.amount)
    }
}

impl ValueObject for Payment {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Invoice;
    use proptest::prelude::*;

    #[test]
    fn make_payment_reports_amount() {
        assert_eq!(
            Payment::new(100.0).make_payment(),
            "Payment of $100.0 has been processed."
        );
    }

    #[test]
    fn default_payment_is_zero() {
        let payment = Payment::default();
        assert_eq!(payment.amount(), Amount::ZERO);
        assert_eq!(payment.make_payment(), "Payment of $0.0 has been processed.");
    }

    #[test]
    fn payments_compare_by_value() {
        assert_eq!(Payment::new(12.5), Payment::new(Amount::new(12.5)));
        assert_ne!(Payment::new(12.5), Payment::new(12.0));
    }

    #[test]
    fn payment_is_independent_of_invoices() {
        let before = Payment::new(100.0).make_payment();
        let _invoice = Invoice::new(1, 250.0);
        let after = Payment::new(100.0).make_payment();
        assert_eq!(before, after);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the report always carries the stored amount.
        #[test]
        fn report_contains_amount(value in -1_000_000.0f64..1_000_000.0f64) {
            let payment = Payment::new(value);
            let report = payment.make_payment();
            let expected = format!("Payment of {} has", Amount::new(value));
            prop_assert!(report.starts_with(&expected));
        }
    }
}
