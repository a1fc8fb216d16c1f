use serde::{Deserialize, Serialize};

use libris_core::{Amount, Entity, InvoiceId};

/// Optional construction fields for an invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvoiceOptions {
    /// Defaults to `0` when omitted.
    pub invoice_id: Option<InvoiceId>,
}

/// An invoice for a fixed amount. No totals, taxes or payment tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    invoice_id: InvoiceId,
    amount: Amount,
}

impl Invoice {
    pub fn new(invoice_id: impl Into<InvoiceId>, amount: impl Into<Amount>) -> Self {
        Self::with_options(
            amount,
            InvoiceOptions {
                invoice_id: Some(invoice_id.into()),
            },
        )
    }

    /// Invoice without an assigned id (id 0).
    pub fn for_amount(amount: impl Into<Amount>) -> Self {
        Self::with_options(amount, InvoiceOptions::default())
    }

    pub fn with_options(amount: impl Into<Amount>, options: InvoiceOptions) -> Self {
        Self {
            invoice_id: options.invoice_id.unwrap_or_default(),
            amount: amount.into(),
        }
    }

    pub fn invoice_id(&self) -> InvoiceId {
        self.invoice_id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn print_invoice(&self) -> String {
        format!("Invoice ID: {}, Amount: {}", self.invoice_id, self.amount)
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.invoice_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_reports_id_and_amount() {
        let invoice = Invoice::new(1, 100.0);
        assert_eq!(invoice.print_invoice(), "Invoice ID: 1, Amount: $100.0");
    }

    #[test]
    fn for_amount_defaults_id_to_zero() {
        let invoice = Invoice::for_amount(42.5);
        assert_eq!(invoice.invoice_id(), InvoiceId::new(0));
        assert_eq!(*invoice.id(), InvoiceId::default());
        assert_eq!(invoice.amount(), Amount::new(42.5));
        assert_eq!(invoice.print_invoice(), "Invoice ID: 0, Amount: $42.5");
    }

    #[test]
    fn amounts_are_not_validated() {
        let invoice = Invoice::new(7, -15.0);
        assert_eq!(invoice.amount().value(), -15.0);
        assert!(invoice.print_invoice().contains("$-15.0"));
    }
}
