//! Billing domain module (invoices and payments).
//!
//! Invoices and payments are standalone records: a payment is not applied to
//! an invoice, and neither refers to a member or a catalog item.

pub mod invoice;
pub mod payment;

pub use invoice::{Invoice, InvoiceOptions};
pub use payment::Payment;
