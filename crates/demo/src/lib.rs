//! Demo assembly: builds a small sample library and exercises it.
//!
//! Only the public contracts of the domain crates are used here; every line
//! of output comes from an entity operation.

use libris_billing::{Invoice, Payment};
use libris_catalog::{Book, CatalogItem, LibraryItem, Magazine};
use libris_core::{Amount, Entity};
use libris_members::{LibraryMember, Member, StaffMember, StudentMember};

/// The sample catalog: one book, one magazine.
pub fn sample_catalog() -> Vec<CatalogItem> {
    vec![
        Book::new("Java Programming", "John Doe", 1, 300).into(),
        Magazine::new("Tech Today", "Jane Doe", 2, "Technology").into(),
    ]
}

/// The sample members, each with the amount they pay during the demo.
pub fn sample_members() -> Vec<(Member, Amount)> {
    vec![
        (
            StudentMember::new("Alice", 101, "Computer Science").into(),
            Amount::new(50.0),
        ),
        (StaffMember::new("Bob", 102, "HR").into(), Amount::new(75.0)),
    ]
}

/// Run the demo and return every report line in order.
pub fn run() -> Vec<String> {
    let catalog = sample_catalog();
    let members = sample_members();
    let mut lines = Vec::new();

    for item in &catalog {
        tracing::info!(item_id = %item.id(), kind = %item.kind(), "displaying item");
        lines.push(item.display_details());
    }

    for (member, _) in &members {
        tracing::info!(member_id = %member.id(), "borrowing");
        lines.push(member.borrow_item());
    }

    for (member, amount) in &members {
        tracing::info!(member_id = %member.id(), amount = amount.value(), "paying");
        lines.push(member.as_payable().make_payment(*amount));
    }

    for (member, _) in &members {
        lines.push(match member {
            Member::Student(student) => student.display_student_details(),
            Member::Staff(staff) => staff.display_staff_details(),
        });
    }

    let invoice = Invoice::new(1, 100.0);
    let payment = Payment::new(100.0);
    tracing::info!(invoice_id = %invoice.invoice_id(), "billing");
    lines.push(invoice.print_invoice());
    lines.push(payment.make_payment());

    if let Some((borrower, _)) = members.first() {
        for lendable in catalog.iter().filter_map(CatalogItem::as_lendable) {
            tracing::debug!(borrower = borrower.name(), "lending");
            lines.push(lendable.lend_to(borrower.name()));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_holds_one_lendable_item() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.iter().filter(|item| item.as_lendable().is_some()).count(),
            1
        );
    }

    #[test]
    fn sample_members_pay_their_demo_amounts() {
        let amounts: Vec<f64> = sample_members().iter().map(|(_, a)| a.value()).collect();
        assert_eq!(amounts, vec![50.0, 75.0]);
    }
}
