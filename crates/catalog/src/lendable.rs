//! Lending capability.

/// Items that can be lent out.
///
/// This is a capability, not part of [`crate::LibraryItem`]: only variants that
/// support lending implement it, so lending a magazine does not compile.
///
/// ```compile_fail
/// use libris_catalog::{Lendable, Magazine};
///
/// let magazine = Magazine::titled("Tech Today", "Technology");
/// magazine.lend();
/// ```
pub trait Lendable {
    /// Notice that the item has been lent out.
    fn lend(&self) -> String;

    /// Notice that the item has been lent out to `recipient`.
    fn lend_to(&self, recipient: &str) -> String;
}
