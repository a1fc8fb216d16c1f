//! Catalog domain module (books and magazines).
//!
//! This crate contains the catalog item family and the lending capability,
//! implemented purely as deterministic domain logic (no IO, no storage).
//! Reports are returned as text; callers decide where they go.

pub mod item;
pub mod lendable;

pub use item::{Book, CatalogItem, ItemInfo, ItemKind, ItemOptions, LibraryItem, Magazine};
pub use lendable::Lendable;
