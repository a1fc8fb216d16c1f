//! `libris-core` — shared domain primitives for the library model.
//!
//! This crate contains **pure domain** building blocks (no IO): typed
//! identifiers, the money value, and the error model.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{InvoiceId, ItemId, MemberId};
pub use money::Amount;
pub use value_object::ValueObject;
