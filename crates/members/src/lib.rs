//! Members domain module (students and staff).
//!
//! This crate contains the member family and the payment capability,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod member;
pub mod payable;

pub use member::{
    LibraryMember, Member, MemberInfo, MemberKind, MemberOptions, StaffMember, StudentMember,
};
pub use payable::Payable;
