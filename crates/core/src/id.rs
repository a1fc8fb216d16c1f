//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are plain integers. Omitted identifiers default to `0`;
//! uniqueness is left to whoever assigns them.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Identifier of a catalog item.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i32);

/// Identifier of a library member.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(i32);

/// Identifier of an invoice.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(i32);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            pub const fn get(&self) -> i32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i32> for $t {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> DomainResult<Self> {
                let value = s
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_int_newtype!(ItemId, "ItemId");
impl_int_newtype!(MemberId, "MemberId");
impl_int_newtype!(InvoiceId, "InvoiceId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_ids_default_to_zero() {
        assert_eq!(ItemId::default().get(), 0);
        assert_eq!(MemberId::default().get(), 0);
        assert_eq!(InvoiceId::default().get(), 0);
    }

    #[test]
    fn display_is_the_bare_integer() {
        assert_eq!(MemberId::new(101).to_string(), "101");
        assert_eq!(ItemId::new(-4).to_string(), "-4");
    }

    #[test]
    fn parse_accepts_surrounding_whitespace() {
        assert_eq!(" 42 ".parse::<InvoiceId>().unwrap(), InvoiceId::new(42));
    }

    #[test]
    fn parse_rejects_non_integers_and_names_the_type() {
        let err = "abc".parse::<ItemId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("ItemId:")),
            _ => panic!("Expected InvalidId error"),
        }

        assert!("1.5".parse::<MemberId>().is_err());
    }
}
