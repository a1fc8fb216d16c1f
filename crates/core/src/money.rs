//! Monetary amounts.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A monetary amount in currency units (dollars).
///
/// Amounts are stored exactly as given: negative, NaN and infinite values are
/// not rejected.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    pub const ZERO: Amount = Amount(0.0);

    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl ValueObject for Amount {}

/// Renders as `$` followed by the value with a decimal point, e.g. `$75.0`.
///
/// Very large or very small values keep exponent form but still carry a
/// mantissa with a decimal point: `$1.0e16`, `$1.0e-7`.
impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let rendered = format!("{:?}", self.0);
        if !self.0.is_finite() || rendered.contains('.') {
            return write!(f, "${rendered}");
        }
        match rendered.split_once('e') {
            Some((mantissa, exponent)) => write!(f, "${mantissa}.0e{exponent}"),
            None => write!(f, "${rendered}.0"),
        }
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Amount> for f64 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl FromStr for Amount {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed);
        let value = digits
            .parse::<f64>()
            .map_err(|e| DomainError::validation(format!("amount {trimmed:?}: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn display_keeps_the_decimal_point() {
        assert_eq!(Amount::new(100.0).to_string(), "$100.0");
        assert_eq!(Amount::new(75.0).to_string(), "$75.0");
        assert_eq!(Amount::new(12.5).to_string(), "$12.5");
        assert_eq!(Amount::default().to_string(), "$0.0");
    }

    #[test]
    fn exponent_form_keeps_the_decimal_point() {
        assert_eq!(Amount::new(1e16).to_string(), "$1.0e16");
        assert_eq!(Amount::new(1.5e20).to_string(), "$1.5e20");
        assert_eq!(Amount::new(1e-7).to_string(), "$1.0e-7");
        assert_eq!("$1.0e16".parse::<Amount>().unwrap(), Amount::new(1e16));
        assert_eq!("$1.0e-7".parse::<Amount>().unwrap(), Amount::new(1e-7));
    }

    #[test]
    fn non_finite_amounts_render_as_is() {
        assert_eq!(Amount::new(f64::INFINITY).to_string(), "$inf");
        assert_eq!(Amount::new(f64::NAN).to_string(), "$NaN");
    }

    #[test]
    fn negative_amounts_are_accepted() {
        let amount = Amount::new(-20.0);
        assert_eq!(amount.value(), -20.0);
        assert_eq!(amount.to_string(), "$-20.0");
    }

    #[test]
    fn parse_accepts_optional_dollar_sign() {
        assert_eq!("$50.0".parse::<Amount>().unwrap(), Amount::new(50.0));
        assert_eq!("50".parse::<Amount>().unwrap(), Amount::new(50.0));
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = "fifty".parse::<Amount>().unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("fifty")),
            _ => panic!("Expected Validation error"),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: finite amounts render with a leading `$` and a decimal point
        /// and parse back to the same value.
        #[test]
        fn display_is_consistent(value in any::<f64>()) {
            prop_assume!(value.is_finite());
            let rendered = Amount::new(value).to_string();
            prop_assert!(rendered.starts_with('$'));
            prop_assert!(rendered.contains('.'));
            prop_assert_eq!(rendered.parse::<Amount>().unwrap(), Amount::new(value));
        }
    }
}
