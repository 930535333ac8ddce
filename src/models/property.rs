//! Property record and its fixed-point price.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

// == Price ==
/// Non-negative amount with two fractional digits, stored as whole cents.
///
/// Accepts at most ten significant digits (`99999999.99`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(u64);

impl Price {
    pub const MAX_CENTS: u64 = 9_999_999_999;

    pub fn from_cents(cents: u64) -> Option<Self> {
        (cents <= Self::MAX_CENTS).then_some(Self(cents))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Lossy view used only for the JSON wire format.
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid price '{0}': expected a non-negative amount with at most 2 decimal places and 10 digits")]
pub struct ParsePriceError(String);

impl FromStr for Price {
    type Err = ParsePriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePriceError(s.to_string());
        let trimmed = s.trim();
        let (whole, frac) = match trimmed.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (trimmed, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || frac.len() > 2 || !all_digits(whole) || !all_digits(frac) {
            return Err(err());
        }
        if trimmed.ends_with('.') {
            return Err(err());
        }

        let whole: u64 = whole.parse().map_err(|_| err())?;
        let frac_cents: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>().map_err(|_| err())? * 10,
            _ => frac.parse().map_err(|_| err())?,
        };

        whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .and_then(Price::from_cents)
            .ok_or_else(err)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PriceVisitor;

        impl<'de> de::Visitor<'de> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a non-negative decimal number or string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
                v.checked_mul(100)
                    .and_then(Price::from_cents)
                    .ok_or_else(|| E::custom(ParsePriceError(v.to_string())))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
                u64::try_from(v)
                    .map_err(|_| E::custom(ParsePriceError(v.to_string())))
                    .and_then(|v| self.visit_u64(v))
            }

            // f64 Display is the shortest string that round-trips, so the
            // decimal digits the sender wrote are recovered exactly.
            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
                if !v.is_finite() {
                    return Err(E::custom(ParsePriceError(v.to_string())));
                }
                v.to_string().parse().map_err(E::custom)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}

// == Property ==
/// A persisted listing. `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ${}", self.title, self.price)
    }
}
