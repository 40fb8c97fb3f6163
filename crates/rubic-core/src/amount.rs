//! # Amounts and Fixed-Point Rates
//!
//! Token and native amounts are unsigned 128-bit integers in the asset's
//! smallest unit. Fee rates and shares are parts-per-million against
//! [`DENOMINATOR`]: a rate of `60_000` is 6%.
//!
//! All rate application floors. Callers that must conserve value compute
//! one side with [`Ppm::apply`] and the other side by subtraction, so the
//! floor remainder is never dropped.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Amount of an asset in its smallest unit.
pub type Amount = u128;

/// Fixed-point scale for every rate and share: 1,000,000 = 100.0000%.
pub const DENOMINATOR: u32 = 1_000_000;

/// Compute `floor(a * num / den)` without overflowing the intermediate
/// product.
///
/// Splits `a = q * den + r` so the result is `q * num + floor(r * num / den)`.
/// Returns `None` when `den` is zero or the result itself does not fit.
pub fn mul_div_floor(a: Amount, num: Amount, den: Amount) -> Option<Amount> {
    if den == 0 {
        return None;
    }
    let q = a / den;
    let r = a % den;
    let high = q.checked_mul(num)?;
    let low = r.checked_mul(num)? / den;
    high.checked_add(low)
}

/// A rate or share expressed in parts per million.
///
/// The type itself does not cap the value at [`DENOMINATOR`]; the setters
/// that store rates validate against the applicable ceiling and report a
/// typed error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Ppm(u32);

impl Ppm {
    /// 0%.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const FULL: Self = Self(DENOMINATOR);

    /// Wrap a raw parts-per-million value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The raw parts-per-million value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Whether this rate exceeds 100%.
    pub fn exceeds_denominator(self) -> bool {
        self.0 > DENOMINATOR
    }

    /// `floor(amount * self / DENOMINATOR)`.
    pub fn apply(self, amount: Amount) -> Option<Amount> {
        mul_div_floor(amount, Amount::from(self.0), Amount::from(DENOMINATOR))
    }
}

impl From<u32> for Ppm {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Ppm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Four fractional digits of a percent: 1 ppm = 0.0001%.
        write!(f, "{}.{:04}%", self.0 / 10_000, self.0 % 10_000)
    }
}

/// Serde adapter that writes amounts as decimal strings.
///
/// JSON numbers cannot carry the full `u128` range portably, and digests
/// must not depend on how a reader formats large numbers. Reading accepts
/// either a decimal string or a plain integer.
pub mod serde_amount {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Amount;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Text(String),
        Int(u64),
    }

    /// Serialize an amount as a decimal string.
    pub fn serialize<S: Serializer>(value: &Amount, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    /// Deserialize an amount from a decimal string or an integer.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Amount, D::Error> {
        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
            Repr::Int(n) => Ok(Amount::from(n)),
        }
    }
}
