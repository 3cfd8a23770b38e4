//! # Fixed-Point Balances
//!
//! Coin amounts carried as `U256` base units at 18 decimal places. Decimal
//! strings decode exactly (up to 18 fractional digits) and re-encode to a
//! canonical form with the full 18-digit fraction, so a decode/encode cycle
//! never changes the numeric value.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::TypeError;

/// Number of decimal places in one coin.
pub const DECIMALS: u32 = 18;

/// A coin amount in base units (1 coin = 10^18 base units).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Balance(U256);

fn one_coin() -> U256 {
    U256::from(10u64).pow(U256::from(DECIMALS))
}

impl Balance {
    /// Zero coins.
    pub const ZERO: Balance = Balance(U256([0u64; 4]));

    /// Wrap a raw base-unit amount.
    pub fn from_base_units(units: U256) -> Self {
        Self(units)
    }

    /// Get the raw base-unit amount.
    pub fn base_units(&self) -> U256 {
        self.0
    }

    /// A whole number of coins.
    pub fn from_coins(coins: u64) -> Self {
        Self(U256::from(coins) * one_coin())
    }

    /// Parse a decimal string (`"21000000"`, `"123.456"`, `".5"`).
    ///
    /// Fails with [`TypeError::InvalidAmount`] on malformed input, more than
    /// 18 fractional digits, or integer-part overflow.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let invalid = || TypeError::InvalidAmount(s.to_string());

        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if frac_part.contains('.') || frac_part.len() > DECIMALS as usize {
            return Err(invalid());
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let int_units = if int_part.is_empty() {
            U256::zero()
        } else {
            U256::from_dec_str(int_part)
                .map_err(|_| invalid())?
                .checked_mul(one_coin())
                .ok_or_else(invalid)?
        };

        let frac_units = if frac_part.is_empty() {
            U256::zero()
        } else {
            let scale = U256::from(10u64).pow(U256::from(DECIMALS as usize - frac_part.len()));
            U256::from_dec_str(frac_part).map_err(|_| invalid())? * scale
        };

        let total = int_units.checked_add(frac_units).ok_or_else(invalid)?;
        Ok(Self(total))
    }
}

impl Add for Balance {
    type Output = Balance;

    fn add(self, rhs: Balance) -> Balance {
        Balance(self.0 + rhs.0)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coins = self.0 / one_coin();
        let frac = self.0 % one_coin();
        write!(f, "{}.{:0>18}", coins, frac.to_string())
    }
}

impl FromStr for Balance {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Balance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Balance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
