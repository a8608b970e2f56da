//! Display currencies supported by the directory.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currencies the directory can render fees in.
///
/// Source fee amounts are canonically stored in Indonesian Rupiah; the
/// only conversion the backend supplies a rate for is IDR→USD, so these
/// two are the only display currencies offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// US Dollar — the default display currency.
    Usd,
    /// Indonesian Rupiah — the base (storage) currency.
    Idr,
}

/// The currency source fee amounts are stored in.
pub const BASE_CURRENCY: Currency = Currency::Idr;

impl Currency {
    /// ISO 4217 code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Idr => "IDR",
        }
    }

    /// Display symbol. USD deliberately uses "US$" rather than a bare "$"
    /// so it cannot be confused with other dollar currencies on a page
    /// that mixes them.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "US$",
            Currency::Idr => "Rp",
        }
    }

    /// Returns true for the base (storage) currency.
    pub fn is_base(&self) -> bool {
        *self == BASE_CURRENCY
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for Currency {
    type Err = String;

    /// Parse an ISO code, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "IDR" => Ok(Currency::Idr),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
