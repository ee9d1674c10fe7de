use serde::{Deserialize, Serialize};
use std::fmt;

/// Display currency of a tenant.
///
/// There is no conversion: prices are shown in whatever unit the tenant
/// publishes them in, only the symbol changes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    /// Somali shilling. Used for every code other than `USD`.
    #[default]
    Shilling,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Usd => write!(f, "USD"),
            Currency::Shilling => write!(f, "SHL"),
        }
    }
}

impl Currency {
    pub fn from_code(code: &str) -> Self {
        if code.trim().eq_ignore_ascii_case("USD") {
            Currency::Usd
        } else {
            Currency::Shilling
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Shilling => "SHL",
        }
    }
}

/// Format a price with two decimals and the currency symbol, e.g. `$12.50`.
pub fn format_price(amount: f64, currency: &Currency) -> String {
    format!("{}{amount:.2}", currency.symbol())
}
