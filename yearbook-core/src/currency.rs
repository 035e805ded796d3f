//! Display-currency handling for prices.
//!
//! Prices are stored in USD. The display currency and the USD→NGN rate are
//! supplied once at start-up through [`CurrencySettings`] and handed to
//! whatever renders a price.

use std::fmt;
use std::str::FromStr;

/// Yearly access to a school's yearbook, in USD
pub const SCHOOL_YEAR_PRICE: f64 = 16.99;
/// Yearly viewer access, in USD
pub const VIEWER_YEAR_PRICE: f64 = 6.99;
/// One alumni badge slot, in USD
pub const BADGE_SLOT_PRICE: f64 = 0.99;

/// Fallback USD→NGN rate used when no live rate is configured
pub const DEFAULT_EXCHANGE_RATE: f64 = 1650.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    Usd,
    Ngn,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Ngn => "NGN",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Ngn => "₦",
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "NGN" => Ok(Currency::Ngn),
            other => Err(format!("Unsupported currency '{}' (expected USD or NGN)", other)),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Selected display currency plus the rate used to reach it from USD
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencySettings {
    pub currency: Currency,
    pub exchange_rate: f64,
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self {
            currency: Currency::Usd,
            exchange_rate: DEFAULT_EXCHANGE_RATE,
        }
    }
}

impl CurrencySettings {
    pub fn new(currency: Currency, exchange_rate: f64) -> Self {
        Self {
            currency,
            exchange_rate,
        }
    }

    /// Convert a USD amount into the display currency
    pub fn convert_price(&self, usd_amount: f64) -> f64 {
        match self.currency {
            Currency::Ngn => usd_amount * self.exchange_rate,
            Currency::Usd => usd_amount,
        }
    }

    /// Format an amount already expressed in `currency` (or the display currency)
    pub fn format_price(&self, amount: f64, currency: Option<Currency>) -> String {
        format_amount(amount, currency.unwrap_or(self.currency))
    }

    /// Convert then format a USD amount in the display currency
    pub fn display_price(&self, usd_amount: f64) -> String {
        self.format_price(self.convert_price(usd_amount), None)
    }
}

/// `$16.99` for USD, `₦28,033.50` for NGN
pub fn format_amount(amount: f64, currency: Currency) -> String {
    match currency {
        Currency::Usd => format!("{}{:.2}", currency.symbol(), amount),
        Currency::Ngn => format!("{}{}", currency.symbol(), group_thousands(amount)),
    }
}

fn group_thousands(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_is_passed_through() {
        let settings = CurrencySettings::default();
        assert_eq!(settings.convert_price(SCHOOL_YEAR_PRICE), SCHOOL_YEAR_PRICE);
        assert_eq!(settings.display_price(SCHOOL_YEAR_PRICE), "$16.99");
    }

    #[test]
    fn test_ngn_conversion_and_grouping() {
        let settings = CurrencySettings::new(Currency::Ngn, 1650.0);
        assert_eq!(settings.display_price(SCHOOL_YEAR_PRICE), "₦28,033.50");
        assert_eq!(settings.display_price(BADGE_SLOT_PRICE), "₦1,633.50");
        assert_eq!(settings.display_price(0.1), "₦165.00");
    }

    #[test]
    fn test_explicit_currency_overrides_display_currency() {
        let settings = CurrencySettings::new(Currency::Ngn, 1650.0);
        assert_eq!(settings.format_price(6.99, Some(Currency::Usd)), "$6.99");
        assert_eq!(format_amount(1234567.891, Currency::Ngn), "₦1,234,567.89");
    }

    #[test]
    fn test_currency_parsing() {
        assert_eq!("ngn".parse::<Currency>().unwrap(), Currency::Ngn);
        assert_eq!(" USD ".parse::<Currency>().unwrap(), Currency::Usd);
        assert!("EUR".parse::<Currency>().is_err());
        assert_eq!(Currency::Ngn.to_string(), "NGN");
    }
}
