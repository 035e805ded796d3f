use anyhow::{bail, Result};
use colored::Colorize;
use yearbook_core::{CurrencySettings, BADGE_SLOT_PRICE, SCHOOL_YEAR_PRICE, VIEWER_YEAR_PRICE};

/// Price list rows as (label, display price)
pub fn price_rows(settings: &CurrencySettings) -> Vec<(&'static str, String)> {
    [
        ("School yearbook (per year)", SCHOOL_YEAR_PRICE),
        ("Viewer access (per year)", VIEWER_YEAR_PRICE),
        ("Alumni badge slot", BADGE_SLOT_PRICE),
    ]
    .into_iter()
    .map(|(label, usd)| (label, settings.display_price(usd)))
    .collect()
}

pub fn handle_prices(settings: &CurrencySettings) -> Result<()> {
    if !settings.exchange_rate.is_finite() || settings.exchange_rate <= 0.0 {
        bail!("Exchange rate must be positive, got {}", settings.exchange_rate);
    }

    println!("{}\n", format!("# Prices ({})", settings.currency).bold());
    for (label, price) in price_rows(settings) {
        println!("- {}: {}", label, price.green());
    }
    println!("\nRate: 1 USD = {} {}", settings.exchange_rate, yearbook_core::Currency::Ngn);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use yearbook_core::Currency;

    #[test]
    fn test_price_rows_in_usd() {
        let rows = price_rows(&CurrencySettings::default());
        assert_eq!(rows[0].1, "$16.99");
        assert_eq!(rows[1].1, "$6.99");
        assert_eq!(rows[2].1, "$0.99");
    }

    #[test]
    fn test_price_rows_in_naira() {
        let rows = price_rows(&CurrencySettings::new(Currency::Ngn, 1000.0));
        assert_eq!(rows[0].1, "₦16,990.00");
        assert_eq!(rows[2].1, "₦990.00");
    }

    #[test]
    fn test_rejects_non_positive_rate() {
        assert!(handle_prices(&CurrencySettings::new(Currency::Ngn, 0.0)).is_err());
    }
}
