//! Currency conversion and display formatting.
//!
//! Source amounts are stored in the base currency (IDR). Conversion is a
//! pure projection for one target currency; the base amount is never
//! mutated. When no live rate is available a fixed fallback rate applies —
//! a roughly-correct price beats no price.

use schooldir_model::Currency;

/// Fallback base→USD rate used when no live rate is supplied.
pub const FALLBACK_USD_RATE: f64 = 15_500.0;

/// Convert a base-currency amount to whole US dollars.
///
/// Divides by the supplied rate, or the fallback rate when absent or
/// non-positive, and rounds to the nearest integer.
pub fn convert_base_to_usd(amount_base: i64, rate: Option<f64>) -> i64 {
    let rate = rate.filter(|r| *r > 0.0).unwrap_or(FALLBACK_USD_RATE);
    (amount_base as f64 / rate).round() as i64
}

/// Render an amount in the given currency with zero fractional digits.
///
/// Compact mode applies to USD only: amounts of 1000 or more render as
/// `US$<n>K`, where n is the integer-thousands (truncated, not rounded).
/// Everything else renders as a grouped integer behind the currency
/// symbol; USD uses "US$" rather than a bare "$" so mixed-currency pages
/// stay unambiguous.
pub fn format_amount(amount: i64, currency: Currency, compact: bool) -> String {
    if compact && currency == Currency::Usd && amount >= 1000 {
        return format!("US${}K", amount / 1000);
    }
    format!("{}{}", currency.symbol(), group_thousands(amount))
}

/// Display form of a base-currency fee range.
///
/// The base currency is special-cased: bounds render directly in millions
/// of base units with no conversion. The only other supported currency is
/// USD: both bounds are converted and joined compactly, under the USD
/// symbol. Targets without a conversion rate are not representable in
/// `Currency`, so a converted range can never carry the wrong symbol.
pub fn fee_range_display(
    low_base: i64,
    high_base: i64,
    currency: Currency,
    rate: Option<f64>,
) -> String {
    if currency.is_base() {
        let low = group_thousands(low_base / 1_000_000);
        let high = group_thousands(high_base / 1_000_000);
        return format!("{sym}{low}M – {sym}{high}M", sym = currency.symbol());
    }
    let low = format_amount(convert_base_to_usd(low_base, rate), currency, true);
    let high = format_amount(convert_base_to_usd(high_base, rate), currency, true);
    format!("{low} – {high}")
}

/// Groups an integer with comma thousands separators.
fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    let leading = digits.len() % 3;
    for (index, ch) in digits.chars().enumerate() {
        if index != 0 && index % 3 == leading % 3 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
