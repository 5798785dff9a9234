//! Display formatting helpers for the storefront UI.

use jiff::civil::Date;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a minor-unit amount into a currency string.
pub fn format_price(minor_units: i64, currency_code: &str) -> String {
    let abs_minor = minor_units.unsigned_abs();
    let major_units = abs_minor / 100;
    let fractional = abs_minor % 100;
    let sign = if minor_units < 0 { "-" } else { "" };
    let symbol = match currency_code {
        "USD" => "$",
        "GBP" => "£",
        "EUR" => "€",
        _ => "",
    };

    if symbol.is_empty() {
        format!("{sign}{major_units}.{fractional:02} {currency_code}")
    } else {
        format!("{sign}{symbol}{major_units}.{fractional:02}")
    }
}

/// Format a date the way the storefront displays it, e.g. `November 15, 2024`.
pub fn format_date(date: Date) -> String {
    let month_index = usize::try_from(date.month()).ok().map_or(0, |month| month.saturating_sub(1));
    let month = MONTHS.get(month_index).copied().unwrap_or("");

    format!("{month} {}, {}", date.day(), date.year())
}

/// Pluralized item count, e.g. `1 item` / `3 items`.
pub fn item_count_label(count: u32) -> String {
    let noun = if count == 1 { "item" } else { "items" };

    format!("{count} {noun}")
}
