use rust_decimal::Decimal;

/// Money with its currency code, or a dash when there is none.
pub fn format_money(amount: Option<Decimal>, currency: Option<&str>) -> String {
    match (amount, currency) {
        (Some(amount), Some(currency)) => format!("{amount:.2} {currency}"),
        (Some(amount), None) => format!("{amount:.2}"),
        (None, _) => "—".to_string(),
    }
}

pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("—").to_string()
}
