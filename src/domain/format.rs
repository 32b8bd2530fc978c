// Text helpers shared by every front end that renders products.

fn currency_symbol(currency_id: &str) -> &str {
    match currency_id {
        "BRL" => "R$",
        "USD" => "US$",
        "EUR" => "€",
        other => other,
    }
}

/// Formats an amount the way pt-BR renders currency: `R$ 1.234,56`.
pub fn format_price(amount: f64, currency_id: &str) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();

    let digits = (cents / 100).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!(
        "{}{} {},{:02}",
        sign,
        currency_symbol(currency_id),
        grouped,
        cents % 100
    )
}

/// `"new"` -> `"New"`.
pub fn capitalize_condition(condition: &str) -> String {
    let mut chars = condition.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
