//! Display helpers shared by the UI cards, CLI and chat summaries

use chrono::NaiveDate;

/// Whole-dollar currency with thousands separators: `$1,235`, `-$40`
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".to_string();
    }

    let dollars = amount.round() as i64;
    let digits = dollars.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if dollars < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Decimal fraction as a percentage with two decimals: `0.1999` -> `19.99%`
pub fn format_percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

/// Month and year: `March 2027`
pub fn format_payoff_date(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Month count as `2 years 3 months`, `11 months`, `1 year`
pub fn format_duration(months: u32) -> String {
    let years = months / 12;
    let rest = months % 12;
    let plural = |n: u32, unit: &str| {
        if n == 1 {
            format!("1 {}", unit)
        } else {
            format!("{} {}s", n, unit)
        }
    };

    match (years, rest) {
        (0, m) => plural(m, "month"),
        (y, 0) => plural(y, "year"),
        (y, m) => format!("{} {}", plural(y, "year"), plural(m, "month")),
    }
}
