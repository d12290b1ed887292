use chrono::TimeDelta;

/// Format a floating-point number with thousands separators and a fixed number
/// of decimal places.
///
/// # Examples
///
/// ```
/// use history_core::formatting::format_number;
///
/// assert_eq!(format_number(1234.5, 1), "1,234.5");
/// assert_eq!(format_number(1234567.0, 0), "1,234,567");
/// assert_eq!(format_number(0.0, 2), "0.00");
/// assert_eq!(format_number(-9876.5, 1), "-9,876.5");
/// ```
pub fn format_number(value: f64, decimals: u32) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals as usize);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    if value < 0.0 {
        result.push('-');
    }
    result.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        result.push('.');
        result.push_str(frac);
    }
    result
}

/// Format a monetary amount as a GBP string with two decimal places and
/// thousands separators.
///
/// # Examples
///
/// ```
/// use history_core::formatting::format_currency;
///
/// assert_eq!(format_currency(2.4), "£2.40");
/// assert_eq!(format_currency(1234.56), "£1,234.56");
/// assert_eq!(format_currency(-9.99), "£-9.99");
/// ```
pub fn format_currency(amount: f64) -> String {
    if amount < 0.0 {
        format!("£-{}", format_number(amount.abs(), 2))
    } else {
        format!("£{}", format_number(amount, 2))
    }
}

/// Format a duration clock-style as `H:MM:SS`.
///
/// Hours are not zero-padded and may exceed 24 for whole-history totals.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use history_core::formatting::format_clock_duration;
///
/// assert_eq!(format_clock_duration(TimeDelta::minutes(30)), "0:30:00");
/// assert_eq!(format_clock_duration(TimeDelta::minutes(1110)), "18:30:00");
/// assert_eq!(format_clock_duration(TimeDelta::hours(26)), "26:00:00");
/// ```
pub fn format_clock_duration(duration: TimeDelta) -> String {
    let total_seconds = duration.num_seconds();
    let sign = if total_seconds < 0 { "-" } else { "" };
    let total_seconds = total_seconds.abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        total_seconds / 3600,
        (total_seconds % 3600) / 60,
        total_seconds % 60
    )
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = chars.len() % 3;
    for (i, &c) in chars.iter().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ─────────────────────────────────────────────────────────────────────
