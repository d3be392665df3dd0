//! Thousands separators

/// `1234567` → `"1,234,567"`
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Two decimals with grouped integer part: `1234.5` → `"1,234.50"`
pub fn group_thousands_f64(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    match fixed.split_once('.') {
        Some((int, frac)) => format!("{}.{}", group_digits(int), frac),
        None => group_digits(&fixed),
    }
}

fn group_digits(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}", sign, grouped)
}
