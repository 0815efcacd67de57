/// Renders an amount the way the provider and payment screens show it:
/// thousands separators and at most three fraction digits.
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }

    let scaled = (amount.abs() * 1000.0).round() as u128;
    let whole = scaled / 1000;
    let fraction = scaled % 1000;

    let mut rendered = group_thousands(whole);
    if fraction > 0 {
        let digits = format!("{fraction:03}");
        rendered.push('.');
        rendered.push_str(digits.trim_end_matches('0'));
    }
    if amount < 0.0 && scaled > 0 {
        rendered.insert(0, '-');
    }
    rendered
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
