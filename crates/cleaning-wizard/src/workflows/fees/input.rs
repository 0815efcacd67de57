use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Service amount as typed into the provider form. Anything that is not a
/// finite, non-negative number reads as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AmountInput(pub f64);

/// Overtime hours as typed into the provider form, truncated to whole hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HoursInput(pub u32);

pub fn parse_amount(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().map(sanitize_amount).unwrap_or(0.0)
}

pub fn parse_hours(raw: &str) -> u32 {
    hours_from_amount(parse_amount(raw))
}

pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

pub fn hours_from_amount(value: f64) -> u32 {
    let value = sanitize_amount(value).trunc();
    if value >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        value as u32
    }
}

fn amount_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().map(sanitize_amount).unwrap_or(0.0),
        Value::String(raw) => parse_amount(raw),
        _ => 0.0,
    }
}

impl From<&Value> for AmountInput {
    fn from(value: &Value) -> Self {
        Self(amount_from_value(value))
    }
}

impl From<&Value> for HoursInput {
    fn from(value: &Value) -> Self {
        Self(hours_from_amount(amount_from_value(value)))
    }
}

impl<'de> Deserialize<'de> for AmountInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from(&value))
    }
}

impl<'de> Deserialize<'de> for HoursInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn amounts_coerce_to_non_negative_numbers() {
        assert_eq!(AmountInput::from(&json!(3000)).0, 3000.0);
        assert_eq!(AmountInput::from(&json!("2500.5")).0, 2500.5);
        assert_eq!(AmountInput::from(&json!(-40)).0, 0.0);
        assert_eq!(AmountInput::from(&json!("abc")).0, 0.0);
        assert_eq!(AmountInput::from(&json!(null)).0, 0.0);
        assert_eq!(AmountInput::from(&json!(true)).0, 0.0);
        assert_eq!(parse_amount(" NaN "), 0.0);
        assert_eq!(parse_amount(""), 0.0);
    }

    #[test]
    fn hours_truncate_toward_zero() {
        assert_eq!(HoursInput::from(&json!(2.9)).0, 2);
        assert_eq!(HoursInput::from(&json!("3.2")).0, 3);
        assert_eq!(HoursInput::from(&json!(-1.5)).0, 0);
        assert_eq!(HoursInput::from(&json!("two")).0, 0);
        assert_eq!(parse_hours("1e12"), u32::MAX);
    }

    #[test]
    fn deserializes_from_any_json_shape() {
        let amount: AmountInput = serde_json::from_str("\"1200\"").expect("string parses");
        let hours: HoursInput = serde_json::from_str("[1]").expect("array parses");
        assert_eq!(amount.0, 1200.0);
        assert_eq!(hours.0, 0);
    }
}
