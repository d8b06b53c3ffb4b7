//! Form and query value parsing
//!
//! Browsers send every field as text, including cleared ones (`name=`).
//! These deserializers are shared by the dashboard form and the JSON API
//! queries so both accept the same inputs: blank means absent, and numbers
//! outside the target type are kept wide enough to be clamped later
//! instead of being rejected.

use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

/// A cleared field arrives as `name=`; treat it like a missing one
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match trimmed(deserializer)? {
        None => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Parse a count as `i64`, saturating anything wider
///
/// `-5` stays `-5`, `1e12` and `99999999999999999999` saturate to
/// `i64::MAX`, and fractional values round to the nearest whole number.
/// NaN is treated as absent. Text that is not a number at all is an error.
pub fn whole_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(s) = trimmed(deserializer)? else {
        return Ok(None);
    };

    if let Ok(value) = s.parse::<i64>() {
        return Ok(Some(value));
    }

    match s.parse::<f64>() {
        Ok(value) if value.is_nan() => Ok(None),
        // `as` saturates at the i64 limits
        Ok(value) => Ok(Some(value.round() as i64)),
        Err(_) => Err(serde::de::Error::custom(format!("invalid number: {}", s))),
    }
}

fn trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "whole_number")]
        count: Option<i64>,
        #[serde(default, deserialize_with = "blank_as_none")]
        liters: Option<f64>,
    }

    fn parse(query: &str) -> Result<Fields, serde_json::Error> {
        // Query strings deserialize every value as text, like this JSON.
        let pairs: serde_json::Map<String, serde_json::Value> = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        serde_json::from_value(serde_json::Value::Object(pairs))
    }

    #[test]
    fn test_blank_is_absent() {
        let fields = parse("count=&liters=  ").unwrap();
        assert_eq!(fields.count, None);
        assert_eq!(fields.liters, None);

        let fields = parse("").unwrap();
        assert_eq!(fields.count, None);
    }

    #[test]
    fn test_whole_number_keeps_sign_and_saturates() {
        assert_eq!(parse("count=-5").unwrap().count, Some(-5));
        assert_eq!(parse("count=99999999999").unwrap().count, Some(99_999_999_999));
        assert_eq!(
            parse("count=99999999999999999999999").unwrap().count,
            Some(i64::MAX)
        );
        assert_eq!(parse("count=2000.6").unwrap().count, Some(2001));
        assert_eq!(parse("count=NaN").unwrap().count, None);
    }

    #[test]
    fn test_non_numbers_rejected() {
        assert!(parse("count=lots").is_err());
        assert!(parse("liters=plenty").is_err());
    }

    #[test]
    fn test_liters_keep_precision() {
        assert_eq!(parse("liters=1.96").unwrap().liters, Some(1.96));
        assert_eq!(parse("liters=-2").unwrap().liters, Some(-2.0));
    }
}
