//! Temporal setters
//!
//! All three types accept epoch milliseconds, as a JSON number or an
//! all-digit string, and ISO-8601 text. Zoned text is normalized to UTC
//! before the date or time component is taken. TIMESTAMP additionally
//! accepts the space-separated `yyyy-MM-dd HH:mm:ss[.fff]` form.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;
use sqlbind_types::LogicalType;

use crate::error::{BindError, Result};
use crate::setter::{TypeSetter, integral_i64, mismatch};
use crate::slot::{ParamAddress, json_kind};
use crate::statement::{NativeValue, Statement};

fn datetime_from_millis(millis: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}

/// Parse the ISO-8601 datetime forms shared by all three types
fn parse_iso_datetime(text: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// Parse the TIMESTAMP text forms, epoch digits first
///
/// Only TIMESTAMP takes the space-separated fallback pattern.
fn parse_datetime_text(text: &str) -> Option<NaiveDateTime> {
    if let Ok(millis) = text.parse::<i64>() {
        return datetime_from_millis(millis);
    }
    if let Some(dt) = parse_iso_datetime(text) {
        return Some(dt);
    }
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f").ok()
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if let Ok(millis) = text.parse::<i64>() {
        return datetime_from_millis(millis).map(|dt| dt.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    parse_iso_datetime(text).map(|dt| dt.date())
}

fn parse_time_text(text: &str) -> Option<NaiveTime> {
    if let Ok(millis) = text.parse::<i64>() {
        return datetime_from_millis(millis).map(|dt| dt.time());
    }
    if let Ok(time) = NaiveTime::parse_from_str(text, "%H:%M:%S%.f") {
        return Some(time);
    }
    if let Ok(time) = NaiveTime::parse_from_str(text, "%H:%M") {
        return Some(time);
    }
    parse_iso_datetime(text).map(|dt| dt.time())
}

fn date_parse(expected: LogicalType, address: &ParamAddress, text: &str) -> BindError {
    BindError::DateParse {
        expected,
        address: address.clone(),
        text: text.to_owned(),
    }
}

/// Setter for `DATE`
#[derive(Debug, Default, Clone, Copy)]
pub struct DateSetter;

impl TypeSetter for DateSetter {
    fn claims(&self, ty: LogicalType) -> bool {
        matches!(ty, LogicalType::Date)
    }

    fn bind(
        &self,
        ty: LogicalType,
        address: &ParamAddress,
        value: &Value,
        stmt: &mut dyn Statement,
    ) -> Result<()> {
        stmt.bind(address, coerce_date(ty, address, value)?)
    }
}

fn coerce_date(ty: LogicalType, address: &ParamAddress, value: &Value) -> Result<NativeValue> {
    match value {
        Value::Number(n) => integral_i64(n)
            .and_then(datetime_from_millis)
            .map(|dt| NativeValue::Date(dt.date()))
            .ok_or_else(|| {
                mismatch(ty, address, format!("{} is not an epoch millisecond value", n))
            }),
        Value::String(s) => parse_date_text(s)
            .map(NativeValue::Date)
            .ok_or_else(|| date_parse(ty, address, s)),
        other => Err(mismatch(
            ty,
            address,
            format!("expected epoch milliseconds or date text, got {}", json_kind(other)),
        )),
    }
}

/// Setter for `TIME`
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeSetter;

impl TypeSetter for TimeSetter {
    fn claims(&self, ty: LogicalType) -> bool {
        matches!(ty, LogicalType::Time)
    }

    fn bind(
        &self,
        ty: LogicalType,
        address: &ParamAddress,
        value: &Value,
        stmt: &mut dyn Statement,
    ) -> Result<()> {
        stmt.bind(address, coerce_time(ty, address, value)?)
    }
}

fn coerce_time(ty: LogicalType, address: &ParamAddress, value: &Value) -> Result<NativeValue> {
    match value {
        Value::Number(n) => integral_i64(n)
            .and_then(datetime_from_millis)
            .map(|dt| NativeValue::Time(dt.time()))
            .ok_or_else(|| {
                mismatch(ty, address, format!("{} is not an epoch millisecond value", n))
            }),
        Value::String(s) => parse_time_text(s)
            .map(NativeValue::Time)
            .ok_or_else(|| date_parse(ty, address, s)),
        other => Err(mismatch(
            ty,
            address,
            format!("expected epoch milliseconds or time text, got {}", json_kind(other)),
        )),
    }
}

/// Setter for `TIMESTAMP`
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampSetter;

impl TypeSetter for TimestampSetter {
    fn claims(&self, ty: LogicalType) -> bool {
        matches!(ty, LogicalType::Timestamp)
    }

    fn bind(
        &self,
        ty: LogicalType,
        address: &ParamAddress,
        value: &Value,
        stmt: &mut dyn Statement,
    ) -> Result<()> {
        stmt.bind(address, coerce_timestamp(ty, address, value)?)
    }
}

fn coerce_timestamp(ty: LogicalType, address: &ParamAddress, value: &Value) -> Result<NativeValue> {
    match value {
        Value::Number(n) => integral_i64(n)
            .and_then(datetime_from_millis)
            .map(NativeValue::Timestamp)
            .ok_or_else(|| {
                mismatch(ty, address, format!("{} is not an epoch millisecond value", n))
            }),
        Value::String(s) => parse_datetime_text(s)
            .map(NativeValue::Timestamp)
            .ok_or_else(|| date_parse(ty, address, s)),
        other => Err(mismatch(
            ty,
            address,
            format!("expected epoch milliseconds or datetime text, got {}", json_kind(other)),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // 2018-05-22T21:00:00Z
    const MAY_22_MILLIS: i64 = 1_527_022_800_000;

    fn at(position: usize) -> ParamAddress {
        ParamAddress::Position(position)
    }

    fn may_22() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 5, 22).unwrap()
    }

    #[test]
    fn test_timestamp_from_epoch_and_iso_agree() {
        let from_millis =
            coerce_timestamp(LogicalType::Timestamp, &at(1), &json!(MAY_22_MILLIS)).unwrap();
        let from_iso = coerce_timestamp(
            LogicalType::Timestamp,
            &at(1),
            &json!("2018-05-22T21:00:00.000Z"),
        )
        .unwrap();

        assert_eq!(from_millis, from_iso);
        assert_eq!(
            from_millis,
            NativeValue::Timestamp(may_22().and_hms_opt(21, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_timestamp_normalizes_zoned_text_to_utc() {
        let v = coerce_timestamp(
            LogicalType::Timestamp,
            &at(1),
            &json!("2018-05-22T23:00:00+02:00"),
        )
        .unwrap();
        assert_eq!(
            v,
            NativeValue::Timestamp(may_22().and_hms_opt(21, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_timestamp_space_separated_fallback() {
        let v = coerce_timestamp(
            LogicalType::Timestamp,
            &at(1),
            &json!("2018-05-22 21:00:00.123"),
        )
        .unwrap();
        assert_eq!(
            v,
            NativeValue::Timestamp(may_22().and_hms_milli_opt(21, 0, 0, 123).unwrap())
        );

        let v =
            coerce_timestamp(LogicalType::Timestamp, &at(1), &json!("2018-05-22 21:00:00"))
                .unwrap();
        assert_eq!(
            v,
            NativeValue::Timestamp(may_22().and_hms_opt(21, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_date_from_epoch_digits_text_and_datetime() {
        let expected = NativeValue::Date(may_22());

        assert_eq!(
            coerce_date(LogicalType::Date, &at(1), &json!(MAY_22_MILLIS)).unwrap(),
            expected
        );
        assert_eq!(
            coerce_date(LogicalType::Date, &at(1), &json!("1527022800000")).unwrap(),
            expected
        );
        assert_eq!(
            coerce_date(LogicalType::Date, &at(1), &json!("2018-05-22")).unwrap(),
            expected
        );
        assert_eq!(
            coerce_date(LogicalType::Date, &at(1), &json!("2018-05-22T21:00:00.000Z")).unwrap(),
            expected
        );
    }

    #[test]
    fn test_time_accepts_clock_text() {
        let expected = NativeValue::Time(NaiveTime::from_hms_opt(21, 35, 9).unwrap());

        assert_eq!(
            coerce_time(LogicalType::Time, &at(1), &json!("21:35:09")).unwrap(),
            expected
        );
        assert_eq!(
            coerce_time(LogicalType::Time, &at(1), &json!("21:35")).unwrap(),
            NativeValue::Time(NaiveTime::from_hms_opt(21, 35, 0).unwrap())
        );
        assert_eq!(
            coerce_time(LogicalType::Time, &at(1), &json!(MAY_22_MILLIS)).unwrap(),
            NativeValue::Time(NaiveTime::from_hms_opt(21, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_date_and_time_reject_the_space_form() {
        let err =
            coerce_date(LogicalType::Date, &at(1), &json!("2018-05-22 21:00:00")).unwrap_err();
        assert!(matches!(err, BindError::DateParse { .. }));

        let err =
            coerce_time(LogicalType::Time, &at(1), &json!("2018-05-22 21:00:00")).unwrap_err();
        assert!(matches!(err, BindError::DateParse { .. }));
    }

    #[test]
    fn test_unparseable_text_reports_date_parse() {
        let err =
            coerce_timestamp(LogicalType::Timestamp, &at(2), &json!("yesterday")).unwrap_err();
        assert!(matches!(
            err,
            BindError::DateParse {
                expected: LogicalType::Timestamp,
                text,
                ..
            } if text == "yesterday"
        ));

        assert!(coerce_date(LogicalType::Date, &at(1), &json!("22/05/2018")).is_err());
        assert!(coerce_time(LogicalType::Time, &at(1), &json!(true)).is_err());
    }
}
