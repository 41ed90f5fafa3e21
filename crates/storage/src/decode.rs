//! Dynamic decoding of PostgreSQL rows into JSON cells.
//!
//! Generated SQL has no compile-time shape, so each cell is decoded by the
//! name of its PostgreSQL type. One-dimensional arrays of the supported
//! scalars decode element-wise. Anything else renders as `<TYPE>`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde_json::{Number, Value};
use sqlx::postgres::types::PgInterval;
use sqlx::postgres::{PgRow, PgValueFormat, PgValueRef};
use sqlx::{Column, Decode, Postgres, Row, Type, TypeInfo, ValueRef};

use crate::error::StorageError;

const MICROS_PER_SECOND: i64 = 1_000_000;

pub(crate) fn column_names(row: &PgRow) -> Vec<String> {
    row.columns().iter().map(|c| c.name().to_owned()).collect()
}

pub(crate) fn row_to_values(row: &PgRow) -> Result<Vec<Value>, StorageError> {
    (0..row.len()).map(|idx| decode_cell(row, idx)).collect()
}

fn decode_cell(row: &PgRow, idx: usize) -> Result<Value, StorageError> {
    let raw = row.try_get_raw(idx)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let type_name = raw.type_info().name().to_owned();
    let (base, is_array) =
        type_name.strip_suffix("[]").map_or((type_name.as_str(), false), |base| (base, true));

    let typed = match base {
        "BOOL" => typed_cell::<bool>(row, idx, is_array, Value::Bool),
        "INT2" => typed_cell::<i16>(row, idx, is_array, Value::from),
        "INT4" => typed_cell::<i32>(row, idx, is_array, Value::from),
        "INT8" => typed_cell::<i64>(row, idx, is_array, Value::from),
        "FLOAT4" => typed_cell::<f32>(row, idx, is_array, |v| float_value(f64::from(v))),
        "FLOAT8" => typed_cell::<f64>(row, idx, is_array, float_value),
        "NUMERIC" => {
            typed_cell::<Decimal>(row, idx, is_array, |d| numeric_to_json(&d.to_string()))
        },
        "TEXT" | "VARCHAR" | "CHAR" | "BPCHAR" | "NAME" => {
            typed_cell::<String>(row, idx, is_array, Value::String)
        },
        "DATE" => typed_cell::<NaiveDate>(row, idx, is_array, |v| Value::String(v.to_string())),
        "TIME" => typed_cell::<NaiveTime>(row, idx, is_array, |v| Value::String(v.to_string())),
        "TIMESTAMP" => {
            typed_cell::<NaiveDateTime>(row, idx, is_array, |v| Value::String(v.to_string()))
        },
        "TIMESTAMPTZ" => {
            typed_cell::<DateTime<Utc>>(row, idx, is_array, |v| Value::String(v.to_rfc3339()))
        },
        "INTERVAL" => {
            typed_cell::<PgInterval>(row, idx, is_array, |v| Value::String(interval_text(&v)))
        },
        "JSON" | "JSONB" => typed_cell::<Value>(row, idx, is_array, |v| v),
        "UUID" => typed_cell::<uuid::Uuid>(row, idx, is_array, |v| Value::String(v.to_string())),
        _ => return untyped_cell(&raw, row, idx, &type_name),
    };

    match typed {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::debug!(
                column = idx,
                type_name = %type_name,
                error = %e,
                "typed decode failed"
            );
            untyped_cell(&raw, row, idx, &type_name)
        },
    }
}

/// Decode a scalar, or an array of it with SQL NULL elements kept as `null`.
fn typed_cell<'r, T>(
    row: &'r PgRow,
    idx: usize,
    is_array: bool,
    to_json: fn(T) -> Value,
) -> Result<Value, sqlx::Error>
where
    T: Decode<'r, Postgres> + Type<Postgres>,
    Vec<Option<T>>: Decode<'r, Postgres> + Type<Postgres>,
{
    if is_array {
        let items: Vec<Option<T>> = row.try_get(idx)?;
        Ok(Value::Array(items.into_iter().map(|item| item.map_or(Value::Null, to_json)).collect()))
    } else {
        row.try_get::<T, _>(idx).map(to_json)
    }
}

/// Text-format values are shown as sent; binary payloads are never
/// reinterpreted as text.
fn untyped_cell(
    raw: &PgValueRef<'_>,
    row: &PgRow,
    idx: usize,
    type_name: &str,
) -> Result<Value, StorageError> {
    match raw.format() {
        PgValueFormat::Text => {
            let text = raw.as_str().map_err(|e| decode_error(row, idx, &e.to_string()))?;
            Ok(Value::String(text.to_owned()))
        },
        PgValueFormat::Binary => Ok(Value::String(format!("<{type_name}>"))),
    }
}

fn decode_error(row: &PgRow, idx: usize, message: &str) -> StorageError {
    let column = row.columns().get(idx).map_or_else(|| idx.to_string(), |c| c.name().to_owned());
    StorageError::Decode { column, message: message.to_owned() }
}

fn float_value(v: f64) -> Value {
    Number::from_f64(v).map_or_else(|| Value::String(v.to_string()), Value::Number)
}

/// JSON number when the decimal fits, string otherwise.
pub(crate) fn numeric_to_json(text: &str) -> Value {
    if !text.contains(['.', 'e', 'E']) {
        if let Ok(i) = text.parse::<i64>() {
            return Value::from(i);
        }
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => float_value(f),
        _ => Value::String(text.to_owned()),
    }
}

/// PostgreSQL-style interval text, e.g. `1 year 2 mons 3 days 04:05:06`.
pub(crate) fn interval_text(interval: &PgInterval) -> String {
    let mut parts = Vec::new();
    let years = interval.months / 12;
    let months = interval.months % 12;
    if years != 0 {
        parts.push(unit(i64::from(years), "year"));
    }
    if months != 0 {
        parts.push(unit(i64::from(months), "mon"));
    }
    if interval.days != 0 {
        parts.push(unit(i64::from(interval.days), "day"));
    }
    if interval.microseconds != 0 || parts.is_empty() {
        parts.push(clock_text(interval.microseconds));
    }
    parts.join(" ")
}

fn unit(n: i64, name: &str) -> String {
    if n.abs() == 1 { format!("{n} {name}") } else { format!("{n} {name}s") }
}

fn clock_text(micros: i64) -> String {
    let sign = if micros < 0 { "-" } else { "" };
    let total = micros.unsigned_abs();
    let per_second = MICROS_PER_SECOND.unsigned_abs();
    let secs = total / per_second;
    let frac = total % per_second;
    let mut out = format!("{sign}{:02}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60);
    if frac != 0 {
        out.push('.');
        out.push_str(format!("{frac:06}").trim_end_matches('0'));
    }
    out
}
