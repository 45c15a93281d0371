//! Normalizer — classifies arbitrary JSON input and derives a uniform
//! sequence of [`Observation`](crate::Observation) records.
//!
//! Shape detection is attempted in priority order, first match wins:
//!
//! 1. `null` fails immediately.
//! 2. Non-array objects are classified by their **first** entry: a numeric
//!    first value means a flat key→magnitude map; an object first value means
//!    a nested time-series-of-segments map, of which only the most recent
//!    period is kept.
//! 3. Arrays are walked element by element: numbers and numeric strings
//!    become points with sequential default labels; objects go through the
//!    value and label fallback chains.
//! 4. Anything that produced no observation fails.
//!
//! The fallback chains are static ordered sequences of accessor attempts,
//! short-circuiting on first success. Field extraction never mutates the
//! input and never coerces a missing field to zero.

use serde_json::{Map, Value};

use crate::error::FmcError;
use crate::types::Observation;

// ---------------------------------------------------------------------------
// Fallback chains
// ---------------------------------------------------------------------------

/// Candidate value fields for object elements, tried in priority order.
/// The first field that is present *and* numeric (or a numeric string) wins;
/// a present-but-unparsable field does not terminate the chain.
const VALUE_FIELDS: &[&str] = &["value", "net_income", "total_revenue", "revenue", "close"];

/// Label extraction attempts for object elements, tried in priority order.
/// Evaluated independently of the value chain.
const LABEL_CHAIN: &[fn(&Map<String, Value>) -> Option<String>] = &[
    explicit_label,
    report_period_label,
    date_label,
    fiscal_quarter_label,
    calendar_quarter_label,
    fiscal_year_label,
    calendar_year_label,
];

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Normalise an arbitrary JSON value into an ordered observation sequence.
///
/// Fails with [`FmcError::InvalidInput`] when no observation can be derived;
/// a successful result is never empty. Output order matches the order of
/// appearance in the source (array index order, or object key insertion
/// order) — no sorting is performed.
pub fn normalize(raw: &Value) -> Result<Vec<Observation>, FmcError> {
    let observations = match raw {
        Value::Null => return Err(FmcError::invalid_input("data required")),
        Value::Object(map) if !map.is_empty() => {
            let from_object = normalize_object(map);
            tracing::debug!(
                entries = map.len(),
                derived = from_object.len(),
                "normalised object input"
            );
            from_object
        }
        Value::Array(items) => {
            let from_array = normalize_array(items);
            tracing::debug!(
                elements = items.len(),
                derived = from_array.len(),
                "normalised array input"
            );
            from_array
        }
        // Scalars and the empty object have no recognised shape.
        _ => Vec::new(),
    };

    if observations.is_empty() {
        return Err(FmcError::invalid_input("no valid numeric data found"));
    }
    Ok(observations)
}

// ---------------------------------------------------------------------------
// Object shapes (rules 2a/2b)
// ---------------------------------------------------------------------------

/// Classify a non-empty, non-array object by the type of its first entry.
///
/// Known edge case: for mixed-shape objects the first entry alone decides
/// the interpretation, even when later entries differ in shape.
fn normalize_object(map: &Map<String, Value>) -> Vec<Observation> {
    let Some((_, first)) = map.iter().next() else {
        return Vec::new();
    };

    if parse_number(first).is_some() {
        // Flat key→magnitude map: segment name → revenue, and the like.
        flatten_magnitude_map(map)
    } else if first.is_object() {
        // Nested time-series-of-segments map: outer keys are periods.
        // Only the most recent period is charted; earlier periods are
        // discarded (single-snapshot limitation).
        most_recent_period(map)
            .and_then(|(period, inner)| {
                tracing::debug!(%period, "selected most recent period");
                inner.as_object()
            })
            .map(flatten_magnitude_map)
            .unwrap_or_default()
    } else {
        Vec::new()
    }
}

/// Turn every `key → numeric value` entry into a labelled observation.
/// Entries whose value fails numeric parse are dropped, not fatal.
fn flatten_magnitude_map(map: &Map<String, Value>) -> Vec<Observation> {
    map.iter()
        .filter_map(|(key, value)| {
            parse_number(value).map(|v| Observation::labelled(v, key.clone()))
        })
        .collect()
}

/// Most-recent-period-wins selection strategy for nested time-series maps:
/// the last entry in insertion order is presumed the newest.
fn most_recent_period(map: &Map<String, Value>) -> Option<(&String, &Value)> {
    map.iter().last()
}

// ---------------------------------------------------------------------------
// Array shapes (rule 3)
// ---------------------------------------------------------------------------

fn normalize_array(items: &[Value]) -> Vec<Observation> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::Number(_) | Value::String(_) => parse_number(item)
                .map(|v| Observation::labelled(v, format!("Point {}", index + 1))),
            Value::Object(obj) => observation_from_object(obj),
            _ => None,
        })
        .collect()
}

/// Derive one observation from an object element via the fallback chains.
/// Returns `None` when no recognised value field is present; an explicit
/// numeric `0` is valid and retained.
fn observation_from_object(obj: &Map<String, Value>) -> Option<Observation> {
    let value = VALUE_FIELDS
        .iter()
        .find_map(|field| obj.get(*field).and_then(parse_number))?;

    let label = LABEL_CHAIN.iter().find_map(|extract| extract(obj));

    // The raw period string is preserved verbatim so the renderer can apply
    // its own formatting.
    let date = obj
        .get("date")
        .or_else(|| obj.get("report_period"))
        .and_then(Value::as_str)
        .map(str::to_owned);

    Some(Observation {
        value,
        label,
        date,
        open: obj.get("open").and_then(parse_number),
        high: obj.get("high").and_then(parse_number),
        low: obj.get("low").and_then(parse_number),
        close: obj.get("close").and_then(parse_number),
    })
}

// ---------------------------------------------------------------------------
// Label extractors
// ---------------------------------------------------------------------------

fn explicit_label(obj: &Map<String, Value>) -> Option<String> {
    obj.get("label").and_then(Value::as_str).map(str::to_owned)
}

fn report_period_label(obj: &Map<String, Value>) -> Option<String> {
    obj.get("report_period")
        .and_then(Value::as_str)
        .map(format_date_label)
}

fn date_label(obj: &Map<String, Value>) -> Option<String> {
    obj.get("date").and_then(Value::as_str).map(format_date_label)
}

fn fiscal_quarter_label(obj: &Map<String, Value>) -> Option<String> {
    quarter_label(obj, "fiscal_year")
}

fn calendar_quarter_label(obj: &Map<String, Value>) -> Option<String> {
    quarter_label(obj, "year")
}

fn fiscal_year_label(obj: &Map<String, Value>) -> Option<String> {
    obj.get("fiscal_year").and_then(period_text)
}

fn calendar_year_label(obj: &Map<String, Value>) -> Option<String> {
    obj.get("year").and_then(period_text)
}

/// Combine a quarter with a year field as `Q{quarter} {year}`.
fn quarter_label(obj: &Map<String, Value>, year_field: &str) -> Option<String> {
    let quarter = obj.get("quarter").and_then(period_text)?;
    let year = obj.get(year_field).and_then(period_text)?;
    Some(format!("Q{quarter} {year}"))
}

/// Render a fiscal-period component (string or number) as display text.
fn period_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i.to_string()),
            None => n.as_f64().map(|f| f.to_string()),
        },
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

/// Parse a JSON value as a finite number. Numeric strings are accepted;
/// NaN and infinities are rejected rather than admitted.
fn parse_number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Format a date-like string as an abbreviated-month label ("Jan 15").
///
/// Total over arbitrary strings: on parse failure the first 10 characters of
/// the raw input are returned verbatim. Never panics.
pub fn format_date_label(raw: &str) -> String {
    let head: String = raw.chars().take(10).collect();
    match chrono::NaiveDate::parse_from_str(&head, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d").to_string(),
        Err(_) => head,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
