//! Parse-with-default coercion for document values.
//!
//! The persisted format is read permissively: numbers may arrive as JSON
//! numbers or numeric strings, and anything unparseable falls back to the
//! caller-supplied default. Coercion never fails and never raises.

use serde_json::Value;

/// Coerce a value to `f64`, falling back to `default` on parse failure.
/// Zero is a value, not a failure.
pub fn to_f64(value: &Value, default: f64) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite()).unwrap_or(default)
}

/// Coerce a value to `i64`, truncating fractional numbers.
pub fn to_i64(value: &Value, default: i64) -> i64 {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().filter(|v| v.is_finite()).map(|v| v as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v as i64))
        }
        _ => None,
    };
    parsed.unwrap_or(default)
}

/// String coercion for scalar values.
pub fn to_string_lossy(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        // Structural values are not expected here; their JSON text is as
        // good a fallback as any.
        other => other.to_string(),
    }
}

/// Coerce a two-element array. Non-arrays yield `None`; missing or
/// unparseable elements fall back to 0.
pub fn to_pair(value: &Value) -> Option<[f64; 2]> {
    let items = value.as_array()?;
    Some([
        items.first().map_or(0.0, |v| to_f64(v, 0.0)),
        items.get(1).map_or(0.0, |v| to_f64(v, 0.0)),
    ])
}

/// Coerce a four-element integer color array.
pub fn to_color(value: &Value) -> Option<[i64; 4]> {
    let items = value.as_array()?;
    let mut color = [0i64; 4];
    for (i, slot) in color.iter_mut().enumerate() {
        *slot = items.get(i).map_or(0, |v| to_i64(v, 0));
    }
    Some(color)
}

/// Canonical JSON number: finite floats with zero fraction are emitted as
/// integers, so `-2.0` renders as `-2` at every tier.
pub fn json_num(v: f64) -> Value {
    const MAX_EXACT: f64 = i64::MAX as f64;
    if v.is_finite() && v.fract() == 0.0 && v.abs() < MAX_EXACT {
        Value::from(v as i64)
    } else {
        Value::from(v)
    }
}

/// Canonical pair value.
pub fn json_pair(pair: [f64; 2]) -> Value {
    Value::Array(vec![json_num(pair[0]), json_num(pair[1])])
}
