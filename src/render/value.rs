// Result tree classification
//
// The analysis backend returns an arbitrarily nested JSON tree. Before it is
// displayed, every node is classified into one of a closed set of shapes so
// the renderer never has to probe types at display time.

use serde_json::{Number, Value};

/// A scalar value at the bottom of a result tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Leaf {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
}

impl Leaf {
    /// Display form of the leaf. `Null` renders as an empty string.
    pub fn display(&self) -> String {
        match self {
            Leaf::Null => String::new(),
            Leaf::Bool(b) => b.to_string(),
            Leaf::Number(n) => format_number(n),
            Leaf::Text(s) => s.clone(),
        }
    }
}

/// Payload bundled with a pass/fail verdict.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckPayload {
    /// A trailing-period numeric series (e.g. per-year earnings).
    Series(Vec<f64>),
    /// Anything else, already reduced to its display form.
    Scalar(String),
}

/// A classified node of an analysis result tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultNode {
    Leaf(Leaf),
    PairCheck { payload: CheckPayload, passed: bool },
    Sequence(Vec<ResultNode>),
    Mapping(Vec<(String, ResultNode)>),
}

impl ResultNode {
    /// Classify a raw JSON value.
    ///
    /// Rules are applied in priority order:
    /// 1. a two-element array whose second element is a boolean is a pair-check
    /// 2. any other array is a sequence
    /// 3. an object is a mapping (document key order is kept)
    /// 4. everything else is a leaf
    pub fn classify(value: &Value) -> Self {
        match value {
            Value::Array(items) => match items.as_slice() {
                [payload, Value::Bool(passed)] => ResultNode::PairCheck {
                    payload: classify_payload(payload),
                    passed: *passed,
                },
                _ => ResultNode::Sequence(items.iter().map(ResultNode::classify).collect()),
            },
            Value::Object(map) => ResultNode::Mapping(
                map.iter()
                    .map(|(key, v)| (key.clone(), ResultNode::classify(v)))
                    .collect(),
            ),
            Value::Bool(b) => ResultNode::Leaf(Leaf::Bool(*b)),
            Value::Number(n) => ResultNode::Leaf(Leaf::Number(n.clone())),
            Value::String(s) => ResultNode::Leaf(Leaf::Text(s.clone())),
            Value::Null => ResultNode::Leaf(Leaf::Null),
        }
    }
}

fn classify_payload(payload: &Value) -> CheckPayload {
    if let Value::Array(items) = payload {
        let numbers: Option<Vec<f64>> = items.iter().map(Value::as_f64).collect();
        if let Some(numbers) = numbers {
            return CheckPayload::Series(numbers);
        }
    }
    CheckPayload::Scalar(display_string(payload))
}

/// Best-effort string form of an arbitrary value.
///
/// Arrays join their elements with `,`; objects fall back to compact JSON.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Integral values print without a fractional part (`1.0` -> `1`).
pub fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        match n.as_f64() {
            Some(f) if f.is_finite() => format!("{}", f),
            _ => n.to_string(),
        }
    }
}

/// Two decimal places with exact halves rounded away from zero, the way
/// JavaScript's `toFixed(2)` does. Rust's `{:.2}` rounds those to even.
pub fn format_fixed2(value: f64) -> String {
    // Only odd multiples of 1/8 sit exactly on a hundredths midpoint
    let eighths = value * 8.0;
    let exact_half = value.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if exact_half {
        format!("{:.2}", (value * 100.0).round() / 100.0)
    } else {
        format!("{:.2}", value)
    }
}
