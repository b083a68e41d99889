//! Turns the model's free-text reply into an answer/reasoning pair.
//!
//! Parsing happens in two stages. [`parse_strict`] accepts only a JSON object
//! shaped like `{"answer": 2, "reasoning": "..."}`. When that fails,
//! [`parse_fallback`] takes the first standalone one- or two-digit number as the
//! answer and keeps the whole text as reasoning. The result is best effort:
//! malformed or chatty replies can yield the wrong option number.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

// ASCII digits only: `\d` would also match other Unicode decimal digits,
// which `str::parse` cannot convert.
static OPTION_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([0-9]{1,2})\b").expect("option number pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAnswer {
    pub answer: Option<i64>,
    pub reasoning: String,
}

/// Runs the strict stage and falls back to pattern extraction.
pub fn interpret(text: &str) -> ModelAnswer {
    parse_strict(text).unwrap_or_else(|| parse_fallback(text))
}

/// Strict stage: `text` must be a JSON object.
///
/// A missing `answer` yields `None`, a missing `reasoning` yields an empty
/// string. Any other JSON document (array, bare number, string) is rejected.
pub fn parse_strict(text: &str) -> Option<ModelAnswer> {
    let Value::Object(fields) = serde_json::from_str::<Value>(text).ok()? else {
        return None;
    };

    let answer = fields.get("answer").and_then(coerce_answer);
    let reasoning = match fields.get("reasoning") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    Some(ModelAnswer { answer, reasoning })
}

/// Fallback stage: first standalone 1-2 digit number, whole text as reasoning.
pub fn parse_fallback(text: &str) -> ModelAnswer {
    let answer = OPTION_NUMBER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok());

    ModelAnswer {
        answer,
        reasoning: text.to_string(),
    }
}

/// Integers pass through, integral floats and all-digit strings are converted,
/// anything else means "no answer".
fn coerce_answer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) => {
            s.parse().ok()
        }
        _ => None,
    }
}
