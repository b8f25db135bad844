//! Field-level payload validation.
//!
//! Request bodies are read through [`FieldReader`], which walks an explicit
//! allow-list of keys and collects one message list per offending field.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

pub const MISSING: &str = "Missing data for required field.";
pub const NULL: &str = "Field may not be null.";
pub const NOT_STRING: &str = "Not a valid string.";
pub const NOT_NUMBER: &str = "Not a valid number.";
pub const NOT_FINITE: &str = "Special numeric values (nan or infinity) are not permitted.";
pub const NOT_INTEGER: &str = "Not a valid integer.";
pub const NOT_DATE: &str = "Not a valid date.";
pub const UNKNOWN: &str = "Unknown field.";
pub const INVALID_INPUT: &str = "Invalid input type.";

/// Key used for errors that concern the body as a whole.
pub const SCHEMA_KEY: &str = "_schema";

/// Validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn schema(message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.add(SCHEMA_KEY, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(message.into());
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Reads typed fields out of a JSON object, recording an error for each bad one.
pub struct FieldReader<'a> {
    body: &'a Map<String, Value>,
    allowed: Vec<&'static str>,
    errors: FieldErrors,
}

impl<'a> FieldReader<'a> {
    pub fn new(body: &'a Map<String, Value>) -> Self {
        Self {
            body,
            allowed: Vec::new(),
            errors: FieldErrors::default(),
        }
    }

    fn field(&mut self, key: &'static str) -> Option<&'a Value> {
        self.allowed.push(key);
        self.body.get(key)
    }

    fn required(&mut self, key: &'static str) -> Option<&'a Value> {
        match self.field(key) {
            None => {
                self.errors.add(key, MISSING);
                None
            }
            Some(Value::Null) => {
                self.errors.add(key, NULL);
                None
            }
            Some(value) => Some(value),
        }
    }

    pub fn required_string(&mut self, key: &'static str, max_len: usize) -> Option<String> {
        let value = self.required(key)?;
        self.string(key, value, max_len)
    }

    /// Absent and `null` both read as `None`.
    pub fn optional_string(&mut self, key: &'static str, max_len: usize) -> Option<String> {
        match self.field(key) {
            None | Some(Value::Null) => None,
            Some(value) => self.string(key, value, max_len),
        }
    }

    fn string(&mut self, key: &'static str, value: &Value, max_len: usize) -> Option<String> {
        let Value::String(s) = value else {
            self.errors.add(key, NOT_STRING);
            return None;
        };
        if s.chars().count() > max_len {
            self.errors
                .add(key, format!("Longer than maximum length {max_len}."));
            return None;
        }
        Some(s.clone())
    }

    /// Accepts JSON numbers and numeric strings; rejects NaN and infinities.
    pub fn required_number(&mut self, key: &'static str) -> Option<f64> {
        let value = self.required(key)?;
        let number = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        match number {
            None => {
                self.errors.add(key, NOT_NUMBER);
                None
            }
            Some(n) if !n.is_finite() => {
                self.errors.add(key, NOT_FINITE);
                None
            }
            Some(n) => Some(n),
        }
    }

    /// Accepts integral JSON numbers (including `5.0`) and integer strings that fit in `i32`.
    pub fn required_integer(&mut self, key: &'static str) -> Option<i32> {
        let value = self.required(key)?;
        let integer = match value {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.is_finite())
                    .map(|f| f as i64)
            }),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        match integer.and_then(|i| i32::try_from(i).ok()) {
            Some(i) => Some(i),
            None => {
                self.errors.add(key, NOT_INTEGER);
                None
            }
        }
    }

    /// ISO 8601 calendar date, `YYYY-MM-DD`.
    pub fn required_date(&mut self, key: &'static str) -> Option<NaiveDate> {
        let value = self.required(key)?;
        let date = value
            .as_str()
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok());
        if date.is_none() {
            self.errors.add(key, NOT_DATE);
        }
        date
    }

    /// Flags keys outside the allow-list and returns `value` only if nothing was rejected.
    pub fn finish<T>(mut self, value: Option<T>) -> Result<T, FieldErrors> {
        for key in self.body.keys() {
            if !self.allowed.contains(&key.as_str()) {
                self.errors.add(key, UNKNOWN);
            }
        }
        if !self.errors.is_empty() {
            return Err(self.errors);
        }
        value.ok_or_else(|| FieldErrors::schema(INVALID_INPUT))
    }
}
