//! Field rules.
//!
//! A [`FieldRule`] describes what one field of a request part must look like.
//! Checks run in a fixed order:
//!
//! 1. presence (`required`) and nullability
//! 2. type, with optional coercion of scalar values
//! 3. constraint tests (length, integer, lower bound)
//!
//! A type failure ends the checks for that field. Every failing constraint
//! test produces a message; callers keep the last one per path.

use std::borrow::Cow;

use serde_json::Value;

/// Primitive type a field is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
}

impl FieldKind {
    fn type_name(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
        }
    }
}

/// Rule set for a single field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    kind: FieldKind,
    required: bool,
    required_message: Option<String>,
    strict: bool,
    min_len: Option<usize>,
    max_len: Option<usize>,
    exact_len: Option<usize>,
    integer: bool,
    more_than: Option<f64>,
}

impl FieldRule {
    fn of(kind: FieldKind) -> Self {
        Self {
            kind,
            required: false,
            required_message: None,
            strict: false,
            min_len: None,
            max_len: None,
            exact_len: None,
            integer: false,
            more_than: None,
        }
    }

    /// An optional string field.
    pub fn string() -> Self {
        Self::of(FieldKind::String)
    }

    /// An optional number field.
    pub fn number() -> Self {
        Self::of(FieldKind::Number)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field required and replaces the default required message.
    pub fn required_with(mut self, message: impl Into<String>) -> Self {
        self.required = true;
        self.required_message = Some(message.into());
        self
    }

    /// Disables coercion: the value must already have the declared type.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    pub fn min_len(mut self, len: usize) -> Self {
        self.min_len = Some(len);
        self
    }

    pub fn max_len(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    pub fn exact_len(mut self, len: usize) -> Self {
        self.exact_len = Some(len);
        self
    }

    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    /// Exclusive lower bound.
    pub fn more_than(mut self, bound: f64) -> Self {
        self.more_than = Some(bound);
        self
    }

    /// Checks `value` (absent when `None`) and returns every failure message.
    pub fn check(&self, path: &str, value: Option<&Value>) -> Vec<String> {
        let value = match value {
            None if self.required => return vec![self.required_message(path)],
            None => return Vec::new(),
            Some(Value::Null) if self.required => return vec![self.required_message(path)],
            Some(Value::Null) => return vec![format!("{path} cannot be null")],
            Some(v) => v,
        };

        match self.kind {
            FieldKind::String => match self.cast_string(value) {
                Some(s) => self.check_string(path, &s),
                None => vec![self.type_message(path)],
            },
            FieldKind::Number => match self.cast_number(value) {
                Some(n) => self.check_number(path, n),
                None => vec![self.type_message(path)],
            },
        }
    }

    fn required_message(&self, path: &str) -> String {
        match &self.required_message {
            Some(message) => message.clone(),
            None => format!("{path} is a required field"),
        }
    }

    fn type_message(&self, path: &str) -> String {
        format!("{path} must be a `{}` type", self.kind.type_name())
    }

    fn cast_string<'a>(&self, value: &'a Value) -> Option<Cow<'a, str>> {
        match value {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            _ if self.strict => None,
            _ => coerce_string(value),
        }
    }

    fn cast_number(&self, value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            _ if self.strict => None,
            _ => coerce_number(value),
        }
    }

    fn check_string(&self, path: &str, s: &str) -> Vec<String> {
        let mut failures = Vec::new();
        let len = s.chars().count();

        if self.required && s.is_empty() {
            failures.push(self.required_message(path));
        }
        if let Some(min) = self.min_len.filter(|&min| len < min) {
            failures.push(format!("{path} must be at least {min} characters"));
        }
        if let Some(max) = self.max_len.filter(|&max| len > max) {
            failures.push(format!("{path} must be at most {max} characters"));
        }
        if let Some(exact) = self.exact_len.filter(|&exact| len != exact) {
            failures.push(format!("{path} must be exactly {exact} characters"));
        }
        failures
    }

    fn check_number(&self, path: &str, n: f64) -> Vec<String> {
        let mut failures = Vec::new();

        if self.integer && n.fract() != 0.0 {
            failures.push(format!("{path} must be an integer"));
        }
        if let Some(bound) = self.more_than.filter(|&bound| n <= bound) {
            failures.push(format!("{path} must be greater than {bound}"));
        }
        failures
    }
}

/// Reads a scalar as a string the way a non-strict string field does.
pub fn coerce_string(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

/// Reads a scalar as a number the way a non-strict number field does.
///
/// Strings lose all whitespace first, then parse as decimal or exponent
/// notation, or as an unsigned `0x`/`0o`/`0b` integer literal. Empty strings,
/// infinities and NaN are not numbers.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }

    let lowered = compact.to_ascii_lowercase();
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = lowered.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    // `f64::from_str` also reads "inf" and "nan" spellings.
    if compact.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    compact.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(rule: &FieldRule, value: Value) -> Vec<String> {
        rule.check("field", Some(&value))
    }

    #[test]
    fn test_exact_length_boundaries() {
        let rule = FieldRule::string().strict().required().exact_len(2);
        assert!(check(&rule, json!("RJ")).is_empty());
        assert_eq!(check(&rule, json!("R")), ["field must be exactly 2 characters"]);
        assert_eq!(check(&rule, json!("RJX")), ["field must be exactly 2 characters"]);
    }

    #[test]
    fn test_min_length_boundaries() {
        let rule = FieldRule::string().required().min_len(3);
        assert!(check(&rule, json!("Rio")).is_empty());
        assert_eq!(check(&rule, json!("Ri")), ["field must be at least 3 characters"]);
    }

    #[test]
    fn test_max_length() {
        let rule = FieldRule::string().max_len(5);
        assert!(check(&rule, json!("Natal")).is_empty());
        assert_eq!(check(&rule, json!("Recife")), ["field must be at most 5 characters"]);
    }

    #[test]
    fn test_length_counts_characters() {
        let rule = FieldRule::string().exact_len(2);
        assert!(check(&rule, json!("ÁÉ")).is_empty());
    }

    #[test]
    fn test_required_and_optional_absence() {
        let required = FieldRule::string().required();
        assert_eq!(required.check("name", None), ["name is a required field"]);
        assert_eq!(required.check("name", Some(&Value::Null)), ["name is a required field"]);

        let custom = FieldRule::string().required_with("name is mandatory");
        assert_eq!(custom.check("name", None), ["name is mandatory"]);

        let optional = FieldRule::number().more_than(0.0);
        assert!(optional.check("page", None).is_empty());
        assert_eq!(optional.check("page", Some(&Value::Null)), ["page cannot be null"]);
    }

    #[test]
    fn test_required_string_rejects_empty() {
        let rule = FieldRule::string().required();
        assert_eq!(check(&rule, json!("")), ["field is a required field"]);
    }

    #[test]
    fn test_strict_string_rejects_numbers() {
        let strict = FieldRule::string().strict().required();
        assert_eq!(check(&strict, json!(123)), ["field must be a `string` type"]);

        let lenient = FieldRule::string().required().min_len(3);
        assert!(check(&lenient, json!(1234)).is_empty());
        assert_eq!(check(&lenient, json!(12)), ["field must be at least 3 characters"]);
        assert_eq!(check(&lenient, json!({"a": 1})), ["field must be a `string` type"]);
    }

    #[test]
    fn test_number_coercion_from_strings() {
        let rule = FieldRule::number().more_than(0.0);
        assert!(check(&rule, json!("5")).is_empty());
        assert!(check(&rule, json!(" 2.5 ")).is_empty());
        assert_eq!(check(&rule, json!("0")), ["field must be greater than 0"]);
        assert_eq!(check(&rule, json!("abc")), ["field must be a `number` type"]);
        assert_eq!(check(&rule, json!("")), ["field must be a `number` type"]);
        assert_eq!(check(&rule, json!("inf")), ["field must be a `number` type"]);
        assert_eq!(check(&rule, json!(true)), ["field must be a `number` type"]);
    }

    #[test]
    fn test_number_string_notations() {
        assert_eq!(coerce_number(&json!("1e1")), Some(10.0));
        assert_eq!(coerce_number(&json!("5.0")), Some(5.0));
        assert_eq!(coerce_number(&json!("1 2")), Some(12.0));
        assert_eq!(coerce_number(&json!("0x10")), Some(16.0));
        assert_eq!(coerce_number(&json!("0B101")), Some(5.0));
        assert_eq!(coerce_number(&json!("0x")), None);
        assert_eq!(coerce_number(&json!("0x+5")), None);
        assert_eq!(coerce_number(&json!("-0x10")), None);
        for raw in ["Infinity", "-inf", "NaN", "1e999"] {
            assert_eq!(coerce_number(&json!(raw)), None, "{raw}");
        }
    }

    #[test]
    fn test_strict_number_rejects_strings() {
        let rule = FieldRule::number().strict();
        assert_eq!(check(&rule, json!("5")), ["field must be a `number` type"]);
        assert!(check(&rule, json!(5)).is_empty());
    }

    #[test]
    fn test_integer_and_bound_both_reported() {
        let rule = FieldRule::number().integer().required().more_than(0.0);
        assert!(check(&rule, json!(5)).is_empty());
        assert_eq!(check(&rule, json!(2.5)), ["field must be an integer"]);
        assert_eq!(
            check(&rule, json!(-1.5)),
            ["field must be an integer", "field must be greater than 0"]
        );
    }

    #[test]
    fn test_type_failure_stops_other_checks() {
        let rule = FieldRule::string().strict().min_len(3).exact_len(2);
        assert_eq!(check(&rule, json!(false)), ["field must be a `string` type"]);
    }
}
