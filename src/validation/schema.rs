//! Object schemas: named field rules validated together.

use serde_json::Value;

use crate::validation::rule::FieldRule;

/// One failed check.
///
/// `path` is `None` when the failure concerns the whole value rather than a
/// field (for instance a body that is not a JSON object).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: Option<String>,
    pub message: String,
}

/// An ordered set of field rules for one request part.
///
/// Fields the schema does not name are ignored.
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    fields: Vec<(String, FieldRule)>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field rule. Returns `self` for chaining.
    pub fn field(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.fields.push((name.into(), rule));
        self
    }

    /// Validates `value` against every field and collects all failures.
    pub fn validate(&self, value: &Value) -> Vec<FieldError> {
        let Some(object) = value.as_object() else {
            return vec![FieldError {
                path: None,
                message: "value must be a `object` type".to_string(),
            }];
        };

        self.fields
            .iter()
            .flat_map(|(name, rule)| {
                rule.check(name, object.get(name))
                    .into_iter()
                    .map(move |message| FieldError {
                        path: Some(name.clone()),
                        message,
                    })
            })
            .collect()
    }
}
