//! Request and response shapes for the cities resource.
//!
//! Each struct is read from the [`ValidatedParts`] of a request that already
//! passed the matching rule table in [`super::schemas`], using the same
//! coercion those rules apply.

use serde::Serialize;
use serde_json::Value;

use crate::validation::{RequestPart, ValidatedParts};

/// Body of create and update requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityBody {
    pub name: String,
    pub state: String,
}

impl CityBody {
    pub fn from_validated(validated: &ValidatedParts) -> Self {
        let read = |name| {
            validated
                .string(RequestPart::Body, name)
                .map(|value| value.into_owned())
                .unwrap_or_default()
        };
        Self {
            name: read("name"),
            state: read("state"),
        }
    }
}

/// Filters and paging accepted by the list operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityQuery {
    pub page: Option<f64>,
    pub limit: Option<f64>,
    pub filter: Option<String>,
}

impl CityQuery {
    pub fn from_validated(validated: &ValidatedParts) -> Self {
        Self {
            page: validated.number(RequestPart::Query, "page"),
            limit: validated.number(RequestPart::Query, "limit"),
            filter: validated
                .string(RequestPart::Query, "filter")
                .map(|value| value.into_owned()),
        }
    }
}

/// Path parameters of the by-id operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityParams {
    pub id: u64,
}

impl CityParams {
    /// `id` passed as a positive integer, in any accepted notation (`5`,
    /// `5.0`, `1e1`).
    pub fn from_validated(validated: &ValidatedParts) -> Self {
        let id = validated.number(RequestPart::Params, "id").unwrap_or_default();
        Self { id: id as u64 }
    }
}

/// Response of a successful create. `data` is the request body as sent,
/// including fields no rule mentions.
#[derive(Debug, Serialize)]
pub struct CityCreated {
    pub message: &'static str,
    pub data: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::PartValues;
    use serde_json::json;

    fn validated(part: RequestPart, value: Value) -> ValidatedParts {
        ValidatedParts::new(PartValues::from([(part, value)]))
    }

    #[test]
    fn test_params_accept_any_integer_notation() {
        for raw in ["5", "5.0", " 5 ", "0x5"] {
            let params = CityParams::from_validated(&validated(RequestPart::Params, json!({"id": raw})));
            assert_eq!(params.id, 5, "id = {raw}");
        }
        let params = CityParams::from_validated(&validated(RequestPart::Params, json!({"id": "1e1"})));
        assert_eq!(params.id, 10);
    }

    #[test]
    fn test_body_coerces_lenient_name() {
        let body = CityBody::from_validated(&validated(RequestPart::Body, json!({"name": 1234, "state": "RJ"})));
        assert_eq!(body.name, "1234");
        assert_eq!(body.state, "RJ");
    }

    #[test]
    fn test_query_fields_are_optional() {
        let query = CityQuery::from_validated(&validated(RequestPart::Query, json!({"page": " 2", "filter": "Rio"})));
        assert_eq!(query.page, Some(2.0));
        assert_eq!(query.limit, None);
        assert_eq!(query.filter.as_deref(), Some("Rio"));
    }
}
