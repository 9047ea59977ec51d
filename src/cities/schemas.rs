//! Validation rules for the cities resource.

use crate::validation::{FieldRule, ObjectSchema, RequestValidator};

fn id_params() -> ObjectSchema {
    ObjectSchema::new().field("id", FieldRule::number().integer().required().more_than(0.0))
}

fn create_body() -> ObjectSchema {
    ObjectSchema::new()
        .field(
            "name",
            FieldRule::string().strict().required_with("city name is required").min_len(3),
        )
        .field(
            "state",
            FieldRule::string().strict().required_with("state is required").exact_len(2),
        )
}

fn update_body() -> ObjectSchema {
    ObjectSchema::new()
        .field("name", FieldRule::string().required().min_len(3))
        .field("state", FieldRule::string().strict().required().exact_len(2))
}

fn list_query() -> ObjectSchema {
    ObjectSchema::new()
        .field("page", FieldRule::number().more_than(0.0))
        .field("limit", FieldRule::number().more_than(0.0))
        .field("filter", FieldRule::string())
}

/// `POST /cities`
pub fn create_validator() -> RequestValidator {
    RequestValidator::new().body(create_body())
}

/// `GET /cities`
pub fn get_all_validator() -> RequestValidator {
    RequestValidator::new().query(list_query())
}

/// `GET /cities/{id}`
pub fn get_by_id_validator() -> RequestValidator {
    RequestValidator::new().params(id_params())
}

/// `PUT /cities/{id}`
pub fn update_by_id_validator() -> RequestValidator {
    RequestValidator::new().params(id_params()).body(update_body())
}

/// `DELETE /cities/{id}`
pub fn delete_by_id_validator() -> RequestValidator {
    RequestValidator::new().params(id_params())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{PartValues, RequestPart};
    use serde_json::{json, Value};

    fn with(part: RequestPart, value: Value) -> PartValues {
        PartValues::from([(part, value)])
    }

    #[test]
    fn test_create_boundaries() {
        let validator = create_validator();
        let ok = validator.validate(&with(RequestPart::Body, json!({"name": "Rio", "state": "RJ"})));
        assert!(ok.is_empty());

        let errors = validator.validate(&with(RequestPart::Body, json!({"name": "Ri", "state": "R"})));
        let body = errors.get(RequestPart::Body).unwrap();
        assert_eq!(body["name"], "name must be at least 3 characters");
        assert_eq!(body["state"], "state must be exactly 2 characters");
    }

    #[test]
    fn test_create_custom_required_messages() {
        let errors = create_validator().validate(&with(RequestPart::Body, json!({})));
        let body = errors.get(RequestPart::Body).unwrap();
        assert_eq!(body["name"], "city name is required");
        assert_eq!(body["state"], "state is required");
    }

    #[test]
    fn test_create_rejects_non_string_fields() {
        let errors = create_validator().validate(&with(RequestPart::Body, json!({"name": 123, "state": "RJ"})));
        assert_eq!(errors.get(RequestPart::Body).unwrap()["name"], "name must be a `string` type");
    }

    #[test]
    fn test_list_query_fields_are_optional() {
        let validator = get_all_validator();
        assert!(validator.validate(&with(RequestPart::Query, json!({}))).is_empty());
        assert!(validator
            .validate(&with(RequestPart::Query, json!({"page": "2", "limit": "10", "filter": "Rio"})))
            .is_empty());

        let errors = validator.validate(&with(RequestPart::Query, json!({"page": "0", "limit": "-1"})));
        let query = errors.get(RequestPart::Query).unwrap();
        assert_eq!(query["page"], "page must be greater than 0");
        assert_eq!(query["limit"], "limit must be greater than 0");
    }

    #[test]
    fn test_id_must_be_positive_integer() {
        let validator = get_by_id_validator();
        assert!(validator.validate(&with(RequestPart::Params, json!({"id": "5"}))).is_empty());

        for (raw, message) in [
            ("0", "id must be greater than 0"),
            ("1.5", "id must be an integer"),
            ("abc", "id must be a `number` type"),
        ] {
            let errors = validator.validate(&with(RequestPart::Params, json!({"id": raw})));
            assert_eq!(errors.get(RequestPart::Params).unwrap()["id"], message, "id = {raw}");
        }
    }

    #[test]
    fn test_update_reports_params_and_body_together() {
        let values = PartValues::from([
            (RequestPart::Params, json!({"id": "0"})),
            (RequestPart::Body, json!({"name": "Rio", "state": "RJX"})),
        ]);
        let errors = update_by_id_validator().validate(&values);
        let parts: Vec<_> = errors.parts().collect();
        assert_eq!(parts, [RequestPart::Body, RequestPart::Params]);
    }

    #[test]
    fn test_update_name_is_lenient_and_state_strict() {
        let values = PartValues::from([
            (RequestPart::Params, json!({"id": "5"})),
            (RequestPart::Body, json!({"name": 1234, "state": "RJ"})),
        ]);
        assert!(update_by_id_validator().validate(&values).is_empty());

        let values = PartValues::from([
            (RequestPart::Params, json!({"id": "5"})),
            (RequestPart::Body, json!({"name": 12, "state": 12})),
        ]);
        let errors = update_by_id_validator().validate(&values);
        let body = errors.get(RequestPart::Body).unwrap();
        assert_eq!(body["name"], "name must be at least 3 characters");
        assert_eq!(body["state"], "state must be a `string` type");
    }

    #[test]
    fn test_delete_is_params_only() {
        let validator = delete_by_id_validator();
        assert!(validator.declares(RequestPart::Params));
        assert!(!validator.declares(RequestPart::Body));
    }
}
