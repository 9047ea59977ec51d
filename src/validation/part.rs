//! Request parts that can carry a schema.

use serde::Serialize;

/// A logical section of an HTTP request.
///
/// The declaration order is the order parts are validated in and the order
/// their keys appear in an error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestPart {
    Body,
    Query,
    Params,
    Header,
}

impl RequestPart {
    /// All parts, in validation order.
    pub const ALL: [RequestPart; 4] = [
        RequestPart::Body,
        RequestPart::Query,
        RequestPart::Params,
        RequestPart::Header,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RequestPart::Body => "body",
            RequestPart::Query => "query",
            RequestPart::Params => "params",
            RequestPart::Header => "header",
        }
    }
}

impl std::fmt::Display for RequestPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_are_ordered_as_declared() {
        let mut parts = vec![RequestPart::Header, RequestPart::Params, RequestPart::Body, RequestPart::Query];
        parts.sort();
        assert_eq!(parts, RequestPart::ALL.to_vec());
    }

    #[test]
    fn test_part_names() {
        let names: Vec<_> = RequestPart::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(names, ["body", "query", "params", "header"]);
        assert_eq!(serde_json::to_value(RequestPart::Params).unwrap(), "params");
    }
}
