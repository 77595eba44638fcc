use grill_core::contract::RequestContext;
use grill_core::error::GrillError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

impl ApiGatewayResponse {
    pub fn body_json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }
}

/// Decodes the JSON body of an API Gateway proxy event. `missing_message`
/// is used when the event carries no body at all.
pub fn parse_body<T: DeserializeOwned>(
    event: &Value,
    missing_message: &str,
) -> Result<T, GrillError> {
    let Some(object) = event.as_object() else {
        return Err(GrillError::validation("Request payload must be a JSON object"));
    };

    let body = match object.get("body") {
        None | Some(Value::Null) => return Err(GrillError::validation(missing_message)),
        Some(Value::String(text)) if text.trim().is_empty() => {
            return Err(GrillError::validation(missing_message));
        }
        Some(Value::String(text)) => serde_json::from_str::<Value>(text)
            .map_err(|error| GrillError::validation(format!("Malformed JSON body: {error}")))?,
        Some(body @ Value::Object(_)) => body.clone(),
        Some(_) => return Err(GrillError::validation("Request body must be a JSON object")),
    };

    serde_json::from_value(body)
        .map_err(|error| GrillError::validation(format!("Malformed request: {error}")))
}

/// Reads a non-blank `pathParameters` entry.
pub fn path_parameter<'a>(event: &'a Value, name: &str) -> Option<&'a str> {
    event
        .get("pathParameters")
        .and_then(|parameters| parameters.get(name))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

pub fn created_response(payload: &impl Serialize, context: &RequestContext) -> ApiGatewayResponse {
    match serde_json::to_string(payload) {
        Ok(body) => ApiGatewayResponse {
            status_code: 201,
            headers: json_headers(),
            body,
        },
        Err(error) => raw_error_response(
            500,
            "serialization_error",
            &error.to_string(),
            &context.correlation_id,
        ),
    }
}

pub fn error_response(error: &GrillError, context: &RequestContext) -> ApiGatewayResponse {
    raw_error_response(
        status_for(error),
        error.kind(),
        error.message(),
        &context.correlation_id,
    )
}

pub fn status_for(error: &GrillError) -> u16 {
    match error {
        GrillError::Validation(_) => 400,
        GrillError::NotFound(_) => 404,
        GrillError::Upstream(_) => 502,
        GrillError::Persistence(_) => 500,
    }
}

pub(crate) fn raw_error_response(
    status_code: u16,
    code: &str,
    message: &str,
    correlation_id: &str,
) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json_headers(),
        body: json!({
            "error": code,
            "message": message,
            "correlationId": correlation_id,
        })
        .to_string(),
    }
}

fn json_headers() -> Value {
    json!({"Content-Type": "application/json"})
}

#[cfg(test)]
mod tests {
    use grill_core::contract::CreateOrderInput;

    use super::*;

    #[test]
    fn parses_string_body() {
        let event = json!({"body": "{\"productId\":\"burger\"}"});
        let input: CreateOrderInput =
            parse_body(&event, "no order supplied").expect("body should parse");
        assert_eq!(input.product_id, "burger");
    }

    #[test]
    fn parses_object_body() {
        let event = json!({"body": {"productId": "chips"}});
        let input: CreateOrderInput =
            parse_body(&event, "no order supplied").expect("body should parse");
        assert_eq!(input.product_id, "chips");
    }

    #[test]
    fn missing_or_null_body_uses_missing_message() {
        for event in [json!({}), json!({"body": null}), json!({"body": ""})] {
            let error = parse_body::<CreateOrderInput>(&event, "no order supplied")
                .expect_err("absent body should fail");
            assert_eq!(error, GrillError::validation("no order supplied"));
        }
    }

    #[test]
    fn malformed_json_body_is_a_validation_error() {
        let event = json!({"body": "{not json"});
        let error = parse_body::<CreateOrderInput>(&event, "no order supplied")
            .expect_err("malformed body should fail");
        assert!(error.message().starts_with("Malformed JSON body"));
    }

    #[test]
    fn reads_non_blank_path_parameter() {
        let event = json!({"pathParameters": {"id": "cust-1", "blank": " "}});
        assert_eq!(path_parameter(&event, "id"), Some("cust-1"));
        assert_eq!(path_parameter(&event, "blank"), None);
        assert_eq!(path_parameter(&json!({"pathParameters": null}), "id"), None);
    }

    #[test]
    fn error_response_carries_code_and_correlation_id() {
        let context = RequestContext::with_correlation_id("corr-1");
        let response = error_response(&GrillError::not_found("customer not found"), &context);

        assert_eq!(response.status_code, 404);
        assert_eq!(
            response.body_json(),
            Some(json!({
                "error": "not_found",
                "message": "customer not found",
                "correlationId": "corr-1",
            }))
        );
    }

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(status_for(&GrillError::validation("x")), 400);
        assert_eq!(status_for(&GrillError::upstream("x")), 502);
        assert_eq!(status_for(&GrillError::persistence("x")), 500);
    }
}
