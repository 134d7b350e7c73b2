//! Calculator API handlers
//!
//! Parse path operands, invoke the arithmetic core, and shape the JSON wire
//! responses. The divide result is kept as a pre-formatted two-decimal
//! literal so the wire always reads e.g. `"result":10.00`.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;
use serde_json::value::RawValue;

use crate::calc;
use crate::http;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const INVALID_NUMBERS: &str = "Invalid numbers provided";

/// The four supported operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Map a path segment to an operation
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "add" => Some(Self::Add),
            "subtract" => Some(Self::Subtract),
            "multiply" => Some(Self::Multiply),
            "divide" => Some(Self::Divide),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

/// Successful operation payload
#[derive(Debug, Serialize)]
pub struct OperationResponse {
    operation: &'static str,
    a: i64,
    b: i64,
    result: Box<RawValue>,
}

impl OperationResponse {
    /// Integer result for add/subtract/multiply
    fn integer(op: Operation, a: i64, b: i64, result: i64) -> Self {
        Self {
            operation: op.name(),
            a,
            b,
            result: raw_number(result.to_string()),
        }
    }

    /// Two-decimal result for divide
    fn fixed(op: Operation, a: i64, b: i64, result: f64) -> Self {
        Self {
            operation: op.name(),
            a,
            b,
            result: raw_number(format!("{result:.2}")),
        }
    }
}

/// Error payload for 400 responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// Health check payload; values fixed at compile time from Cargo metadata
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    application: &'static str,
    version: &'static str,
}

/// Handle `GET /api/{op}/{a}/{b}`
pub fn handle_operation(op: Operation, raw_a: &str, raw_b: &str) -> Response<Full<Bytes>> {
    let (Ok(a), Ok(b)) = (raw_a.parse::<i64>(), raw_b.parse::<i64>()) else {
        return http::json_response(StatusCode::BAD_REQUEST, &ErrorResponse::new(INVALID_NUMBERS));
    };

    let payload = match op {
        Operation::Add => OperationResponse::integer(op, a, b, calc::add(a, b)),
        Operation::Subtract => OperationResponse::integer(op, a, b, calc::subtract(a, b)),
        Operation::Multiply => OperationResponse::integer(op, a, b, calc::multiply(a, b)),
        Operation::Divide => match calc::divide(a, b) {
            Ok(quotient) => OperationResponse::fixed(op, a, b, quotient),
            Err(e) => {
                return http::json_response(
                    StatusCode::BAD_REQUEST,
                    &ErrorResponse::new(&e.to_string()),
                );
            }
        },
    };

    http::json_response(StatusCode::OK, &payload)
}

/// Handle `GET /health`
pub fn handle_health() -> Response<Full<Bytes>> {
    http::json_response(
        StatusCode::OK,
        &HealthResponse {
            status: "UP",
            application: APP_NAME,
            version: APP_VERSION,
        },
    )
}

/// Wrap a pre-formatted numeric literal as raw JSON.
///
/// Integer display and fixed-point float formatting always yield valid JSON
/// number literals.
fn raw_number(literal: String) -> Box<RawValue> {
    RawValue::from_string(literal).expect("numeric literal is valid JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(response: Response<Full<Bytes>>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_operation_from_segment() {
        assert_eq!(Operation::from_segment("add"), Some(Operation::Add));
        assert_eq!(
            Operation::from_segment("subtract"),
            Some(Operation::Subtract)
        );
        assert_eq!(
            Operation::from_segment("multiply"),
            Some(Operation::Multiply)
        );
        assert_eq!(Operation::from_segment("divide"), Some(Operation::Divide));
        assert_eq!(Operation::from_segment("modulo"), None);
        assert_eq!(Operation::from_segment(""), None);
    }

    #[tokio::test]
    async fn test_multiply_response_shape() {
        let resp = handle_operation(Operation::Multiply, "6", "7");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Type"], "application/json");
        assert_eq!(
            body_string(resp).await,
            r#"{"operation":"multiply","a":6,"b":7,"result":42}"#
        );
    }

    #[tokio::test]
    async fn test_add_negative_operands() {
        let resp = handle_operation(Operation::Add, "-3", "7");
        assert_eq!(
            body_string(resp).await,
            r#"{"operation":"add","a":-3,"b":7,"result":4}"#
        );
    }

    #[tokio::test]
    async fn test_subtract() {
        let resp = handle_operation(Operation::Subtract, "20", "8");
        assert_eq!(
            body_string(resp).await,
            r#"{"operation":"subtract","a":20,"b":8,"result":12}"#
        );
    }

    #[tokio::test]
    async fn test_divide_keeps_two_decimals() {
        let resp = handle_operation(Operation::Divide, "50", "5");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            body_string(resp).await,
            r#"{"operation":"divide","a":50,"b":5,"result":10.00}"#
        );
    }

    #[tokio::test]
    async fn test_divide_rounds_fraction() {
        let resp = handle_operation(Operation::Divide, "1", "3");
        assert_eq!(
            body_string(resp).await,
            r#"{"operation":"divide","a":1,"b":3,"result":0.33}"#
        );
    }

    #[tokio::test]
    async fn test_divide_by_zero() {
        let resp = handle_operation(Operation::Divide, "5", "0");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_string(resp).await,
            r#"{"error":"Cannot divide by zero"}"#
        );
    }

    #[tokio::test]
    async fn test_invalid_first_operand() {
        let resp = handle_operation(Operation::Add, "foo", "3");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_string(resp).await,
            r#"{"error":"Invalid numbers provided"}"#
        );
    }

    #[tokio::test]
    async fn test_invalid_second_operand() {
        let resp = handle_operation(Operation::Multiply, "4", "4.5");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_string(resp).await,
            r#"{"error":"Invalid numbers provided"}"#
        );
    }

    #[tokio::test]
    async fn test_health_payload() {
        let resp = handle_health();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_string(resp).await;
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["status"], "UP");
        assert_eq!(value["application"], APP_NAME);
        assert_eq!(value["version"], APP_VERSION);
    }
}
