//! Request and response DTOs for the HTTP API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of every operation endpoint.
///
/// `operands` stays untyped here and is converted by
/// [`Operands::from_json`](crate::calc::Operands::from_json), so a
/// non-numeric element is reported as invalid operands rather than a
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
    #[serde(default)]
    pub operands: Value,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
