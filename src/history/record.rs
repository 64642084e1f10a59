use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::calc::{NewCalculation, Operation};

/// A persisted calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    pub id: i64,
    pub operation: Operation,
    pub operands: Vec<f64>,
    /// Serialized as `null` when non-finite.
    pub result: f64,
    pub created_at: DateTime<Utc>,
}

impl CalculationRecord {
    /// Attach the store-assigned identity to an evaluated calculation.
    pub fn from_new(calculation: &NewCalculation, id: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            operation: calculation.operation(),
            operands: calculation.operands().as_slice().to_vec(),
            result: calculation.result(),
            created_at,
        }
    }
}
