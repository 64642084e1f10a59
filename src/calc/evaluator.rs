//! Operand validation and evaluation.

use serde_json::Value;

use crate::calc::Operation;
use crate::error::{EvalError, Result};

/// Validated list of numeric operands.
#[derive(Debug, Clone, PartialEq)]
pub struct Operands(Vec<f64>);

impl Operands {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Convert an untyped JSON value into operands.
    ///
    /// The value must be an array whose every element is a JSON number.
    pub fn from_json(value: &Value) -> Result<Self> {
        let items = value.as_array().ok_or(EvalError::InvalidOperands)?;
        items
            .iter()
            .map(|v| v.as_f64().ok_or(EvalError::InvalidOperands))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Compute `operation` over `operands`.
///
/// Exponentiation may yield infinite or NaN results; those are returned as-is.
pub fn evaluate(operation: Operation, operands: &Operands) -> Result<f64> {
    if !operation.arity().accepts(operands.len()) {
        return Err(EvalError::InvalidOperands);
    }

    let values = operands.as_slice();
    let result = match operation {
        Operation::Add => values.iter().copied().fold(0.0, |acc, v| acc + v),
        Operation::Subtract => values[1..].iter().fold(values[0], |acc, v| acc - v),
        Operation::Multiply => values.iter().copied().fold(1.0, |acc, v| acc * v),
        Operation::Divide => {
            let (a, b) = (values[0], values[1]);
            if b == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            a / b
        }
        Operation::Exponent => values[0].powf(values[1]),
    };

    Ok(result)
}

/// An evaluated calculation that has not been persisted yet.
///
/// Only constructible through [`NewCalculation::compute`], so every stored
/// result is the one the evaluator produced for its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCalculation {
    operation: Operation,
    operands: Operands,
    result: f64,
}

impl NewCalculation {
    /// Evaluate `operation` over `operands` and bundle the result with its inputs.
    pub fn compute(operation: Operation, operands: Operands) -> Result<Self> {
        let result = evaluate(operation, &operands)?;
        tracing::debug!(%operation, operands = operands.len(), result, "Evaluated calculation");
        Ok(Self {
            operation,
            operands,
            result,
        })
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn operands(&self) -> &Operands {
        &self.operands
    }

    pub fn result(&self) -> f64 {
        self.result
    }
}
