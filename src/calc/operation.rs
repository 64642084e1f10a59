//! Supported arithmetic operations.

use serde::{Deserialize, Serialize};

/// How many operands an operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    AtLeast(usize),
    Exactly(usize),
}

impl Arity {
    /// Returns true if `count` operands satisfy this arity.
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::AtLeast(min) => count >= min,
            Arity::Exactly(n) => count == n,
        }
    }
}

/// An arithmetic operation over a list of operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponent,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Exponent,
    ];

    /// Lowercase name, as used in routes and persisted records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Exponent => "exponent",
        }
    }

    pub fn arity(&self) -> Arity {
        match self {
            Operation::Add | Operation::Subtract | Operation::Multiply => Arity::AtLeast(2),
            Operation::Divide | Operation::Exponent => Arity::Exactly(2),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            "exponent" => Ok(Operation::Exponent),
            _ => Err(format!(
                "unknown operation '{}', expected 'add', 'subtract', 'multiply', 'divide', or 'exponent'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrips_display() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("modulo".parse::<Operation>().is_err());
        assert!("Add".parse::<Operation>().is_err());
    }

    #[test]
    fn test_arity() {
        assert!(Operation::Add.arity().accepts(2));
        assert!(Operation::Add.arity().accepts(7));
        assert!(!Operation::Multiply.arity().accepts(1));
        assert!(Operation::Divide.arity().accepts(2));
        assert!(!Operation::Divide.arity().accepts(3));
        assert!(!Operation::Exponent.arity().accepts(1));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Operation::Exponent).unwrap();
        assert_eq!(json, "\"exponent\"");
        let op: Operation = serde_json::from_str("\"subtract\"").unwrap();
        assert_eq!(op, Operation::Subtract);
    }
}
