//! Operation evaluator.
//!
//! Pure functions that validate operands and compute results. Nothing here
//! touches storage; handlers persist the [`NewCalculation`] produced here.

mod evaluator;
mod operation;

pub use evaluator::{NewCalculation, Operands, evaluate};
pub use operation::{Arity, Operation};
