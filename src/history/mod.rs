//! History and persistence layer.
//!
//! Every successful evaluation is stored as an immutable
//! [`CalculationRecord`]. PostgreSQL backs the service in production; the
//! in-memory store is used for `--in-memory` runs and tests.

mod memory;
mod record;
mod store;

pub use memory::MemoryStore;
pub use record::CalculationRecord;
pub use store::Store;
