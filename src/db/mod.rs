use async_trait::async_trait;

use crate::calc::NewCalculation;
use crate::error::DatabaseError;
use crate::history::CalculationRecord;

/// Database abstraction layer.
///
/// Handlers hold an `Arc<dyn Database>`; the backing store is chosen once at
/// startup.
#[async_trait]
pub trait Database: Send + Sync {
    /// Persist an evaluated calculation, assigning its id and creation time.
    async fn append_calculation(
        &self,
        calculation: &NewCalculation,
    ) -> Result<CalculationRecord, DatabaseError>;

    /// All persisted calculations, newest first.
    async fn list_calculations(&self) -> Result<Vec<CalculationRecord>, DatabaseError>;

    /// Release the underlying resources. Called once at shutdown.
    async fn close(&self) {}
}
