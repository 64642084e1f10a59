//! In-process calculation store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::calc::NewCalculation;
use crate::db::Database;
use crate::error::DatabaseError;
use crate::history::CalculationRecord;

/// Keeps calculations in memory for the lifetime of the process.
///
/// Records are held in insertion order; ids start at 1.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<CalculationRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Database for MemoryStore {
    async fn append_calculation(
        &self,
        calculation: &NewCalculation,
    ) -> Result<CalculationRecord, DatabaseError> {
        let mut records = self.records.write().await;
        let id = records.len() as i64 + 1;
        let record = CalculationRecord::from_new(calculation, id, Utc::now());
        records.push(record.clone());
        Ok(record)
    }

    async fn list_calculations(&self) -> Result<Vec<CalculationRecord>, DatabaseError> {
        let records = self.records.read().await;
        let mut listed = records.clone();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(listed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::calc::{Operands, Operation};

    fn calc(op: Operation, values: &[f64]) -> NewCalculation {
        NewCalculation::compute(op, Operands::new(values.to_vec())).unwrap()
    }

    #[tokio::test]
    async fn test_append_assigns_ids_in_order() {
        let store = MemoryStore::new();
        let first = store
            .append_calculation(&calc(Operation::Add, &[1.0, 2.0]))
            .await
            .unwrap();
        let second = store
            .append_calculation(&calc(Operation::Multiply, &[3.0, 4.0]))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.created_at >= first.created_at);
        assert_eq!(second.result, 12.0);
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let store = MemoryStore::new();
        for n in 1..=5 {
            store
                .append_calculation(&calc(Operation::Add, &[n as f64, 0.0]))
                .await
                .unwrap();
        }

        let listed = store.list_calculations().await.unwrap();
        assert_eq!(listed.len(), 5);
        let ids: Vec<i64> = listed.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
        assert!(listed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let store = MemoryStore::new();
        assert!(store.list_calculations().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_all_kept() {
        let store = Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..16)
            .map(|n| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .append_calculation(&calc(Operation::Add, &[n as f64, 1.0]))
                        .await
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        let listed = store.list_calculations().await.unwrap();
        assert_eq!(listed.len(), 16);
        let mut ids: Vec<i64> = listed.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=16).collect::<Vec<_>>());
    }
}
