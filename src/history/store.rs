//! PostgreSQL store for persisting calculations.

use async_trait::async_trait;
use deadpool_postgres::{Config, Pool, Runtime};
use tokio_postgres::{NoTls, Row};

use crate::calc::{NewCalculation, Operation};
use crate::config::DatabaseConfig;
use crate::db::Database;
use crate::error::DatabaseError;
use crate::history::CalculationRecord;

mod embedded {
    refinery::embed_migrations!("migrations");
}

/// Database store for calculations.
pub struct Store {
    pool: Pool,
}

impl Store {
    /// Create a new store and connect to the database.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let mut cfg = Config::new();
        cfg.url = Some(config.url().to_string());
        cfg.pool = Some(deadpool_postgres::PoolConfig {
            max_size: config.pool_size,
            ..Default::default()
        });

        let pool = cfg
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| DatabaseError::Pool(e.to_string()))?;

        // Test connection
        let _ = pool.get().await?;

        Ok(Self { pool })
    }

    /// Apply the embedded schema migrations.
    pub async fn run_migrations(&self) -> Result<(), DatabaseError> {
        let mut conn = self.conn().await?;
        let report = embedded::migrations::runner()
            .run_async(&mut **conn)
            .await?;

        for migration in report.applied_migrations() {
            tracing::info!(
                version = migration.version(),
                name = migration.name(),
                "Applied database migration"
            );
        }
        Ok(())
    }

    /// Get a connection from the pool.
    pub async fn conn(&self) -> Result<deadpool_postgres::Object, DatabaseError> {
        Ok(self.pool.get().await?)
    }
}

#[async_trait]
impl Database for Store {
    async fn append_calculation(
        &self,
        calculation: &NewCalculation,
    ) -> Result<CalculationRecord, DatabaseError> {
        let conn = self.conn().await?;
        let operation = calculation.operation().as_str();
        let operands = calculation.operands().as_slice();
        let result = calculation.result();

        let row = conn
            .query_one(
                r#"
                INSERT INTO calculations (operation, operands, result)
                VALUES ($1, $2, $3)
                RETURNING id, created_at
                "#,
                &[&operation, &operands, &result],
            )
            .await?;

        Ok(CalculationRecord::from_new(
            calculation,
            row.get("id"),
            row.get("created_at"),
        ))
    }

    async fn list_calculations(&self) -> Result<Vec<CalculationRecord>, DatabaseError> {
        let conn = self.conn().await?;
        let rows = conn
            .query(
                r#"
                SELECT id, operation, operands, result, created_at
                FROM calculations
                ORDER BY created_at DESC, id DESC
                "#,
                &[],
            )
            .await?;

        rows.iter().map(row_to_record).collect()
    }

    async fn close(&self) {
        self.pool.close();
    }
}

fn row_to_record(row: &Row) -> Result<CalculationRecord, DatabaseError> {
    let operation: String = row.get("operation");
    let operation = operation
        .parse::<Operation>()
        .map_err(DatabaseError::Query)?;

    Ok(CalculationRecord {
        id: row.get("id"),
        operation,
        operands: row.get("operands"),
        result: row.get("result"),
        created_at: row.get("created_at"),
    })
}
