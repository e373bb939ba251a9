//! PostgreSQL Repository Implementations

use kernel::error::conversions::{PG_FOREIGN_KEY_VIOLATION, db_error_code};
use kernel::id::{CalculationId, UserId};
use kernel::page::Page;
use sqlx::PgPool;

use crate::domain::entities::{Calculation, EvaluatedCalculation};
use crate::domain::repository::CalculationRepository;
use crate::domain::services::resolve;
use crate::error::{CalcResult, CalculationError};

const CALCULATION_COLUMNS: &str = "id, a, b, type, result, user_id, created_at";

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgCalculationRepository {
    pool: PgPool,
}

impl PgCalculationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CalculationRepository for PgCalculationRepository {
    async fn create(
        &self,
        calculation: &EvaluatedCalculation,
        user_id: Option<UserId>,
    ) -> CalcResult<Calculation> {
        let sql = format!(
            "INSERT INTO calculations (a, b, type, result, user_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {CALCULATION_COLUMNS}"
        );

        let row = sqlx::query_as::<_, CalculationRow>(&sql)
            .bind(calculation.a())
            .bind(calculation.b())
            .bind(calculation.calc_type().as_str())
            .bind(calculation.value())
            .bind(user_id.map(|id| id.get()))
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)?;

        row.into_calculation()
    }

    async fn find_by_id(&self, id: CalculationId) -> CalcResult<Option<Calculation>> {
        let sql = format!("SELECT {CALCULATION_COLUMNS} FROM calculations WHERE id = $1");

        let row = sqlx::query_as::<_, CalculationRow>(&sql)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        row.map(CalculationRow::into_calculation).transpose()
    }

    async fn list(&self, user_id: Option<UserId>, page: Page) -> CalcResult<Vec<Calculation>> {
        let sql = format!(
            "SELECT {CALCULATION_COLUMNS} FROM calculations \
             WHERE ($1::BIGINT IS NULL OR user_id = $1) \
             ORDER BY id \
             OFFSET $2 LIMIT $3"
        );

        let rows = sqlx::query_as::<_, CalculationRow>(&sql)
            .bind(user_id.map(|id| id.get()))
            .bind(page.offset())
            .bind(page.limit())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(CalculationRow::into_calculation).collect()
    }

    async fn update(
        &self,
        id: CalculationId,
        calculation: &EvaluatedCalculation,
    ) -> CalcResult<Option<Calculation>> {
        let sql = format!(
            "UPDATE calculations SET a = $2, b = $3, type = $4, result = $5 \
             WHERE id = $1 \
             RETURNING {CALCULATION_COLUMNS}"
        );

        let row = sqlx::query_as::<_, CalculationRow>(&sql)
            .bind(id.get())
            .bind(calculation.a())
            .bind(calculation.b())
            .bind(calculation.calc_type().as_str())
            .bind(calculation.value())
            .fetch_optional(&self.pool)
            .await?;

        row.map(CalculationRow::into_calculation).transpose()
    }

    async fn delete(&self, id: CalculationId) -> CalcResult<bool> {
        let result = sqlx::query("DELETE FROM calculations WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_write_error(err: sqlx::Error) -> CalculationError {
    match db_error_code(&err).as_deref() {
        Some(PG_FOREIGN_KEY_VIOLATION) => CalculationError::OwnerNotFound,
        _ => CalculationError::Database(err),
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct CalculationRow {
    id: i64,
    a: f64,
    b: f64,
    #[sqlx(rename = "type")]
    calc_type: String,
    result: Option<f64>,
    user_id: Option<i64>,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl CalculationRow {
    fn into_calculation(self) -> CalcResult<Calculation> {
        let calc_type = resolve(&self.calc_type).map_err(|_| {
            CalculationError::Internal(format!(
                "calculation {} has unknown stored type '{}'",
                self.id, self.calc_type
            ))
        })?;

        Ok(Calculation {
            id: CalculationId::from_i64(self.id),
            a: self.a,
            b: self.b,
            calc_type,
            result: self.result,
            user_id: self.user_id.map(UserId::from_i64),
            created_at: self.created_at,
        })
    }
}
