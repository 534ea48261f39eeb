//! Rentals repository: the rental lifecycle and the availability coupling

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        rental::{LenderStats, RentalDetails, RentalQuote, RentalStatus},
        tool::ToolStatus,
    },
};

#[derive(Clone)]
pub struct RentalsRepository {
    pool: Pool<Postgres>,
}

impl RentalsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Create a rental: price the window, flip the tool to `rented` and
    /// insert the rental row, all in one transaction.
    ///
    /// The status flip is a conditional update gated on the tool still being
    /// available; its affected-row count is the authoritative success signal.
    /// Concurrent rent attempts against the same tool serialize on the tool
    /// row, so exactly one of them wins and the rest see a conflict. The
    /// rental insert is gated on the flip, so the two writes always commit
    /// together or not at all.
    pub async fn create(
        &self,
        tool_id: i32,
        renter_id: &str,
        days: i64,
    ) -> AppResult<(i32, RentalQuote)> {
        let mut tx = self.pool.begin().await?;

        let price = sqlx::query_scalar::<_, rust_decimal::Decimal>(
            r#"
            UPDATE tools
            SET status = $1
            WHERE tool_id = $2 AND status = $3
            RETURNING price
            "#,
        )
        .bind(ToolStatus::Rented.as_str())
        .bind(tool_id)
        .bind(ToolStatus::Available.as_str())
        .fetch_optional(&mut *tx)
        .await?;

        let price = match price {
            Some(price) => price,
            None => {
                let exists: bool =
                    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tools WHERE tool_id = $1)")
                        .bind(tool_id)
                        .fetch_one(&mut *tx)
                        .await?;

                return Err(if exists {
                    AppError::Conflict("This tool is no longer available.".to_string())
                } else {
                    AppError::NotFound("Tool not found".to_string())
                });
            }
        };

        let quote = RentalQuote::compute(price, days, Utc::now());

        let rental_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO rentals (tool_id, renter_id, start_date, end_date, total_price, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING rental_id
            "#,
        )
        .bind(tool_id)
        .bind(renter_id)
        .bind(quote.start_date)
        .bind(quote.end_date)
        .bind(quote.total_price)
        .bind(RentalStatus::Active.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((rental_id, quote))
    }

    /// Complete a rental and release its tool in one transaction.
    ///
    /// The tool to release is taken from the rental row itself, never from
    /// the caller; the completion is conditional on the rental still being
    /// active, so a double return surfaces as a conflict instead of silently
    /// re-completing.
    pub async fn complete(&self, rental_id: i32) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let tool_id = sqlx::query_scalar::<_, Option<i32>>(
            r#"
            UPDATE rentals
            SET status = $1
            WHERE rental_id = $2 AND status = $3
            RETURNING tool_id
            "#,
        )
        .bind(RentalStatus::Completed.as_str())
        .bind(rental_id)
        .bind(RentalStatus::Active.as_str())
        .fetch_optional(&mut *tx)
        .await?;

        let tool_id = match tool_id {
            Some(tool_id) => tool_id,
            None => {
                let exists: bool = sqlx::query_scalar(
                    "SELECT EXISTS(SELECT 1 FROM rentals WHERE rental_id = $1)",
                )
                .bind(rental_id)
                .fetch_one(&mut *tx)
                .await?;

                return Err(if exists {
                    AppError::Conflict(format!("Rental {} has already been returned", rental_id))
                } else {
                    AppError::NotFound(format!("Rental with id {} not found", rental_id))
                });
            }
        };

        // An active rental without a tool cannot normally exist: the delete
        // guard refuses to remove an actively rented listing. If it does
        // happen there is simply nothing left to release.
        match tool_id {
            Some(tool_id) => {
                let released = sqlx::query("UPDATE tools SET status = $1 WHERE tool_id = $2")
                    .bind(ToolStatus::Available.as_str())
                    .bind(tool_id)
                    .execute(&mut *tx)
                    .await?
                    .rows_affected();

                if released == 0 {
                    tracing::warn!(
                        rental_id,
                        tool_id,
                        "rental completed but its tool row is gone"
                    );
                }
            }
            None => {
                tracing::warn!(rental_id, "completed a rental whose listing no longer exists");
            }
        }

        tx.commit().await?;

        Ok(())
    }

    /// The tool a rental is for, if the rental exists.
    pub async fn tool_of(&self, rental_id: i32) -> AppResult<Option<i32>> {
        let tool_id = sqlx::query_scalar::<_, Option<i32>>(
            "SELECT tool_id FROM rentals WHERE rental_id = $1",
        )
        .bind(rental_id)
        .fetch_optional(&self.pool)
        .await?
        .flatten();

        Ok(tool_id)
    }

    /// A renter's rentals, newest first, joined with tool and owner display
    /// fields where they still exist.
    pub async fn list_by_renter(&self, renter_id: &str) -> AppResult<Vec<RentalDetails>> {
        let rentals = sqlx::query_as::<_, RentalDetails>(
            r#"
            SELECT r.rental_id, r.tool_id, r.status, r.start_date, r.end_date,
                   r.total_price,
                   t.tool_name, t.category, t.tool_image,
                   u.user_name AS owner_name
            FROM rentals r
            LEFT JOIN tools t ON r.tool_id = t.tool_id
            LEFT JOIN users u ON t.owner_id = u.user_id
            WHERE r.renter_id = $1
            ORDER BY r.start_date DESC
            "#,
        )
        .bind(renter_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rentals)
    }

    /// Earnings and active rental count for a lender. The SUM over an empty
    /// set is NULL in SQL; COALESCE pins it to zero before it leaves the
    /// store.
    pub async fn lender_stats(&self, owner_id: &str) -> AppResult<LenderStats> {
        let stats = sqlx::query_as::<_, LenderStats>(
            r#"
            SELECT COALESCE(SUM(r.total_price), 0) AS total_earnings,
                   COUNT(r.rental_id) AS active_rentals
            FROM rentals r
            JOIN tools t ON r.tool_id = t.tool_id
            WHERE t.owner_id = $1 AND r.status = $2
            "#,
        )
        .bind(owner_id)
        .bind(RentalStatus::Active.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }
}
