//! Tools repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        rental::RentalStatus,
        tool::{CreateTool, OwnerListing, ToolStatus, ToolWithOwner, UpdateTool},
    },
};

#[derive(Clone)]
pub struct ToolsRepository {
    pool: Pool<Postgres>,
}

impl ToolsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new listing, returning its generated id. New listings start
    /// out available.
    pub async fn create(&self, tool: &CreateTool) -> AppResult<i32> {
        let tool_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO tools (owner_id, tool_name, category, price, tool_image, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING tool_id
            "#,
        )
        .bind(&tool.owner_id)
        .bind(&tool.tool_name)
        .bind(&tool.category)
        .bind(tool.price)
        .bind(&tool.tool_image)
        .bind(ToolStatus::Available.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(tool_id)
    }

    /// Update a listing's display fields. Status is deliberately not
    /// touchable here; only the rentals repository moves it.
    pub async fn update(&self, update: &UpdateTool) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE tools
            SET tool_name = $1, category = $2, price = $3, tool_image = $4
            WHERE tool_id = $5
            "#,
        )
        .bind(&update.tool_name)
        .bind(&update.category)
        .bind(update.price)
        .bind(&update.tool_image)
        .bind(update.tool_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// All currently available tools with their owner's display fields,
    /// newest listings first.
    pub async fn list_available(&self) -> AppResult<Vec<ToolWithOwner>> {
        let tools = sqlx::query_as::<_, ToolWithOwner>(
            r#"
            SELECT t.tool_id, t.owner_id, t.tool_name, t.category, t.price,
                   t.tool_image, t.status, t.created_at,
                   u.user_name AS owner_name, u.user_image AS owner_image
            FROM tools t
            JOIN users u ON t.owner_id = u.user_id
            WHERE t.status = $1
            ORDER BY t.tool_id DESC
            "#,
        )
        .bind(ToolStatus::Available.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(tools)
    }

    /// An owner's listings, each joined with its active rental (if any) and
    /// the renter's name, newest first.
    pub async fn list_by_owner(&self, owner_id: &str) -> AppResult<Vec<OwnerListing>> {
        let listings = sqlx::query_as::<_, OwnerListing>(
            r#"
            SELECT t.tool_id, t.owner_id, t.tool_name, t.category, t.price,
                   t.tool_image, t.status, t.created_at,
                   r.start_date, r.end_date,
                   u.user_name AS renter_name
            FROM tools t
            LEFT JOIN rentals r ON t.tool_id = r.tool_id AND r.status = $2
            LEFT JOIN users u ON r.renter_id = u.user_id
            WHERE t.owner_id = $1
            ORDER BY t.tool_id DESC
            "#,
        )
        .bind(owner_id)
        .bind(RentalStatus::Active.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(listings)
    }

    /// Delete a listing unless it is out on an active rental.
    ///
    /// The tool row is locked first so the check and the delete cannot
    /// interleave with a concurrent rental creation: whichever transaction
    /// takes the row lock first wins, and the loser observes the committed
    /// outcome.
    pub async fn delete_guarded(&self, tool_id: i32) -> AppResult<u64> {
        let mut tx = self.pool.begin().await?;

        let locked: Option<i32> =
            sqlx::query_scalar("SELECT tool_id FROM tools WHERE tool_id = $1 FOR UPDATE")
                .bind(tool_id)
                .fetch_optional(&mut *tx)
                .await?;

        if locked.is_none() {
            return Err(AppError::NotFound(format!(
                "Tool with id {} not found",
                tool_id
            )));
        }

        let actively_rented: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM rentals WHERE tool_id = $1 AND status = $2)",
        )
        .bind(tool_id)
        .bind(RentalStatus::Active.as_str())
        .fetch_one(&mut *tx)
        .await?;

        if actively_rented {
            return Err(AppError::Conflict(
                "Cannot delete this tool because it is currently rented out.".to_string(),
            ));
        }

        let affected = sqlx::query("DELETE FROM tools WHERE tool_id = $1")
            .bind(tool_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        Ok(affected)
    }
}
