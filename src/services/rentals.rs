//! Rental lifecycle service

use crate::{
    error::{AppError, AppResult},
    models::rental::{LenderStats, RentalDetails, RentalQuote},
    repository::Repository,
};

#[derive(Clone)]
pub struct RentalsService {
    repository: Repository,
}

impl RentalsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Rent a tool for a number of calendar days
    pub async fn create_rental(
        &self,
        tool_id: i32,
        renter_id: &str,
        days: i64,
    ) -> AppResult<(i32, RentalQuote)> {
        if days < 1 {
            return Err(AppError::Validation(
                "Rental duration must be at least one day".to_string(),
            ));
        }
        self.repository.rentals.create(tool_id, renter_id, days).await
    }

    /// Return a rented tool.
    ///
    /// The tool to release is resolved from the rental record itself; the
    /// caller-supplied tool id is only cross-checked, and a mismatch is
    /// rejected instead of trusted.
    pub async fn return_rental(&self, rental_id: i32, claimed_tool_id: i32) -> AppResult<()> {
        if let Some(actual) = self.repository.rentals.tool_of(rental_id).await? {
            if actual != claimed_tool_id {
                return Err(AppError::Validation(format!(
                    "Rental {} is for tool {}, not tool {}",
                    rental_id, actual, claimed_tool_id
                )));
            }
        }
        self.repository.rentals.complete(rental_id).await
    }

    /// A renter's rental history
    pub async fn my_rentals(&self, renter_id: &str) -> AppResult<Vec<RentalDetails>> {
        self.repository.rentals.list_by_renter(renter_id).await
    }

    /// Earnings and active rental count for a lender
    pub async fn lender_stats(&self, owner_id: &str) -> AppResult<LenderStats> {
        self.repository.rentals.lender_stats(owner_id).await
    }
}
