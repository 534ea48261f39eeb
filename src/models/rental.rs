//! Rental (lease) model and related types

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Lifecycle state of a rental. A rental is created `active` and moves to
/// `completed` exactly once, when the tool is returned; rows are never
/// deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    Active,
    Completed,
}

impl RentalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Active => "active",
            RentalStatus::Completed => "completed",
        }
    }
}

impl From<&str> for RentalStatus {
    fn from(s: &str) -> Self {
        match s {
            "completed" => RentalStatus::Completed,
            _ => RentalStatus::Active,
        }
    }
}

impl std::fmt::Display for RentalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Renter's view of a rental, joined with the tool and owner display fields.
/// The joins are LEFT so history still renders after a listing is removed.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RentalDetails {
    pub rental_id: i32,
    pub tool_id: Option<i32>,
    pub status: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: Decimal,
    pub tool_name: Option<String>,
    pub category: Option<String>,
    pub tool_image: Option<String>,
    pub owner_name: Option<String>,
}

/// Priced rental window: total cost and start/end dates for a day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalQuote {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_price: Decimal,
}

impl RentalQuote {
    /// Price a rental of `days` calendar days starting at `start_date`.
    ///
    /// The end date is start + N days, rolling over month and year
    /// boundaries; the total is price-per-day times the day count.
    pub fn compute(price_per_day: Decimal, days: i64, start_date: DateTime<Utc>) -> Self {
        Self {
            start_date,
            end_date: start_date + Duration::days(days),
            total_price: price_per_day * Decimal::from(days),
        }
    }
}

/// Aggregated earnings and active rental count for a lender. Always zeroed
/// when the owner has no active rentals, never null.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LenderStats {
    pub total_earnings: Decimal,
    pub active_rentals: i64,
}
