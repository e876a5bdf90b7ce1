use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{ApiError, DonationId};

/// A single donation record: money, food, clothing, or anything else a
/// donor contributed.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Donation {
    pub id: DonationId,
    pub donor_name: String,
    /// Free-form category. The client constrains choices to
    /// money/food/clothing/other, but the store does not enforce the enum.
    #[serde(rename = "type")]
    #[sqlx(rename = "donation_type")]
    pub donation_type: String,
    /// Currency amount or quantity, depending on the type.
    pub amount: f64,
    /// Assigned by the store at creation time; never altered by updates.
    pub date: DateTime<Utc>,
}

/// Request body for creating or replacing a donation:
/// `{donor_name, type, amount}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationInput {
    pub donor_name: String,
    #[serde(rename = "type")]
    pub donation_type: String,
    pub amount: f64,
}

impl DonationInput {
    /// Validate the field set before it reaches the store.
    ///
    /// Required-field presence and `amount` being numeric are already
    /// enforced by deserialization; this rejects blank text fields.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.donor_name.trim().is_empty() {
            return Err(ApiError::Validation(
                "donor_name is required and must not be empty".to_string(),
            ));
        }
        if self.donation_type.trim().is_empty() {
            return Err(ApiError::Validation(
                "type is required and must not be empty".to_string(),
            ));
        }
        if !self.amount.is_finite() {
            return Err(ApiError::Validation(
                "amount must be a finite number".to_string(),
            ));
        }
        Ok(())
    }
}

impl Donation {
    /// Fetch every donation in the collection's natural (insertion) order.
    ///
    /// IDs are time-ordered UUIDs, so ordering by the primary key reproduces
    /// insertion order.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        let donations = sqlx::query_as::<_, Self>(
            r#"
            SELECT *
            FROM donations
            ORDER BY id ASC
            "#,
        )
        .fetch_all(pool)
        .await?;
        Ok(donations)
    }

    /// Find a donation by ID.
    pub async fn find_by_id(id: DonationId, pool: &PgPool) -> Result<Option<Self>> {
        let donation = sqlx::query_as::<_, Self>("SELECT * FROM donations WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(donation)
    }

    /// Create a new donation. The store assigns the ID and the default
    /// `date` (creation time).
    pub async fn create(input: DonationInput, pool: &PgPool) -> Result<Self> {
        let donation = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO donations (id, donor_name, donation_type, amount)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(DonationId::new())
        .bind(&input.donor_name)
        .bind(&input.donation_type)
        .bind(input.amount)
        .fetch_one(pool)
        .await?;
        Ok(donation)
    }

    /// Replace the three mutable fields of an existing donation. `id` and
    /// `date` are untouched. Returns `None` when no row matched.
    pub async fn update(
        id: DonationId,
        input: DonationInput,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let donation = sqlx::query_as::<_, Self>(
            r#"
            UPDATE donations
            SET donor_name = $2, donation_type = $3, amount = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.donor_name)
        .bind(&input.donation_type)
        .bind(input.amount)
        .fetch_optional(pool)
        .await?;
        Ok(donation)
    }

    /// Delete a donation by ID. Returns whether a matching row existed.
    pub async fn delete(id: DonationId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM donations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
