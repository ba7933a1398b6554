//! Buyer dashboard: purchased agents and spend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use agentmart_core::Money;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    Active,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub listing_name: String,
    pub amount: Money,
    pub purchased_at: DateTime<Utc>,
    pub status: PurchaseStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSummary {
    /// Every purchase counts, cancelled ones included.
    pub total_spent: Money,
    pub active_count: usize,
    /// Newest first.
    pub history: Vec<PurchaseRecord>,
}

impl PurchaseSummary {
    pub fn from_records(records: impl IntoIterator<Item = PurchaseRecord>) -> Self {
        let mut history: Vec<PurchaseRecord> = records.into_iter().collect();
        history.sort_by(|a, b| b.purchased_at.cmp(&a.purchased_at));

        let total_spent = history
            .iter()
            .fold(Money::ZERO, |sum, record| sum.saturating_add(record.amount));
        let active_count = history
            .iter()
            .filter(|record| record.status == PurchaseStatus::Active)
            .count();

        Self {
            total_spent,
            active_count,
            history,
        }
    }

    pub fn latest(&self) -> Option<&PurchaseRecord> {
        self.history.first()
    }
}
