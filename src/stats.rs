//! Batch-level risk summary
//!
//! A second pass over the scored batch, bucketing transactions by risk
//! category for the dashboard's summary cards and filters.

use crate::scorer::{RiskCategory, ScoredTransaction};
use serde::{Deserialize, Serialize};

/// Counts and percentages of low/medium/high risk transactions.
///
/// Percentages are pre-formatted to one decimal place, `"0.0"` for an
/// empty batch, matching what the dashboard renders verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStats {
    pub total_transactions: usize,
    pub high_risk_count: usize,
    pub medium_risk_count: usize,
    pub low_risk_count: usize,
    pub high_risk_percentage: String,
    pub medium_risk_percentage: String,
    pub low_risk_percentage: String,
}

impl TransactionStats {
    /// Aggregate a scored batch into category counts and percentages.
    pub fn from_scored(transactions: &[ScoredTransaction]) -> Self {
        let total = transactions.len();
        let mut low = 0;
        let mut medium = 0;
        let mut high = 0;
        for transaction in transactions {
            match transaction.risk_category {
                RiskCategory::Low => low += 1,
                RiskCategory::Medium => medium += 1,
                RiskCategory::High => high += 1,
            }
        }

        Self {
            total_transactions: total,
            high_risk_count: high,
            medium_risk_count: medium,
            low_risk_count: low,
            high_risk_percentage: percentage(high, total),
            medium_risk_percentage: percentage(medium, total),
            low_risk_percentage: percentage(low, total),
        }
    }
}

fn percentage(count: usize, total: usize) -> String {
    if total == 0 {
        "0.0".to_string()
    } else {
        format!("{:.1}", count as f64 / total as f64 * 100.0)
    }
}
