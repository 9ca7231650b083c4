//! Per-batch baseline statistics
//!
//! Computed once per scoring invocation and shared by every per-transaction
//! rule evaluation. Nothing here survives across invocations.

use crate::Transaction;
use chrono::Timelike;
use std::collections::HashMap;

/// Baseline metrics derived from one user's full transaction batch
#[derive(Debug, Clone)]
pub struct BatchBaseline {
    /// Arithmetic mean of all amounts
    pub average_amount: f64,
    /// Population standard deviation of amounts (divide by N, not N-1)
    pub std_dev_amount: f64,
    /// Transactions per hour of day
    pub hour_counts: [usize; 24],
    /// Most frequent normalized locations, highest count first,
    /// ties broken by first appearance in the batch
    pub common_locations: Vec<String>,
    /// Most frequent devices, same ordering as locations
    pub common_devices: Vec<String>,
    /// Occurrences of each recipient id across the batch
    pub recipient_counts: HashMap<String, usize>,
    /// Batch size
    pub total: usize,
}

impl BatchBaseline {
    /// Compute the baseline over a batch, keeping at most `common_limit`
    /// entries in each frequency ranking.
    pub fn compute(transactions: &[Transaction], common_limit: usize) -> Self {
        let total = transactions.len();

        let average_amount = if total == 0 {
            0.0
        } else {
            transactions.iter().map(|t| t.amount).sum::<f64>() / total as f64
        };

        let std_dev_amount = if total == 0 {
            0.0
        } else {
            let variance = transactions
                .iter()
                .map(|t| (t.amount - average_amount).powi(2))
                .sum::<f64>()
                / total as f64;
            variance.sqrt()
        };

        let mut hour_counts = [0usize; 24];
        let mut recipient_counts: HashMap<String, usize> = HashMap::new();
        for transaction in transactions {
            hour_counts[transaction.timestamp.hour() as usize] += 1;
            if let Some(recipient) = &transaction.recipient_id {
                *recipient_counts.entry(recipient.clone()).or_insert(0) += 1;
            }
        }

        let common_locations = top_frequent(
            transactions
                .iter()
                .filter_map(|t| t.location.as_ref())
                .map(|l| l.display_key()),
            common_limit,
        );
        let common_devices = top_frequent(
            transactions.iter().filter_map(|t| t.device.clone()),
            common_limit,
        );

        Self {
            average_amount,
            std_dev_amount,
            hour_counts,
            common_locations,
            common_devices,
            recipient_counts,
            total,
        }
    }

    /// Fraction of the batch falling in the given hour bucket
    pub fn hour_ratio(&self, hour: u32) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.hour_counts[hour as usize % 24] as f64 / self.total as f64
        }
    }
}

/// Rank values by occurrence count, descending. The stable sort over
/// first-seen insertion order gives deterministic tie-breaking.
fn top_frequent<I>(values: I, limit: usize) -> Vec<String>
where
    I: Iterator<Item = String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut first_seen: Vec<String> = Vec::new();

    for value in values {
        let count = counts.entry(value.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(value);
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = first_seen
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            (value, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(limit)
        .map(|(value, _)| value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Location, TransactionStatus};
    use chrono::{TimeZone, Utc};

    fn transaction(id: &str, amount: f64, hour: u32) -> Transaction {
        Transaction {
            id: id.to_string(),
            amount,
            timestamp: Utc.with_ymd_and_hms(2025, 6, 2, hour, 0, 0).unwrap(),
            transaction_type: "DEBIT".to_string(),
            status: TransactionStatus::Completed,
            location: None,
            device: None,
            ip_address: None,
            ip_country: None,
            recipient_id: None,
            description: None,
        }
    }

    #[test]
    fn test_mean_and_population_std_dev() {
        let batch = vec![
            transaction("A", 2.0, 10),
            transaction("B", 4.0, 11),
            transaction("C", 4.0, 12),
            transaction("D", 4.0, 13),
            transaction("E", 5.0, 14),
            transaction("F", 5.0, 15),
            transaction("G", 7.0, 16),
            transaction("H", 9.0, 17),
        ];

        let baseline = BatchBaseline::compute(&batch, 3);
        assert!((baseline.average_amount - 5.0).abs() < 1e-9);
        // Population std dev of the classic [2,4,4,4,5,5,7,9] sample is 2
        assert!((baseline.std_dev_amount - 2.0).abs() < 1e-9);
        assert_eq!(baseline.total, 8);
    }

    #[test]
    fn test_empty_batch_yields_zeroed_baseline() {
        let baseline = BatchBaseline::compute(&[], 3);
        assert_eq!(baseline.total, 0);
        assert_eq!(baseline.average_amount, 0.0);
        assert_eq!(baseline.std_dev_amount, 0.0);
        assert!(baseline.common_locations.is_empty());
        assert!(baseline.common_devices.is_empty());
        assert_eq!(baseline.hour_ratio(10), 0.0);
    }

    #[test]
    fn test_hour_counts() {
        let batch = vec![
            transaction("A", 10.0, 9),
            transaction("B", 10.0, 9),
            transaction("C", 10.0, 14),
            transaction("D", 10.0, 23),
        ];

        let baseline = BatchBaseline::compute(&batch, 3);
        assert_eq!(baseline.hour_counts[9], 2);
        assert_eq!(baseline.hour_counts[14], 1);
        assert_eq!(baseline.hour_counts[23], 1);
        assert!((baseline.hour_ratio(9) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_common_locations_rank_by_count_then_first_seen() {
        let mut batch = Vec::new();
        let places = [
            "Delhi", "Mumbai", "Delhi", "Pune", "Goa", "Pune", "Delhi", "Kochi",
        ];
        for (i, place) in places.iter().enumerate() {
            let mut t = transaction(&format!("T{}", i), 10.0, 10);
            t.location = Some(Location::Raw(place.to_string()));
            batch.push(t);
        }

        let baseline = BatchBaseline::compute(&batch, 3);
        // Delhi x3, Pune x2, then Mumbai and Goa and Kochi tie at 1;
        // Mumbai was seen first among the ties
        assert_eq!(baseline.common_locations, vec!["Delhi", "Pune", "Mumbai"]);
    }

    #[test]
    fn test_common_devices_limit() {
        let mut batch = Vec::new();
        for (i, device) in ["ios", "android", "web", "atm"].iter().enumerate() {
            let mut t = transaction(&format!("T{}", i), 10.0, 10);
            t.device = Some(device.to_string());
            batch.push(t);
        }

        let baseline = BatchBaseline::compute(&batch, 3);
        assert_eq!(baseline.common_devices, vec!["ios", "android", "web"]);
    }

    #[test]
    fn test_recipient_counts() {
        let mut batch = vec![
            transaction("A", 10.0, 10),
            transaction("B", 10.0, 11),
            transaction("C", 10.0, 12),
        ];
        batch[0].recipient_id = Some("ACC-1".to_string());
        batch[1].recipient_id = Some("ACC-1".to_string());
        batch[2].recipient_id = Some("ACC-2".to_string());

        let baseline = BatchBaseline::compute(&batch, 3);
        assert_eq!(baseline.recipient_counts["ACC-1"], 2);
        assert_eq!(baseline.recipient_counts["ACC-2"], 1);
    }
}
