//! Rule-based transaction risk scoring
//!
//! The scorer is a pure batch transform: it reads one user's transaction
//! history, the user's profile, and an explicit "now" instant, and produces
//! one annotated transaction per input in the same order. All baselines are
//! recomputed from the input batch on every invocation.

use crate::baseline::BatchBaseline;
use crate::stats::TransactionStats;
use crate::{ScoreError, Transaction, TransactionStatus, UserProfile};
use chrono::{DateTime, Datelike, Duration, Timelike, Utc, Weekday};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Categorical tag identifying one triggered risk rule
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskFlag {
    StatisticalOutlier,
    UnusualAmount,
    HighAmount,
    RoundAmount,
    ExtremeVelocity,
    HighVelocity,
    FrequentActivity,
    RepeatedAmounts,
    UnusualHour,
    NonBusinessHours,
    WeekendTransaction,
    UncommonLocation,
    UncommonDevice,
    ForeignIp,
    SuspiciousIp,
    FailedTransaction,
    ExtendedPending,
    NewRecipient,
    NewAccountLargeTransaction,
    HighBalanceRatio,
    SuspiciousKeywords,
    Normal,
}

impl RiskFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskFlag::StatisticalOutlier => "statistical_outlier",
            RiskFlag::UnusualAmount => "unusual_amount",
            RiskFlag::HighAmount => "high_amount",
            RiskFlag::RoundAmount => "round_amount",
            RiskFlag::ExtremeVelocity => "extreme_velocity",
            RiskFlag::HighVelocity => "high_velocity",
            RiskFlag::FrequentActivity => "frequent_activity",
            RiskFlag::RepeatedAmounts => "repeated_amounts",
            RiskFlag::UnusualHour => "unusual_hour",
            RiskFlag::NonBusinessHours => "non_business_hours",
            RiskFlag::WeekendTransaction => "weekend_transaction",
            RiskFlag::UncommonLocation => "uncommon_location",
            RiskFlag::UncommonDevice => "uncommon_device",
            RiskFlag::ForeignIp => "foreign_ip",
            RiskFlag::SuspiciousIp => "suspicious_ip",
            RiskFlag::FailedTransaction => "failed_transaction",
            RiskFlag::ExtendedPending => "extended_pending",
            RiskFlag::NewRecipient => "new_recipient",
            RiskFlag::NewAccountLargeTransaction => "new_account_large_transaction",
            RiskFlag::HighBalanceRatio => "high_balance_ratio",
            RiskFlag::SuspiciousKeywords => "suspicious_keywords",
            RiskFlag::Normal => "normal",
        }
    }
}

impl std::fmt::Display for RiskFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse risk bucket for filtering and color-coding
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    /// Bucket a score: below 30 is low, 30 to 69 is medium, 70 and up is high.
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            RiskCategory::High
        } else if score >= 30 {
            RiskCategory::Medium
        } else {
            RiskCategory::Low
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskCategory::Low => write!(f, "low"),
            RiskCategory::Medium => write!(f, "medium"),
            RiskCategory::High => write!(f, "high"),
        }
    }
}

/// A transaction annotated with its risk assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredTransaction {
    #[serde(flatten)]
    pub transaction: Transaction,
    /// Clamped to [0, 100]
    pub risk_score: u8,
    /// Never empty; exactly `[Normal]` when no rule fired
    pub flags: Vec<RiskFlag>,
    /// One human-readable sentence per flag, for detail views
    pub evidence: Vec<String>,
    pub risk_category: RiskCategory,
}

/// Scored batch plus its aggregate summary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredBatch {
    pub transactions: Vec<ScoredTransaction>,
    pub stats: TransactionStats,
}

impl ScoredBatch {
    /// Export as JSON, e.g. for the caller's offline cache
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Transactions in one risk bucket
    pub fn with_category(&self, category: RiskCategory) -> Vec<&ScoredTransaction> {
        self.transactions
            .iter()
            .filter(|t| t.risk_category == category)
            .collect()
    }

    /// Transactions no older than `days` relative to `now`
    pub fn within_days(&self, days: i64, now: DateTime<Utc>) -> Vec<&ScoredTransaction> {
        self.transactions
            .iter()
            .filter(|t| (now - t.transaction.timestamp).num_days() <= days)
            .collect()
    }
}

/// Additive score deltas, one per rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleWeights {
    pub statistical_outlier: u32,
    pub unusual_amount: u32,
    pub high_amount: u32,
    pub round_amount: u32,
    pub extreme_velocity: u32,
    pub high_velocity: u32,
    pub frequent_activity: u32,
    pub repeated_amounts: u32,
    pub unusual_hour: u32,
    pub non_business_hours: u32,
    pub weekend_transaction: u32,
    pub uncommon_location: u32,
    pub uncommon_device: u32,
    pub foreign_ip: u32,
    pub suspicious_ip: u32,
    pub failed_transaction: u32,
    pub extended_pending: u32,
    pub new_recipient: u32,
    pub new_account_large_transaction: u32,
    pub high_balance_ratio: u32,
    pub suspicious_keywords: u32,
}

impl Default for RuleWeights {
    fn default() -> Self {
        Self {
            statistical_outlier: 40,
            unusual_amount: 25,
            high_amount: 10,
            round_amount: 5,
            extreme_velocity: 35,
            high_velocity: 25,
            frequent_activity: 10,
            repeated_amounts: 15,
            unusual_hour: 20,
            non_business_hours: 5,
            weekend_transaction: 5,
            uncommon_location: 15,
            uncommon_device: 15,
            foreign_ip: 30,
            suspicious_ip: 40,
            failed_transaction: 20,
            extended_pending: 15,
            new_recipient: 10,
            new_account_large_transaction: 25,
            high_balance_ratio: 20,
            suspicious_keywords: 15,
        }
    }
}

/// Scorer configuration: weights, thresholds, and watch lists
#[derive(Debug, Clone)]
pub struct ScorerConfig {
    pub weights: RuleWeights,
    /// Sigma multipliers for the tiered amount deviation rule
    pub outlier_sigma: f64,
    pub unusual_sigma: f64,
    pub elevated_sigma: f64,
    /// Round-amount rule: amount must be an exact multiple of the modulus
    /// and strictly above the floor
    pub round_amount_modulus: f64,
    pub round_amount_floor: f64,
    /// Velocity window around each transaction (exclusive of itself)
    pub velocity_window_hours: i64,
    /// Peer counts must strictly exceed these to trigger each tier
    pub extreme_velocity_peers: usize,
    pub high_velocity_peers: usize,
    pub frequent_activity_peers: usize,
    /// Nearby amounts within this epsilon count as identical
    pub identical_amount_epsilon: f64,
    pub identical_amount_min_peers: usize,
    /// Hours strictly below the start or strictly above the end are
    /// outside banking hours
    pub quiet_hour_start: u32,
    pub quiet_hour_end: u32,
    /// An off-hours bucket holding less than this share of the batch is
    /// unusual for the user
    pub rare_hour_ratio: f64,
    /// How many top locations/devices count as "common"
    pub common_value_limit: usize,
    pub pending_threshold_hours: i64,
    pub new_account_max_age_days: i64,
    pub new_account_min_amount: f64,
    pub balance_ratio: f64,
    pub suspicious_ips: Vec<String>,
    pub suspicious_keywords: Vec<String>,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            weights: RuleWeights::default(),
            outlier_sigma: 3.0,
            unusual_sigma: 2.0,
            elevated_sigma: 1.0,
            round_amount_modulus: 1000.0,
            round_amount_floor: 10_000.0,
            velocity_window_hours: 2,
            extreme_velocity_peers: 5,
            high_velocity_peers: 3,
            frequent_activity_peers: 1,
            identical_amount_epsilon: 0.01,
            identical_amount_min_peers: 2,
            quiet_hour_start: 6,
            quiet_hour_end: 23,
            rare_hour_ratio: 0.05,
            common_value_limit: 3,
            pending_threshold_hours: 24,
            new_account_max_age_days: 30,
            new_account_min_amount: 5000.0,
            balance_ratio: 0.7,
            suspicious_ips: vec!["192.168.1.100".to_string(), "10.0.0.1".to_string()],
            suspicious_keywords: vec![
                "urgent".to_string(),
                "emergency".to_string(),
                "help".to_string(),
                "investment".to_string(),
                "lottery".to_string(),
                "winner".to_string(),
                "bitcoin".to_string(),
                "crypto".to_string(),
            ],
        }
    }
}

/// One triggered rule: flag, score delta, and display evidence
#[derive(Debug, Clone)]
struct RiskSignal {
    flag: RiskFlag,
    weight: u32,
    evidence: String,
}

impl RiskSignal {
    fn new(flag: RiskFlag, weight: u32, evidence: String) -> Self {
        Self {
            flag,
            weight,
            evidence,
        }
    }
}

/// Transaction risk scorer
pub struct RiskScorer {
    config: ScorerConfig,
    /// Compiled case-insensitive alternation over the keyword list;
    /// absent when the list is empty
    keyword_pattern: Option<Regex>,
}

impl RiskScorer {
    /// Create a scorer with default configuration
    pub fn new() -> Self {
        Self::with_config(ScorerConfig::default()).expect("default configuration is valid")
    }

    /// Create a scorer with custom configuration
    pub fn with_config(config: ScorerConfig) -> Result<Self, ScoreError> {
        let keyword_pattern = build_keyword_pattern(&config.suspicious_keywords)?;
        Ok(Self {
            config,
            keyword_pattern,
        })
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Score a user's full transaction batch.
    ///
    /// Output order and count match the input exactly. An empty batch
    /// yields an empty result with zeroed stats. A negative or non-finite
    /// amount rejects the whole batch, since it would skew the baseline
    /// for every other transaction.
    pub fn score_batch(
        &self,
        transactions: &[Transaction],
        profile: &UserProfile,
        now: DateTime<Utc>,
    ) -> Result<ScoredBatch, ScoreError> {
        for transaction in transactions {
            if !transaction.amount.is_finite() || transaction.amount < 0.0 {
                return Err(ScoreError::InvalidAmount {
                    id: transaction.id.clone(),
                    amount: transaction.amount,
                });
            }
        }

        let baseline = BatchBaseline::compute(transactions, self.config.common_value_limit);
        let scored: Vec<ScoredTransaction> = transactions
            .iter()
            .map(|transaction| self.score_one(transaction, transactions, &baseline, profile, now))
            .collect();
        let stats = TransactionStats::from_scored(&scored);

        debug!(
            total = stats.total_transactions,
            high_risk = stats.high_risk_count,
            "scored transaction batch"
        );

        Ok(ScoredBatch {
            transactions: scored,
            stats,
        })
    }

    /// Evaluate every rule against one transaction, in fixed table order.
    fn score_one(
        &self,
        transaction: &Transaction,
        batch: &[Transaction],
        baseline: &BatchBaseline,
        profile: &UserProfile,
        now: DateTime<Utc>,
    ) -> ScoredTransaction {
        let peers = self.nearby_peers(transaction, batch);
        let mut signals = Vec::new();

        if let Some(signal) = self.check_amount_deviation(transaction, baseline) {
            signals.push(signal);
        }
        if let Some(signal) = self.check_round_amount(transaction) {
            signals.push(signal);
        }
        if let Some(signal) = self.check_velocity(&peers) {
            signals.push(signal);
        }
        if let Some(signal) = self.check_repeated_amounts(transaction, &peers) {
            signals.push(signal);
        }
        if let Some(signal) = self.check_transaction_hour(transaction, baseline) {
            signals.push(signal);
        }
        if let Some(signal) = self.check_weekend(transaction) {
            signals.push(signal);
        }
        if let Some(signal) = self.check_uncommon_location(transaction, baseline) {
            signals.push(signal);
        }
        if let Some(signal) = self.check_uncommon_device(transaction, baseline) {
            signals.push(signal);
        }
        if let Some(signal) = self.check_foreign_ip(transaction, profile) {
            signals.push(signal);
        }
        if let Some(signal) = self.check_suspicious_ip(transaction) {
            signals.push(signal);
        }
        if let Some(signal) = self.check_failed_status(transaction) {
            signals.push(signal);
        }
        if let Some(signal) = self.check_extended_pending(transaction, now) {
            signals.push(signal);
        }
        if let Some(signal) = self.check_new_recipient(transaction, baseline) {
            signals.push(signal);
        }
        if let Some(signal) = self.check_account_age(transaction, profile, now) {
            signals.push(signal);
        }
        if let Some(signal) = self.check_balance_ratio(transaction, profile) {
            signals.push(signal);
        }
        if let Some(signal) = self.check_keywords(transaction) {
            signals.push(signal);
        }

        let total: u32 = signals.iter().map(|s| s.weight).sum();
        let risk_score = total.min(100) as u8;

        let (flags, evidence) = if signals.is_empty() {
            (
                vec![RiskFlag::Normal],
                vec!["No risk factors identified".to_string()],
            )
        } else {
            signals.into_iter().map(|s| (s.flag, s.evidence)).unzip()
        };

        ScoredTransaction {
            transaction: transaction.clone(),
            risk_score,
            flags,
            evidence,
            risk_category: RiskCategory::from_score(risk_score),
        }
    }

    /// Other transactions (different id) inside the velocity window
    fn nearby_peers<'a>(
        &self,
        transaction: &Transaction,
        batch: &'a [Transaction],
    ) -> Vec<&'a Transaction> {
        let window = Duration::hours(self.config.velocity_window_hours);
        batch
            .iter()
            .filter(|other| other.id != transaction.id)
            .filter(|other| (other.timestamp - transaction.timestamp).abs() < window)
            .collect()
    }

    fn check_amount_deviation(
        &self,
        transaction: &Transaction,
        baseline: &BatchBaseline,
    ) -> Option<RiskSignal> {
        let average = baseline.average_amount;
        let std_dev = baseline.std_dev_amount;
        let amount = transaction.amount;

        if amount > average + self.config.outlier_sigma * std_dev {
            Some(RiskSignal::new(
                RiskFlag::StatisticalOutlier,
                self.config.weights.statistical_outlier,
                format!(
                    "Amount {:.2} is more than {} standard deviations above the batch average {:.2}",
                    amount, self.config.outlier_sigma, average
                ),
            ))
        } else if amount > average + self.config.unusual_sigma * std_dev {
            Some(RiskSignal::new(
                RiskFlag::UnusualAmount,
                self.config.weights.unusual_amount,
                "Amount is significantly higher than typical transactions".to_string(),
            ))
        } else if amount > average + self.config.elevated_sigma * std_dev {
            Some(RiskSignal::new(
                RiskFlag::HighAmount,
                self.config.weights.high_amount,
                "Amount is higher than average".to_string(),
            ))
        } else {
            None
        }
    }

    fn check_round_amount(&self, transaction: &Transaction) -> Option<RiskSignal> {
        if transaction.amount % self.config.round_amount_modulus == 0.0
            && transaction.amount > self.config.round_amount_floor
        {
            Some(RiskSignal::new(
                RiskFlag::RoundAmount,
                self.config.weights.round_amount,
                format!(
                    "Transaction is an exact round amount ({:.2})",
                    transaction.amount
                ),
            ))
        } else {
            None
        }
    }

    fn check_velocity(&self, peers: &[&Transaction]) -> Option<RiskSignal> {
        let count = peers.len();
        if count > self.config.extreme_velocity_peers {
            Some(RiskSignal::new(
                RiskFlag::ExtremeVelocity,
                self.config.weights.extreme_velocity,
                format!(
                    "{} transactions detected within {} hours",
                    count, self.config.velocity_window_hours
                ),
            ))
        } else if count > self.config.high_velocity_peers {
            Some(RiskSignal::new(
                RiskFlag::HighVelocity,
                self.config.weights.high_velocity,
                format!(
                    "{} transactions detected within {} hours",
                    count, self.config.velocity_window_hours
                ),
            ))
        } else if count > self.config.frequent_activity_peers {
            Some(RiskSignal::new(
                RiskFlag::FrequentActivity,
                self.config.weights.frequent_activity,
                "Multiple transactions in short timeframe".to_string(),
            ))
        } else {
            None
        }
    }

    fn check_repeated_amounts(
        &self,
        transaction: &Transaction,
        peers: &[&Transaction],
    ) -> Option<RiskSignal> {
        let identical = peers
            .iter()
            .filter(|p| (p.amount - transaction.amount).abs() < self.config.identical_amount_epsilon)
            .count();
        if identical >= self.config.identical_amount_min_peers {
            Some(RiskSignal::new(
                RiskFlag::RepeatedAmounts,
                self.config.weights.repeated_amounts,
                format!("{} recent transactions with near-identical amounts", identical),
            ))
        } else {
            None
        }
    }

    fn check_transaction_hour(
        &self,
        transaction: &Transaction,
        baseline: &BatchBaseline,
    ) -> Option<RiskSignal> {
        let hour = transaction.timestamp.hour();
        if hour >= self.config.quiet_hour_start && hour <= self.config.quiet_hour_end {
            return None;
        }

        if baseline.hour_ratio(hour) < self.config.rare_hour_ratio {
            Some(RiskSignal::new(
                RiskFlag::UnusualHour,
                self.config.weights.unusual_hour,
                format!(
                    "Transaction at {:02}:00 is outside normal banking hours and rare for this user",
                    hour
                ),
            ))
        } else {
            Some(RiskSignal::new(
                RiskFlag::NonBusinessHours,
                self.config.weights.non_business_hours,
                "Transaction outside normal banking hours, but common for this user".to_string(),
            ))
        }
    }

    fn check_weekend(&self, transaction: &Transaction) -> Option<RiskSignal> {
        if matches!(
            transaction.timestamp.weekday(),
            Weekday::Sat | Weekday::Sun
        ) {
            Some(RiskSignal::new(
                RiskFlag::WeekendTransaction,
                self.config.weights.weekend_transaction,
                "Transaction on weekend".to_string(),
            ))
        } else {
            None
        }
    }

    fn check_uncommon_location(
        &self,
        transaction: &Transaction,
        baseline: &BatchBaseline,
    ) -> Option<RiskSignal> {
        let key = transaction.location.as_ref()?.display_key();
        if baseline.common_locations.contains(&key) {
            return None;
        }
        Some(RiskSignal::new(
            RiskFlag::UncommonLocation,
            self.config.weights.uncommon_location,
            format!("Location {} is not among the user's common locations", key),
        ))
    }

    fn check_uncommon_device(
        &self,
        transaction: &Transaction,
        baseline: &BatchBaseline,
    ) -> Option<RiskSignal> {
        let device = transaction.device.as_ref()?;
        if baseline.common_devices.contains(device) {
            return None;
        }
        Some(RiskSignal::new(
            RiskFlag::UncommonDevice,
            self.config.weights.uncommon_device,
            format!("Device {} is not among the user's common devices", device),
        ))
    }

    fn check_foreign_ip(
        &self,
        transaction: &Transaction,
        profile: &UserProfile,
    ) -> Option<RiskSignal> {
        let ip_country = transaction.resolved_ip_country()?;
        let home_country = profile.country.as_deref()?;
        if ip_country == home_country {
            return None;
        }
        Some(RiskSignal::new(
            RiskFlag::ForeignIp,
            self.config.weights.foreign_ip,
            format!(
                "IP country {} does not match the user's country {}",
                ip_country, home_country
            ),
        ))
    }

    fn check_suspicious_ip(&self, transaction: &Transaction) -> Option<RiskSignal> {
        let address = transaction.ip_address.as_ref()?.address()?;
        if !self.config.suspicious_ips.iter().any(|ip| ip == &address) {
            return None;
        }
        Some(RiskSignal::new(
            RiskFlag::SuspiciousIp,
            self.config.weights.suspicious_ip,
            format!("IP address {} is on the suspicious address list", address),
        ))
    }

    fn check_failed_status(&self, transaction: &Transaction) -> Option<RiskSignal> {
        if transaction.status == TransactionStatus::Failed {
            Some(RiskSignal::new(
                RiskFlag::FailedTransaction,
                self.config.weights.failed_transaction,
                "Transaction has failed status".to_string(),
            ))
        } else {
            None
        }
    }

    fn check_extended_pending(
        &self,
        transaction: &Transaction,
        now: DateTime<Utc>,
    ) -> Option<RiskSignal> {
        if transaction.status != TransactionStatus::Pending {
            return None;
        }
        let pending = now - transaction.timestamp;
        if pending <= Duration::hours(self.config.pending_threshold_hours) {
            return None;
        }
        Some(RiskSignal::new(
            RiskFlag::ExtendedPending,
            self.config.weights.extended_pending,
            format!("Transaction pending for {} hours", pending.num_hours()),
        ))
    }

    fn check_new_recipient(
        &self,
        transaction: &Transaction,
        baseline: &BatchBaseline,
    ) -> Option<RiskSignal> {
        let recipient = transaction.recipient_id.as_deref()?;
        let occurrences = baseline
            .recipient_counts
            .get(recipient)
            .copied()
            .unwrap_or(0);
        // Only this transaction references the recipient
        if occurrences > 1 {
            return None;
        }
        Some(RiskSignal::new(
            RiskFlag::NewRecipient,
            self.config.weights.new_recipient,
            "First transaction to this recipient".to_string(),
        ))
    }

    fn check_account_age(
        &self,
        transaction: &Transaction,
        profile: &UserProfile,
        now: DateTime<Utc>,
    ) -> Option<RiskSignal> {
        let created_at = profile.created_at?;
        let age_days = (now - created_at).num_days();
        if age_days >= self.config.new_account_max_age_days
            || transaction.amount <= self.config.new_account_min_amount
        {
            return None;
        }
        Some(RiskSignal::new(
            RiskFlag::NewAccountLargeTransaction,
            self.config.weights.new_account_large_transaction,
            format!(
                "Large transaction ({:.2}) on an account {} days old",
                transaction.amount, age_days
            ),
        ))
    }

    fn check_balance_ratio(
        &self,
        transaction: &Transaction,
        profile: &UserProfile,
    ) -> Option<RiskSignal> {
        let balance = profile.balance?;
        if balance <= 0.0 || transaction.amount <= self.config.balance_ratio * balance {
            return None;
        }
        let ratio = (transaction.amount / balance * 100.0).round();
        Some(RiskSignal::new(
            RiskFlag::HighBalanceRatio,
            self.config.weights.high_balance_ratio,
            format!("Transaction amount is {}% of the account balance", ratio),
        ))
    }

    fn check_keywords(&self, transaction: &Transaction) -> Option<RiskSignal> {
        let description = transaction.description.as_deref()?;
        let pattern = self.keyword_pattern.as_ref()?;
        if !pattern.is_match(description) {
            return None;
        }
        Some(RiskSignal::new(
            RiskFlag::SuspiciousKeywords,
            self.config.weights.suspicious_keywords,
            "Description contains potentially suspicious keywords".to_string(),
        ))
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn build_keyword_pattern(keywords: &[String]) -> Result<Option<Regex>, ScoreError> {
    if keywords.is_empty() {
        return Ok(None);
    }
    let alternation = keywords
        .iter()
        .map(|keyword| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&alternation)
        .case_insensitive(true)
        .build()
        .map(Some)
        .map_err(|e| ScoreError::Config(e.to_string()))
}
