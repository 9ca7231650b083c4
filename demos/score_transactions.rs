//! Transaction risk scoring example
//!
//! This example scores a small transaction history against a user profile
//! and prints the per-transaction flags plus the batch summary.

use chrono::{Duration, TimeZone, Utc};
use transaction_risk_scorer::{
    IpAddress, Location, RiskCategory, RiskScorer, Transaction, TransactionStatus, UserProfile,
};

fn main() {
    println!("=== Transaction Risk Scorer ===\n");

    let now = Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap();
    let scorer = RiskScorer::new();

    let profile = UserProfile {
        country: Some("IN".to_string()),
        balance: Some(40_000.0),
        created_at: Some(now - Duration::days(500)),
    };

    let mut transactions = Vec::new();

    // A week of ordinary debits from the user's usual city and phone
    for day in 0..5 {
        transactions.push(Transaction {
            id: format!("TXN-{:03}", day),
            amount: 1200.0 + 50.0 * day as f64,
            timestamp: now - Duration::days(20 - day),
            transaction_type: "DEBIT".to_string(),
            status: TransactionStatus::Completed,
            location: Some(Location::Raw("Mumbai".to_string())),
            device: Some("android-4f2c".to_string()),
            ip_address: None,
            ip_country: Some("IN".to_string()),
            recipient_id: Some("ACC-GROCER".to_string()),
            description: Some("weekly shopping".to_string()),
        });
    }

    // A large transfer to a first-time recipient, from a foreign IP
    transactions.push(Transaction {
        id: "TXN-100".to_string(),
        amount: 35_000.0,
        timestamp: now - Duration::hours(3),
        transaction_type: "TRANSFER".to_string(),
        status: TransactionStatus::Completed,
        location: Some(Location::Raw("Frankfurt".to_string())),
        device: Some("web-7a91".to_string()),
        ip_address: Some(IpAddress::Raw("203.0.113.7".to_string())),
        ip_country: Some("DE".to_string()),
        recipient_id: Some("ACC-UNKNOWN".to_string()),
        description: Some("urgent investment opportunity".to_string()),
    });

    // A payment stuck in pending for two days
    transactions.push(Transaction {
        id: "TXN-101".to_string(),
        amount: 900.0,
        timestamp: now - Duration::hours(50),
        transaction_type: "DEBIT".to_string(),
        status: TransactionStatus::Pending,
        location: Some(Location::Raw("Mumbai".to_string())),
        device: Some("android-4f2c".to_string()),
        ip_address: None,
        ip_country: Some("IN".to_string()),
        recipient_id: Some("ACC-GROCER".to_string()),
        description: None,
    });

    let batch = scorer
        .score_batch(&transactions, &profile, now)
        .expect("batch is well formed");

    for scored in &batch.transactions {
        println!(
            "{}  score {:>3}  {:<6}  amount {:>9.2}",
            scored.transaction.id,
            scored.risk_score,
            scored.risk_category.to_string(),
            scored.transaction.amount,
        );
        for (flag, evidence) in scored.flags.iter().zip(&scored.evidence) {
            println!("    [{}] {}", flag, evidence);
        }
    }

    println!("\n=== Batch Summary ===");
    let stats = &batch.stats;
    println!("Total transactions: {}", stats.total_transactions);
    println!(
        "Low risk:    {} ({}%)",
        stats.low_risk_count, stats.low_risk_percentage
    );
    println!(
        "Medium risk: {} ({}%)",
        stats.medium_risk_count, stats.medium_risk_percentage
    );
    println!(
        "High risk:   {} ({}%)",
        stats.high_risk_count, stats.high_risk_percentage
    );

    let flagged = batch.with_category(RiskCategory::High);
    println!("\nHigh-risk transactions needing review:");
    for scored in flagged {
        println!("  {} ({})", scored.transaction.id, scored.risk_score);
    }

    println!("\nSerialized batch (first 300 chars):");
    let json = batch.to_json().expect("batch serializes");
    println!("{}", &json[..json.len().min(300)]);
}
