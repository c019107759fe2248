//! Pure view computations over a log snapshot.
//!
//! Every function here is a plain function of its input slice, with no state
//! and no clock. Calling one twice on the same snapshot gives the same
//! answer, and calling it never changes what a later call sees.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Record;

/// One point of the score-over-time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorePoint {
    pub timestamp: DateTime<Utc>,
    pub score: f64,
}

/// Count records per label. Labels absent from the log are absent from the
/// map; zero-filling known labels is a presentation choice, not made here.
pub fn label_distribution(records: &[Record]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.label.clone()).or_insert(0) += 1;
    }
    counts
}

/// Project the log onto (timestamp, score) pairs in insertion order.
pub fn score_series(records: &[Record]) -> Vec<ScorePoint> {
    records
        .iter()
        .map(|record| ScorePoint {
            timestamp: record.timestamp,
            score: record.score,
        })
        .collect()
}

/// Sort a series oldest-first for charting. The sort is stable, so points
/// with equal timestamps keep their insertion order.
pub fn chronological(mut points: Vec<ScorePoint>) -> Vec<ScorePoint> {
    points.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
    points
}

/// Sort records newest-first for the history table. Stable, so records with
/// equal timestamps keep their insertion order relative to each other.
pub fn newest_first(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    records
}
