//! Keyword analytics
//!
//! Every verse match records its keyword to `keyword_searches`. The write
//! returns an explicit Result so the chat flow can surface failures to the
//! log instead of discarding them; a failed write never fails the chat
//! round trip.
//!
//! Aggregation is pure over the queried rows: count by keyword (descending)
//! and count by calendar day (ascending).

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use std::collections::BTreeMap;

/// One recorded keyword match.
#[derive(Debug, Clone)]
pub struct KeywordEvent {
    pub keyword: String,
    /// Unix seconds
    pub searched_at: i64,
}

/// Aggregate row for the keyword table view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u64,
}

/// Aggregate row for the daily trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub day: NaiveDate,
    pub count: u64,
}

/// Count events per keyword, ordered descending by count. Ties break on
/// keyword name so the ordering is stable.
pub fn count_by_keyword(events: &[KeywordEvent]) -> Vec<KeywordCount> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for event in events {
        *counts.entry(event.keyword.as_str()).or_insert(0) += 1;
    }

    let mut out: Vec<KeywordCount> = counts
        .into_iter()
        .map(|(keyword, count)| KeywordCount {
            keyword: keyword.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.keyword.cmp(&b.keyword)));
    out
}

/// Count events per calendar day (UTC), ordered ascending by day.
pub fn count_by_day(events: &[KeywordEvent]) -> Vec<DailyCount> {
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for event in events {
        if let Some(ts) = DateTime::<Utc>::from_timestamp(event.searched_at, 0) {
            *counts.entry(ts.date_naive()).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(day, count)| DailyCount { day, count })
        .collect()
}

/// Analytics sink and read side over sqlite.
pub struct AnalyticsStore {
    db: SqlitePool,
}

impl AnalyticsStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Record one matched keyword.
    pub async fn record_keyword(&self, keyword: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO keyword_searches (keyword, searched_at)
            VALUES ($1, $2)
            "#,
        )
        .bind(keyword)
        .bind(Utc::now().timestamp())
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// All recorded events, oldest first.
    pub async fn all_events(&self) -> Result<Vec<KeywordEvent>> {
        let rows = sqlx::query(
            r#"
            SELECT keyword, searched_at
            FROM keyword_searches
            ORDER BY searched_at ASC, id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| KeywordEvent {
                keyword: row.get("keyword"),
                searched_at: row.get("searched_at"),
            })
            .collect())
    }

    /// Keyword counts, descending.
    pub async fn keyword_counts(&self) -> Result<Vec<KeywordCount>> {
        Ok(count_by_keyword(&self.all_events().await?))
    }

    /// Daily counts, ascending by day.
    pub async fn daily_counts(&self) -> Result<Vec<DailyCount>> {
        Ok(count_by_day(&self.all_events().await?))
    }
}
