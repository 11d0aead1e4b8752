//! Verse lookup
//!
//! The `theology_verses` table is scanned in full on every user message:
//! the first row (insertion order) whose keyword appears in the input wins.
//! Insertion order is the documented tie-break for overlapping keywords.

use anyhow::Result;
use serde::Serialize;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use tracing::info;

/// One verse row. Read-only from this service's perspective.
#[derive(Debug, Clone, Serialize)]
pub struct VerseEntry {
    /// Primary keyword; also the value recorded to analytics on a match
    pub keyword: String,
    pub verse: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Comma-separated alternate keywords ("suffer, pain, grief")
    #[serde(skip)]
    pub keywords: Option<String>,
}

impl VerseEntry {
    /// True when the primary keyword or any alternate is a substring of the
    /// (already lowercased) input.
    fn matches(&self, lowercased_input: &str) -> bool {
        if lowercased_input.contains(&self.keyword.to_lowercase()) {
            return true;
        }
        match &self.keywords {
            Some(alternates) => alternates
                .split(',')
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .any(|k| lowercased_input.contains(&k)),
            None => false,
        }
    }
}

/// Verse store over sqlite
pub struct VerseStore {
    db: SqlitePool,
}

impl VerseStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Load the whole table in insertion order. No caching: the table is
    /// small and externally editable between requests.
    pub async fn all(&self) -> Result<Vec<VerseEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT keyword, verse, tag, theme, keywords
            FROM theology_verses
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| VerseEntry {
                keyword: row.get("keyword"),
                verse: row.get("verse"),
                tag: row.get("tag"),
                theme: row.get("theme"),
                keywords: row.get("keywords"),
            })
            .collect())
    }

    /// First entry whose keyword (primary or alternate) is a
    /// case-insensitive substring of the input, or None.
    pub async fn find_match(&self, input: &str) -> Result<Option<VerseEntry>> {
        let needle = input.to_lowercase();
        Ok(self.all().await?.into_iter().find(|e| e.matches(&needle)))
    }
}

/// Seed rows: (keyword, verse, tag, theme, alternate keywords)
const SEED_VERSES: &[(&str, &str, &str, &str, &str)] = &[
    (
        "faith",
        "Hebrews 11:1 — Now faith is the assurance of things hoped for, the conviction of things not seen.",
        "scripture",
        "faith",
        "faith, belief, believe, trust",
    ),
    (
        "doubt",
        "Mark 9:24 — I believe; help my unbelief.",
        "scripture",
        "doubt",
        "doubt, unbelief, uncertain, skeptic",
    ),
    (
        "suffering",
        "Dhammapada 216 — From craving springs grief, from craving springs fear; for one wholly free of craving there is no grief, whence fear?",
        "dhammapada",
        "suffering",
        "suffer, suffering, pain, grief",
    ),
    (
        "meaning",
        "Ecclesiastes 1:2 — Vanity of vanities, says the Preacher; all is vanity.",
        "scripture",
        "meaning",
        "meaning, purpose, vanity",
    ),
    (
        "love",
        "1 Corinthians 13:4 — Love is patient and kind; love does not envy or boast.",
        "scripture",
        "love",
        "love, charity, kindness",
    ),
    (
        "forgiveness",
        "Matthew 6:14 — For if you forgive others their trespasses, your heavenly Father will also forgive you.",
        "scripture",
        "forgiveness",
        "forgive, forgiveness, mercy, pardon",
    ),
    (
        "prayer",
        "Philippians 4:6 — Do not be anxious about anything, but in everything by prayer and supplication with thanksgiving let your requests be made known.",
        "scripture",
        "prayer",
        "pray, prayer, supplication",
    ),
    (
        "wisdom",
        "Proverbs 9:10 — The fear of the Lord is the beginning of wisdom.",
        "scripture",
        "wisdom",
        "wisdom, wise, understanding",
    ),
    (
        "hope",
        "Romans 15:13 — May the God of hope fill you with all joy and peace in believing.",
        "scripture",
        "hope",
        "hope, hopeful, despair",
    ),
    (
        "humility",
        "Tao Te Ching 8 — The highest good is like water, which benefits all things and does not compete.",
        "tao",
        "humility",
        "humility, humble, pride",
    ),
    (
        "truth",
        "John 8:32 — And you will know the truth, and the truth will set you free.",
        "scripture",
        "truth",
        "truth, honest, honesty",
    ),
    (
        "gratitude",
        "Psalm 118:24 — This is the day that the Lord has made; let us rejoice and be glad in it.",
        "scripture",
        "gratitude",
        "gratitude, grateful, thanks, thanksgiving",
    ),
];

/// Insert the seed set when the table is empty. Returns how many rows were
/// inserted (0 when the table already had data).
pub async fn seed_if_empty(db: &SqlitePool) -> Result<usize> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM theology_verses")
        .fetch_one(db)
        .await?;

    if count.0 > 0 {
        return Ok(0);
    }

    for &(keyword, verse, tag, theme, keywords) in SEED_VERSES {
        sqlx::query(
            r#"
            INSERT INTO theology_verses (keyword, verse, tag, theme, keywords)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(keyword)
        .bind(verse)
        .bind(tag)
        .bind(theme)
        .bind(keywords)
        .execute(db)
        .await?;
    }

    info!("Seeded {} verses into empty theology_verses table", SEED_VERSES.len());
    Ok(SEED_VERSES.len())
}
