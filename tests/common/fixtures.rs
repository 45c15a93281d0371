//! Static input corpora used across harnesses.
//!
//! Each corpus is a raw JSON string in one of the shapes the normalizer
//! recognises, mirroring the heterogeneous sources the tool sees in
//! practice: price bars, fundamentals with fiscal-period keys, ad-hoc
//! segment breakdowns, and plain numeric series.

/// Plain numeric array.
pub const CORPUS_NUMERIC_ARRAY: &str = "[100, 102.5, 98.75, 110, 107.25]";

/// Numeric array with numeric strings and junk mixed in; the junk must be
/// skipped, not fatal.
pub const CORPUS_MIXED_ARRAY: &str = r#"[100, "200", "not a number", {"value": 50}, {"net_income": 75}, null, true]"#;

/// Quarterly fundamentals, the fiscal-period label shape.
pub const CORPUS_FUNDAMENTALS: &str = r#"[
    {"fiscal_year": 2023, "quarter": 4, "net_income": 33916000000, "total_revenue": 119575000000},
    {"fiscal_year": 2024, "quarter": 1, "net_income": 23636000000, "total_revenue": 90753000000},
    {"fiscal_year": 2024, "quarter": 2, "net_income": 21448000000, "total_revenue": 85777000000}
]"#;

/// Daily price bars with full OHLC, the candlestick shape.
pub const CORPUS_PRICE_BARS: &str = r#"[
    {"date": "2024-06-03", "open": 192.9, "high": 194.99, "low": 192.52, "close": 194.03},
    {"date": "2024-06-04", "open": 194.64, "high": 195.32, "low": 193.03, "close": 194.35},
    {"date": "2024-06-05", "open": 195.4, "high": 196.9, "low": 194.87, "close": 195.87}
]"#;

/// Flat key→magnitude map: segment name → revenue.
pub const CORPUS_SEGMENTS: &str = r#"{
    "iPhone": 200583000000,
    "Mac": 29357000000,
    "iPad": 28300000000,
    "Wearables": 39845000000,
    "Services": 85200000000
}"#;

/// Nested time-series-of-segments map; only the most recent period (the
/// last key) must be charted.
pub const CORPUS_NESTED_PERIODS: &str = r#"{
    "2024-01-31": {"A": 10, "B": 20},
    "2024-02-28": {"A": 15, "B": 25}
}"#;

/// Inputs that must all fail normalization with `InvalidInput`.
pub const CORPUS_INVALID: &[&str] = &[
    "null",
    "[]",
    "{}",
    r#"[{"foo": "bar"}]"#,
    r#"["alpha", "beta"]"#,
    "42",
    "\"just a string\"",
];

/// Parse a corpus string into a `serde_json::Value`. Panics on malformed
/// fixtures — they are compile-time constants and must be valid.
pub fn parse(corpus: &str) -> serde_json::Value {
    serde_json::from_str(corpus).expect("fixture corpus must be valid JSON")
}
