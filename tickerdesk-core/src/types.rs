//! Domain data structures shared by connectors, the news finder, and the desk.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TickerdeskError;
use crate::metrics::{format_percent, percent_change};

/// Exchange-qualified equity symbol such as `INFY.NS` or `AAPL`.
///
/// Stored trimmed and upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Parse a ticker symbol.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the symbol is empty or contains whitespace.
    pub fn parse(raw: &str) -> Result<Self, TickerdeskError> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(TickerdeskError::InvalidArg("ticker is empty".into()));
        }
        if s.chars().any(char::is_whitespace) {
            return Err(TickerdeskError::InvalidArg(format!(
                "ticker '{s}' contains whitespace"
            )));
        }
        Ok(Self(s.to_ascii_uppercase()))
    }

    /// Full symbol including the exchange suffix.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Symbol without the exchange suffix (`INFY` for `INFY.NS`).
    #[must_use]
    pub fn base_symbol(&self) -> &str {
        self.0.split_once('.').map_or(self.0.as_str(), |(base, _)| base)
    }

    /// Exchange suffix if present (`NS` for `INFY.NS`).
    #[must_use]
    pub fn exchange_suffix(&self) -> Option<&str> {
        self.0
            .split_once('.')
            .map(|(_, suffix)| suffix)
            .filter(|s| !s.is_empty())
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::str::FromStr for Ticker {
    type Err = TickerdeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = TickerdeskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ticker> for String {
    fn from(t: Ticker) -> Self {
        t.0
    }
}

/// Scalar value in a company info mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InfoValue {
    /// Boolean flag.
    Bool(bool),
    /// Numeric value (market cap, ratios, counts).
    Number(f64),
    /// Free text (names, sector, website).
    Text(String),
}

impl From<&str> for InfoValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for InfoValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for InfoValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for InfoValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

/// Company info as supplied by a market-data provider: a string to scalar mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    /// Symbol this info belongs to.
    pub symbol: Ticker,
    /// Raw provider fields keyed by provider field name (`longName`, `sector`, ...).
    pub fields: BTreeMap<String, InfoValue>,
}

impl CompanyInfo {
    /// Create an empty info mapping for a symbol.
    #[must_use]
    pub const fn new(symbol: Ticker) -> Self {
        Self {
            symbol,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<InfoValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Text field; blank strings count as missing.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.fields.get(key)? {
            InfoValue::Text(s) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric field; non-finite numbers count as missing.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.fields.get(key)? {
            InfoValue::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// `longName`, falling back to `shortName`.
    #[must_use]
    pub fn long_name(&self) -> Option<&str> {
        self.text("longName").or_else(|| self.text("shortName"))
    }

    /// `industry`.
    #[must_use]
    pub fn industry(&self) -> Option<&str> {
        self.text("industry")
    }

    /// `sector`.
    #[must_use]
    pub fn sector(&self) -> Option<&str> {
        self.text("sector")
    }

    /// `website`.
    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.text("website")
    }

    /// `currency`.
    #[must_use]
    pub fn currency(&self) -> Option<&str> {
        self.text("currency")
    }

    /// `longBusinessSummary`.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.text("longBusinessSummary")
    }

    /// `marketCap`.
    #[must_use]
    pub fn market_cap(&self) -> Option<f64> {
        self.number("marketCap")
    }
}

/// Daily OHLCV bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    /// Trading date.
    pub date: NaiveDate,
    /// Opening price.
    pub open: Decimal,
    /// Session high.
    pub high: Decimal,
    /// Session low.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
    /// Traded volume.
    pub volume: u64,
}

/// One reporting period in a financial series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodValue {
    /// Period label, e.g. `2024Q4` or a period-end date.
    pub period: String,
    /// Reported value; `None` when the provider left it blank.
    pub value: Option<f64>,
}

/// Time-indexed values of one statement line, ordered most-recent-first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinancialSeries(Vec<PeriodValue>);

impl FinancialSeries {
    /// Wrap periods that are already ordered most-recent-first.
    #[must_use]
    pub const fn new(periods: Vec<PeriodValue>) -> Self {
        Self(periods)
    }

    /// Build from `(label, value)` pairs ordered most-recent-first.
    pub fn from_pairs<I, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, Option<f64>)>,
        L: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(period, value)| PeriodValue {
                    period: period.into(),
                    value,
                })
                .collect(),
        )
    }

    /// Period at `index` (0 is the most recent).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PeriodValue> {
        self.0.get(index)
    }

    /// Value at `index`, flattening missing entries and blank values.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.0.get(index).and_then(|p| p.value)
    }

    /// Most recent period.
    #[must_use]
    pub fn latest(&self) -> Option<&PeriodValue> {
        self.0.first()
    }

    /// Number of periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no periods at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate periods most-recent-first.
    pub fn iter(&self) -> impl Iterator<Item = &PeriodValue> {
        self.0.iter()
    }
}

/// One financial statement line item with its quarterly series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    /// Line item name, e.g. `Total Revenue`.
    pub line: String,
    /// Values for that line, most-recent-first.
    pub series: FinancialSeries,
}

/// Quarterly financial statement as a list of line items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuarterlyFinancials {
    /// Rows in provider order.
    pub rows: Vec<StatementRow>,
}

impl QuarterlyFinancials {
    /// Find a row by line name (case-insensitive).
    #[must_use]
    pub fn row(&self, line: &str) -> Option<&StatementRow> {
        self.rows.iter().find(|r| r.line.eq_ignore_ascii_case(line))
    }
}

/// Absolute URL of one news article.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleLink {
    url: url::Url,
}

impl ArticleLink {
    /// Wrap an already-resolved absolute URL.
    #[must_use]
    pub const fn new(url: url::Url) -> Self {
        Self { url }
    }

    /// The article URL as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    /// The article URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }
}

impl fmt::Display for ArticleLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

/// Date-bounded news search query.
///
/// The cutoff approximates a month as 30 days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    phrase: String,
    lookback_months: u32,
    cutoff: NaiveDate,
}

impl SearchQuery {
    /// Days counted per lookback month.
    pub const DAYS_PER_MONTH: u64 = 30;

    /// Build a query relative to `today`.
    ///
    /// # Errors
    /// Returns `InvalidQuery` when the phrase is empty after trimming.
    pub fn new(
        phrase: &str,
        lookback_months: u32,
        today: NaiveDate,
    ) -> Result<Self, TickerdeskError> {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return Err(TickerdeskError::invalid_query(
                "search phrase is empty after trimming",
            ));
        }
        let days = Days::new(u64::from(lookback_months) * Self::DAYS_PER_MONTH);
        let cutoff = today.checked_sub_days(days).unwrap_or(NaiveDate::MIN);
        Ok(Self {
            phrase: phrase.to_string(),
            lookback_months,
            cutoff,
        })
    }

    /// Trimmed phrase.
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Lookback window in months.
    #[must_use]
    pub const fn lookback_months(&self) -> u32 {
        self.lookback_months
    }

    /// Oldest publication date of interest.
    #[must_use]
    pub const fn cutoff_date(&self) -> NaiveDate {
        self.cutoff
    }

    /// Provider query text: `"<phrase> after:YYYY-MM-DD"`.
    #[must_use]
    pub fn query_text(&self) -> String {
        format!("{} after:{}", self.phrase, self.cutoff.format("%Y-%m-%d"))
    }
}

/// Period-over-period comparison kind for quarterly series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    /// Quarter over quarter: one period back.
    QoQ,
    /// Year over year: four quarterly periods back.
    YoY,
}

impl ChangeKind {
    /// Number of periods between the compared values.
    #[must_use]
    pub const fn periods(self) -> usize {
        match self {
            Self::QoQ => 1,
            Self::YoY => 4,
        }
    }

    /// Short label for tables.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::QoQ => "QoQ",
            Self::YoY => "YoY",
        }
    }
}

/// Percent change of a series; `percent` is `None` when history is insufficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeMetric {
    /// Comparison kind.
    pub kind: ChangeKind,
    /// Percent change, if computable.
    pub percent: Option<f64>,
}

impl ChangeMetric {
    /// Compute the metric for `series` (most-recent-first).
    #[must_use]
    pub fn compute(kind: ChangeKind, series: &FinancialSeries) -> Self {
        Self {
            kind,
            percent: percent_change(series, kind.periods()),
        }
    }

    /// Display string (`"9.09%"` or `"N/A"`).
    #[must_use]
    pub fn display(&self) -> String {
        format_percent(self.percent)
    }
}
