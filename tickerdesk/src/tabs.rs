use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use tickerdesk_core::{
    ArticleLink, Candle, ChangeKind, ChangeMetric, CompanyInfo, FinancialSeries, HistoryRange,
    StatementRow, Ticker, TickerdeskError, format_magnitude, percent_change,
};

const MISSING: &str = "N/A";

fn or_missing(v: Option<&str>) -> String {
    v.unwrap_or(MISSING).to_string()
}

/// "Company overview" tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    /// Ticker the overview describes.
    pub symbol: Ticker,
    /// Long company name (short name as fallback), or `"N/A"`.
    pub name: String,
    /// Industry, or `"N/A"`.
    pub industry: String,
    /// Sector, or `"N/A"`.
    pub sector: String,
    /// Company website, or `"N/A"`.
    pub website: String,
    /// Reporting currency when the provider supplies one.
    pub currency: Option<String>,
    /// Business summary when the provider supplies one.
    pub summary: Option<String>,
    /// Market capitalization with a magnitude suffix, or `"N/A"`.
    pub market_cap: String,
    /// Most recent close within the chart range.
    pub last_close: Option<Decimal>,
    /// Range the price change is measured over.
    pub range: HistoryRange,
    /// Percent change from the first to the last close of the range, or `"N/A"`.
    pub price_change: String,
}

impl Overview {
    /// Assemble the overview from the info mapping and the chart candles (oldest first).
    #[must_use]
    pub fn from_parts(
        symbol: &Ticker,
        info: &CompanyInfo,
        candles: &[Candle],
        range: HistoryRange,
    ) -> Self {
        Self {
            symbol: symbol.clone(),
            name: or_missing(info.long_name()),
            industry: or_missing(info.industry()),
            sector: or_missing(info.sector()),
            website: or_missing(info.website()),
            currency: info.currency().map(str::to_string),
            summary: info.summary().map(str::to_string),
            market_cap: format_magnitude(info.market_cap()),
            last_close: candles.last().map(|c| c.close),
            range,
            price_change: tickerdesk_core::format_percent(range_change(candles)),
        }
    }
}

/// Percent change between the first and last close of `candles` (oldest first).
fn range_change(candles: &[Candle]) -> Option<f64> {
    let first = candles.first()?.close.to_f64();
    let last = candles.last()?.close.to_f64();
    let series = FinancialSeries::from_pairs([("last", last), ("first", first)]);
    percent_change(&series, 1)
}

/// One statement line on the "financial statements" tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSummary {
    /// Line item name.
    pub line: String,
    /// Label of the most recent period, if any.
    pub latest_period: Option<String>,
    /// Most recent value with a magnitude suffix, or `"N/A"`.
    pub latest: String,
    /// Change versus the previous quarter.
    pub qoq: ChangeMetric,
    /// Change versus the same quarter a year earlier.
    pub yoy: ChangeMetric,
}

impl LineSummary {
    /// Summarize one statement row.
    #[must_use]
    pub fn from_row(row: &StatementRow) -> Self {
        let series = &row.series;
        Self {
            line: row.line.clone(),
            latest_period: series.latest().map(|p| p.period.clone()),
            latest: format_magnitude(series.value_at(0)),
            qoq: ChangeMetric::compute(ChangeKind::QoQ, series),
            yoy: ChangeMetric::compute(ChangeKind::YoY, series),
        }
    }
}

/// "Financial statements" tab: one summary per statement line, in provider order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FinancialsTab {
    /// Line summaries.
    pub rows: Vec<LineSummary>,
}

impl FinancialsTab {
    /// Find a line by name (case-insensitive).
    #[must_use]
    pub fn line(&self, name: &str) -> Option<&LineSummary> {
        self.rows.iter().find(|r| r.line.eq_ignore_ascii_case(name))
    }

    /// True when the provider returned no statement lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A list of headline links for one search phrase.
///
/// A failed search keeps its error message here instead of failing the
/// surrounding dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NewsSection {
    /// Phrase that was searched (empty when the search was skipped).
    pub phrase: String,
    /// Links in provider relevance order.
    pub links: Vec<ArticleLink>,
    /// Why the section is empty, when it is empty because of an error.
    pub error: Option<String>,
}

impl NewsSection {
    pub(crate) fn from_result(
        phrase: &str,
        res: Result<Vec<ArticleLink>, TickerdeskError>,
    ) -> Self {
        match res {
            Ok(links) => Self {
                phrase: phrase.to_string(),
                links,
                error: None,
            },
            Err(e) => Self {
                phrase: phrase.to_string(),
                links: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }

    pub(crate) fn skipped(reason: &str) -> Self {
        Self {
            phrase: String::new(),
            links: Vec::new(),
            error: Some(reason.to_string()),
        }
    }

    /// True when there are no links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Everything a dashboard page shows for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    /// Company overview tab.
    pub overview: Overview,
    /// Daily candles for the chart, oldest first.
    pub history: Vec<Candle>,
    /// Financial statements tab.
    pub financials: FinancialsTab,
    /// News about the company.
    pub company_news: NewsSection,
    /// Order-related news ("<company> order").
    pub orders: NewsSection,
    /// News about the company's sector.
    pub sector_news: NewsSection,
}
