use chrono::NaiveDate;
use rust_decimal::Decimal;
use tickerdesk_core::{Candle, HistoryRange};

type Row = (&'static str, &'static str, &'static str, &'static str, &'static str, u64);

const INFY: &[Row] = &[
    ("2024-06-28", "1540.00", "1552.40", "1531.10", "1548.50", 6_120_000),
    ("2024-09-30", "1890.00", "1905.65", "1872.30", "1880.20", 5_410_000),
    ("2024-12-02", "1860.00", "1887.00", "1851.25", "1883.70", 4_980_000),
    ("2024-12-30", "1905.00", "1913.80", "1880.00", "1889.90", 3_760_000),
    ("2024-12-31", "1890.00", "1899.00", "1868.05", "1875.00", 3_100_000),
];

const TCS: &[Row] = &[
    ("2024-12-30", "4120.00", "4139.90", "4090.00", "4101.35", 1_450_000),
    ("2024-12-31", "4100.00", "4110.00", "4075.50", "4098.00", 1_210_000),
];

pub fn by_symbol(s: &str) -> Option<Vec<Candle>> {
    match s {
        "INFY.NS" => Some(build(INFY)),
        "TCS.NS" => Some(build(TCS)),
        _ => None,
    }
}

/// Keep candles within `range` of the last fixture date.
pub fn within(candles: Vec<Candle>, range: HistoryRange) -> Vec<Candle> {
    let (Some(days), Some(last)) = (range.approx_days(), candles.last().map(|c| c.date)) else {
        return candles;
    };
    let start = last
        .checked_sub_days(chrono::Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN);
    candles.into_iter().filter(|c| c.date > start).collect()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap_or_default()
}

fn build(rows: &[Row]) -> Vec<Candle> {
    rows.iter()
        .filter_map(|&(date, o, h, l, c, volume)| {
            Some(Candle {
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?,
                open: dec(o),
                high: dec(h),
                low: dec(l),
                close: dec(c),
                volume,
            })
        })
        .collect()
}
