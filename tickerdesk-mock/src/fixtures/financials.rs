use tickerdesk_core::{FinancialSeries, QuarterlyFinancials, StatementRow};

const QUARTERS: [&str; 5] = ["2024-12-31", "2024-09-30", "2024-06-30", "2024-03-31", "2023-12-31"];

fn row(line: &str, values: &[Option<f64>]) -> StatementRow {
    StatementRow {
        line: line.to_string(),
        series: FinancialSeries::from_pairs(QUARTERS.iter().copied().zip(values.iter().copied())),
    }
}

pub fn by_symbol(s: &str) -> Option<QuarterlyFinancials> {
    match s {
        "INFY.NS" => Some(QuarterlyFinancials {
            rows: vec![
                row(
                    "Total Revenue",
                    &[Some(440e9), Some(400e9), Some(380e9), Some(360e9), Some(400e9)],
                ),
                row(
                    "Net Income",
                    &[Some(72e9), Some(60e9), Some(58e9), Some(55e9), Some(64e9)],
                ),
                row(
                    "Operating Expense",
                    &[Some(-12e9), Some(-15e9), Some(-14e9), Some(-13e9), Some(-10e9)],
                ),
            ],
        }),
        // Gap in revenue and a short net income series.
        "TCS.NS" => Some(QuarterlyFinancials {
            rows: vec![
                row(
                    "Total Revenue",
                    &[Some(630e9), Some(600e9), None, Some(590e9), Some(600e9)],
                ),
                row("Net Income", &[Some(120e9), Some(125e9), Some(118e9)]),
            ],
        }),
        _ => None,
    }
}
