use std::sync::Arc;

use tickerdesk::{CacheConfig, Desk, Ticker};
use tickerdesk_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Market data comes from fixtures; news goes to the live provider.
    let desk = Desk::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .with_cache(CacheConfig::default())
        .build()?;

    let infy = Ticker::parse("INFY.NS")?;
    let snap = desk.snapshot(&infy).await?;

    let o = &snap.overview;
    println!("{} | {} | {}", o.name, o.sector, o.market_cap);
    for row in &snap.financials.rows {
        println!(
            "{:<18} {:>8}  QoQ {:>8}  YoY {:>8}",
            row.line,
            row.latest,
            row.qoq.display(),
            row.yoy.display()
        );
    }
    for link in &snap.company_news.links {
        println!("{link}");
    }
    if let Some(e) = &snap.company_news.error {
        println!("news unavailable: {e}");
    }
    Ok(())
}
