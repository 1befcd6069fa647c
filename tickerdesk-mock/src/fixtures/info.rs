use tickerdesk_core::{CompanyInfo, Ticker};

pub fn by_symbol(t: &Ticker) -> Option<CompanyInfo> {
    let info = CompanyInfo::new(t.clone());
    match t.as_str() {
        "INFY.NS" => Some(
            info.with("longName", "Infosys Limited")
                .with("shortName", "INFOSYS LTD")
                .with("industry", "Information Technology Services")
                .with("sector", "Technology")
                .with("website", "https://www.infosys.com")
                .with("currency", "INR")
                .with("marketCap", 7_812_345_678_901.0)
                .with(
                    "longBusinessSummary",
                    "Infosys Limited provides consulting, technology, outsourcing, and next-generation digital services.",
                ),
        ),
        // Sparse on purpose: no longName, blank website, no market cap.
        "TCS.NS" => Some(
            info.with("shortName", "TATA CONSULTANCY SERV LT")
                .with("industry", "Information Technology Services")
                .with("sector", "Technology")
                .with("website", "  ")
                .with("currency", "INR"),
        ),
        _ => None,
    }
}
