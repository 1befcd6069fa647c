use std::time::Duration;

use tickerdesk_types::{CacheConfig, Capability, DeskConfig, HistoryRange, NewsConfig};

#[test]
fn news_config_defaults_target_indian_edition() {
    let cfg = NewsConfig::default();
    assert_eq!(cfg.origin, "https://news.google.com");
    assert_eq!(cfg.locale.language, "en-IN");
    assert_eq!(cfg.locale.region, "IN");
    assert_eq!(cfg.locale.edition, "IN:en");
    assert_eq!(cfg.default_max_articles, 5);
}

#[test]
fn desk_config_roundtrip() {
    let cfg = DeskConfig {
        news_lookback_months: 3,
        max_articles: 8,
        history_range: HistoryRange::M6,
        provider_timeout: Duration::from_millis(2500),
    };

    let json = serde_json::to_string(&cfg).expect("serialize desk config");
    let de: DeskConfig = serde_json::from_str(&json).expect("deserialize desk config");

    assert_eq!(de.news_lookback_months, 3);
    assert_eq!(de.max_articles, 8);
    assert_eq!(de.history_range, HistoryRange::M6);
    assert_eq!(de.provider_timeout.as_millis(), 2500);
}

#[test]
fn cache_ttl_overrides_and_zero_disables() {
    let mut cfg = CacheConfig {
        default_ttl_ms: 1000,
        ..Default::default()
    };
    cfg.per_capability_ttl_ms.insert("history".into(), 0);
    cfg.per_capability_ttl_ms.insert("info".into(), 50);

    assert_eq!(cfg.ttl_for(Capability::Info), Some(Duration::from_millis(50)));
    assert_eq!(cfg.ttl_for(Capability::History), None);
    assert_eq!(
        cfg.ttl_for(Capability::Financials),
        Some(Duration::from_millis(1000))
    );
}

#[test]
fn history_range_parses_provider_labels() {
    assert_eq!("1y".parse::<HistoryRange>().unwrap(), HistoryRange::Y1);
    assert_eq!(" 3MO ".parse::<HistoryRange>().unwrap(), HistoryRange::M3);
    assert!("2w".parse::<HistoryRange>().is_err());
    assert_eq!(HistoryRange::default().as_str(), "1y");
    assert_eq!(HistoryRange::Max.approx_days(), None);
}

#[test]
fn capability_labels_match_cache_override_keys() {
    let labels: Vec<String> = [Capability::Info, Capability::History, Capability::Financials]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(labels, ["info", "history", "financials"]);
    let mut cfg = CacheConfig::default();
    cfg.per_capability_ttl_ms.insert(Capability::Financials.to_string(), 0);
    assert_eq!(cfg.ttl_for(Capability::Financials), None);
    assert!(cfg.ttl_for(Capability::Info).is_some());
}
