use proptest::prelude::*;
use tickerdesk_core::{FinancialSeries, format_magnitude, percent_change};

const SUFFIXES: [&str; 6] = ["", "K", "M", "B", "T", "P"];

fn arb_series() -> impl Strategy<Value = FinancialSeries> {
    proptest::collection::vec(proptest::option::of(-1e12f64..1e12f64), 0..12).prop_map(|vals| {
        FinancialSeries::from_pairs(
            vals.into_iter()
                .enumerate()
                .map(|(i, v)| (format!("Q{i}"), v)),
        )
    })
}

proptest! {
    #[test]
    fn magnitude_always_has_one_decimal_and_known_suffix(v in any::<f64>()) {
        let s = format_magnitude(Some(v));
        if !v.is_finite() {
            prop_assert_eq!(s, "N/A");
        } else {
            let body = s.trim_end_matches(|c: char| c.is_ascii_alphabetic());
            let suffix = &s[body.len()..];
            prop_assert!(SUFFIXES.contains(&suffix), "unexpected suffix in {}", s);
            let (_, frac) = body.rsplit_once('.').expect("decimal point");
            prop_assert_eq!(frac.len(), 1);
        }
    }

    #[test]
    fn magnitude_preserves_sign(v in 1.0f64..1e20) {
        let pos = format_magnitude(Some(v));
        let neg = format_magnitude(Some(-v));
        prop_assert_eq!(format!("-{pos}"), neg);
    }

    #[test]
    fn magnitude_is_idempotent(v in proptest::option::of(any::<f64>())) {
        prop_assert_eq!(format_magnitude(v), format_magnitude(v));
    }

    #[test]
    fn short_series_never_yields_change(series in arb_series(), periods in 0usize..16) {
        if series.len() < periods + 1 {
            prop_assert_eq!(percent_change(&series, periods), None);
        }
    }

    #[test]
    fn change_is_pure(series in arb_series(), periods in 0usize..6) {
        let a = percent_change(&series, periods);
        let b = percent_change(&series, periods);
        prop_assert_eq!(a.map(f64::to_bits), b.map(f64::to_bits));
    }
}
