use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_empty_uses_defaults() {
    let cfg = ClientConfig::from_lookup(|_| None);
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert!(!cfg.dev_always_logged_in);
    assert_eq!(cfg.recheck_interval_secs, 0);
}

#[test]
fn from_lookup_trims_trailing_slashes() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("NUTRIPATROL_API_URL", "https://api.example.test/"),
        ("NUTRIPATROL_IDENTITY_URL", " https://id.example.test// "),
        ("NUTRIPATROL_PO_URL", "https://po.example.test"),
    ]));
    assert_eq!(cfg.api_url, "https://api.example.test");
    assert_eq!(cfg.identity_url, "https://id.example.test");
    assert_eq!(cfg.product_opener_url, "https://po.example.test");
}

#[test]
fn from_lookup_blank_url_falls_back() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("NUTRIPATROL_API_URL", "   ")]));
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
}

#[test]
fn from_lookup_parses_flags() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("NUTRIPATROL_DEV_LOGGED_IN", "Yes"),
        ("NUTRIPATROL_RECHECK_SECS", "300"),
    ]));
    assert!(cfg.dev_always_logged_in);
    assert_eq!(cfg.recheck_interval_secs, 300);
}

#[test]
fn from_lookup_invalid_flags_fall_back() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("NUTRIPATROL_DEV_LOGGED_IN", "maybe"),
        ("NUTRIPATROL_RECHECK_SECS", "-5"),
    ]));
    assert!(!cfg.dev_always_logged_in);
    assert_eq!(cfg.recheck_interval_secs, 0);
}

#[test]
fn parse_bool_variants() {
    for raw in ["1", "true", "YES", " on "] {
        assert_eq!(parse_bool(raw), Some(true), "expected true for {raw:?}");
    }
    for raw in ["0", "False", "no", "off"] {
        assert_eq!(parse_bool(raw), Some(false), "expected false for {raw:?}");
    }
    assert_eq!(parse_bool("maybe"), None);
}
