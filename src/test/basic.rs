use crate::{FeatureState, LookupError, ParamValue, exposed_feature, feature_map};

#[test]
fn table_answers_like_a_flag_engine_would() {
    super::init_tracing();

    let map = feature_map();
    assert!(!map.is_empty());

    // A flag with default Disabled and no override resolves Disabled.
    assert_eq!(
        map.default_state("WebViewBackForwardCache").unwrap(),
        FeatureState::Disabled
    );

    // A kill switch ships enabled.
    assert_eq!(
        map.default_state("WebViewAddQuicHints").unwrap(),
        FeatureState::Enabled
    );

    // Parameter defaults are served even though the owning flag is disabled.
    assert_eq!(
        map.lookup_param(
            "WebViewCacheSizeLimitDerivedFromAppCacheQuota",
            "WebViewCacheSizeLimitMaximum",
        )
        .unwrap(),
        ParamValue::Int(320 * 1024 * 1024)
    );

    // Flags carrying a legacy string resolve under it as well.
    let legacy = map.lookup("webViewPropagateNetworkChangeSignals").unwrap();
    assert_eq!(legacy.name(), "WebViewPropagateNetworkChangeSignals");

    // Misses surface as NotFound, never as a fault.
    assert!(matches!(
        map.lookup("WebViewDoesNotExist"),
        Err(LookupError::FeatureNotFound(_))
    ));

    // The embedder surface is a strict subset of the declarations.
    assert!(exposed_feature("WebViewTestFeature").is_some());
    assert!(exposed_feature("WebViewAutoSAA").is_none());
    assert!(map.lookup("WebViewAutoSAA").is_ok());

    // Concurrent readers share the table without coordination.
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                feature_map()
                    .default_state("WebViewMuteAudio")
                    .unwrap()
                    .is_enabled()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn export_covers_every_declaration() {
    super::init_tracing();

    let map = feature_map();
    let exported = map.export();
    let entries = exported.as_array().unwrap();
    assert_eq!(entries.len(), map.len());

    let legacy = entries
        .iter()
        .find(|e| e["name"] == "WebViewPropagateNetworkChangeSignals")
        .unwrap();
    assert_eq!(
        legacy["display_name"],
        "webViewPropagateNetworkChangeSignals"
    );

    // Flags without params serialize without a params key at all.
    let plain = entries
        .iter()
        .find(|e| e["name"] == "WebViewMuteAudio")
        .unwrap();
    assert!(plain.get("params").is_none());
}
