use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

use crate::declarations;
use crate::feature::{Feature, FeatureState};
use crate::param::{ParamEntry, ParamValue};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LookupError {
    #[error("no feature named '{0}' is declared")]
    FeatureNotFound(String),

    #[error("feature '{feature}' declares no parameter named '{name}'")]
    ParamNotFound { feature: String, name: String },
}

/// Name-indexed view over the static declarations.
///
/// Built once behind [`feature_map`] and immutable afterwards, so readers on
/// any thread can query it without locking.
pub struct FeatureMap {
    features: BTreeMap<&'static str, &'static Feature>,
    aliases: BTreeMap<&'static str, &'static Feature>,
    params: BTreeMap<(&'static str, &'static str), ParamValue>,
}

impl FeatureMap {
    fn new(features: &[&'static Feature], params: &[ParamEntry]) -> Self {
        let mut by_name = BTreeMap::new();
        let mut aliases = BTreeMap::new();
        for feature in features {
            if by_name.insert(feature.name(), *feature).is_some() {
                // Uniqueness is a declaration-review contract; if it is
                // violated the later entry wins.
                tracing::warn!(name = feature.name(), "duplicate feature declaration");
            }

            // The legacy string form is what experiment configuration
            // targets for flags that carry one, so it resolves too.
            if let Some(display_name) = feature.display_name() {
                if aliases.insert(display_name, *feature).is_some() {
                    tracing::warn!(name = display_name, "duplicate feature declaration");
                }
            }
        }

        let mut params_by_name = BTreeMap::new();
        for entry in params {
            if params_by_name
                .insert((entry.feature.name(), entry.name), entry.default)
                .is_some()
            {
                tracing::warn!(
                    feature = entry.feature.name(),
                    name = entry.name,
                    "duplicate parameter declaration"
                );
            }
        }

        Self {
            features: by_name,
            aliases,
            params: params_by_name,
        }
    }

    /// Resolve a declared flag by its stable name, or by its legacy display
    /// name for the flags that carry one.
    ///
    /// An unknown name is a caller or configuration error, not a fault.
    pub fn lookup(&self, name: &str) -> Result<&'static Feature, LookupError> {
        self.features
            .get(name)
            .or_else(|| self.aliases.get(name))
            .copied()
            .ok_or_else(|| {
                tracing::trace!(name, "feature lookup miss");
                LookupError::FeatureNotFound(name.to_owned())
            })
    }

    /// The declared default state of a flag, absent any override.
    pub fn default_state(&self, name: &str) -> Result<FeatureState, LookupError> {
        self.lookup(name).map(|feature| feature.default_state())
    }

    /// Resolve a parameter declared under `feature` by name.
    ///
    /// The returned default is independent of the owning flag's resolved
    /// state; callers are expected to check the flag before trusting it.
    pub fn lookup_param(&self, feature: &str, name: &str) -> Result<ParamValue, LookupError> {
        // Distinguish an unknown flag from a known flag without the param.
        let feature = self.lookup(feature)?;

        self.params
            .get(&(feature.name(), name))
            .copied()
            .ok_or_else(|| {
                tracing::trace!(feature = feature.name(), name, "parameter lookup miss");
                LookupError::ParamNotFound {
                    feature: feature.name().to_owned(),
                    name: name.to_owned(),
                }
            })
    }

    /// All declared flags, ordered by name.
    pub fn features(&self) -> impl Iterator<Item = &'static Feature> + '_ {
        self.features.values().copied()
    }

    /// Parameters declared under `feature`, ordered by name.
    pub fn params_of<'a>(
        &'a self,
        feature: &'static Feature,
    ) -> impl Iterator<Item = (&'static str, ParamValue)> + 'a {
        self.params
            .range((feature.name(), "")..)
            .take_while(move |((owner, _), _)| *owner == feature.name())
            .map(|((_, name), value)| (*name, *value))
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Serialize the whole table for experiment-config consumers.
    pub fn export(&self) -> serde_json::Value {
        let entries: Vec<ExportEntry> = self
            .features()
            .map(|feature| ExportEntry {
                name: feature.name(),
                display_name: feature.display_name(),
                default_state: feature.default_state(),
                params: self.params_of(feature).collect(),
            })
            .collect();

        serde_json::to_value(entries)
            .inspect_err(|e| {
                tracing::error!(error = ?e, "feature table cannot convert to a Value");
            })
            .unwrap_or_default()
    }
}

#[derive(Serialize)]
struct ExportEntry {
    name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<&'static str>,
    default_state: FeatureState,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    params: BTreeMap<&'static str, ParamValue>,
}

static FEATURE_MAP: Lazy<FeatureMap> = Lazy::new(|| {
    let map = FeatureMap::new(
        declarations::DECLARED_FEATURES,
        &declarations::param_entries(),
    );
    tracing::debug!(
        features = map.len(),
        "feature declaration table initialized"
    );
    map
});

/// The process-wide declaration table.
pub fn feature_map() -> &'static FeatureMap {
    Lazy::force(&FEATURE_MAP)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn declared_names_are_non_empty_and_unique() {
        let mut seen = BTreeSet::new();
        for feature in declarations::DECLARED_FEATURES {
            assert!(!feature.name().is_empty());
            assert!(
                seen.insert(feature.name()),
                "duplicate feature name '{}'",
                feature.name()
            );
        }
        assert_eq!(seen.len(), feature_map().len());
    }

    #[test]
    fn param_keys_are_unique_per_flag() {
        let mut seen = BTreeSet::new();
        for entry in declarations::param_entries() {
            assert!(!entry.name.is_empty());
            assert!(
                seen.insert((entry.feature.name(), entry.name)),
                "duplicate parameter '{}' under '{}'",
                entry.name,
                entry.feature.name()
            );
        }
    }

    #[test]
    fn lookup_returns_the_declared_default() {
        let map = feature_map();

        let flag = map.lookup("WebViewMuteAudio").unwrap();
        assert!(std::ptr::eq(flag, &declarations::WEBVIEW_MUTE_AUDIO));
        assert_eq!(flag.default_state(), FeatureState::Enabled);

        assert_eq!(
            map.default_state("WebViewBackForwardCache").unwrap(),
            FeatureState::Disabled
        );
    }

    #[test]
    fn unknown_name_is_not_found() {
        let err = feature_map().lookup("NoSuchFeature").unwrap_err();
        assert_eq!(err, LookupError::FeatureNotFound("NoSuchFeature".into()));
    }

    #[test]
    fn legacy_display_name_resolves_to_the_same_flag() {
        // The lowercase form is the runtime key experiment configuration
        // targets; both strings must land on the one declaration.
        let by_stable = feature_map()
            .lookup("WebViewPropagateNetworkChangeSignals")
            .unwrap();
        let by_legacy = feature_map()
            .lookup("webViewPropagateNetworkChangeSignals")
            .unwrap();
        assert!(std::ptr::eq(by_stable, by_legacy));
        assert!(std::ptr::eq(
            by_legacy,
            &declarations::WEBVIEW_PROPAGATE_NETWORK_CHANGE_SIGNALS
        ));
    }

    #[test]
    fn param_lookup_is_typed_and_scoped() {
        let map = feature_map();

        assert_eq!(
            map.lookup_param("WebViewQuicConnectionTimeout", "WebViewQuicConnectionTimeoutSeconds")
                .unwrap(),
            ParamValue::Int(300)
        );

        // A declared param under the wrong flag does not resolve.
        let err = map
            .lookup_param("WebViewMuteAudio", "WebViewQuicConnectionTimeoutSeconds")
            .unwrap_err();
        assert_eq!(
            err,
            LookupError::ParamNotFound {
                feature: "WebViewMuteAudio".into(),
                name: "WebViewQuicConnectionTimeoutSeconds".into(),
            }
        );

        // An unknown flag is reported as the flag being missing.
        assert_eq!(
            map.lookup_param("NoSuchFeature", "WebViewQuicConnectionTimeoutSeconds")
                .unwrap_err(),
            LookupError::FeatureNotFound("NoSuchFeature".into())
        );
    }

    #[test]
    fn params_of_a_disabled_flag_still_carry_their_defaults() {
        let map = feature_map();
        let owner = map
            .lookup("WebViewCacheSizeLimitDerivedFromAppCacheQuota")
            .unwrap();
        assert_eq!(owner.default_state(), FeatureState::Disabled);

        let params: Vec<_> = map.params_of(owner).collect();
        assert_eq!(params.len(), 4);
        assert!(params.contains(&(
            "WebViewCacheSizeLimitMultiplier",
            ParamValue::Double(0.5)
        )));
        assert!(params.contains(&(
            "WebViewCacheSizeLimitMinimum",
            ParamValue::Int(20 * 1024 * 1024)
        )));
    }

    #[test]
    fn export_round_trips_a_known_entry() {
        let exported = feature_map().export();
        let entry = exported
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["name"] == "WebViewQuicConnectionTimeout")
            .unwrap();

        assert_eq!(entry["default_state"], "enabled");
        assert_eq!(
            entry["params"]["WebViewQuicConnectionTimeoutSeconds"],
            serde_json::json!(300)
        );
    }
}
