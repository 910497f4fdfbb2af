//! The subset of declarations reachable through the embedder-facing flag
//! API. Not every declared flag is exposed; entries here are opted in
//! deliberately.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::declarations::*;
use crate::feature::Feature;

/// Flags exposed to the embedder. Ordered alphabetically on feature name.
pub static EXPOSED_FEATURES: &[&Feature] = &[
    &ANDROID_METRICS_ASYNC_METRIC_LOGGING,
    &WEBVIEW_ADD_QUIC_HINTS,
    &WEBVIEW_BACK_FORWARD_CACHE,
    &WEBVIEW_BYPASS_PROVISIONAL_COOKIE_MANAGER,
    &WEBVIEW_CACHE_BOUNDARY_INTERFACE_METHODS,
    &WEBVIEW_CACHE_SIZE_LIMIT_DERIVED_FROM_APP_CACHE_QUOTA,
    &WEBVIEW_CONNECT_TO_COMPONENT_PROVIDER_IN_BACKGROUND,
    &WEBVIEW_DISABLE_CHIPS,
    &WEBVIEW_DO_NOT_SEND_ACCESSIBILITY_EVENTS_ON_GSU,
    &WEBVIEW_DRAIN_PREFETCH_QUEUE_DURING_INIT,
    &WEBVIEW_EARLY_PERFETTO_INIT,
    &WEBVIEW_EARLY_STARTUP_TRACING,
    &WEBVIEW_ENABLE_CRASH,
    &WEBVIEW_FILE_SYSTEM_ACCESS,
    &WEBVIEW_HYPERLINK_CONTEXT_MENU,
    &WEBVIEW_INVOKE_ZOOM_PICKER_ON_GSU,
    &WEBVIEW_LAZY_FETCH_HAND_WRITING_ICON,
    &WEBVIEW_MIXED_CONTENT_AUTOUPGRADES,
    &WEBVIEW_MOVE_WORK_TO_PROVIDER_INIT,
    &WEBVIEW_MUTE_AUDIO,
    &WEBVIEW_OPT_IN_TO_GMS_BIND_SERVICE_OPTIMIZATION,
    &WEBVIEW_PREFETCH_NATIVE_LIBRARY,
    &WEBVIEW_PRELOAD_CLASSES,
    &WEBVIEW_QUIC_CONNECTION_TIMEOUT,
    &WEBVIEW_RECORD_APP_CACHE_HISTOGRAMS,
    &WEBVIEW_REDUCE_UA_ANDROID_VERSION_DEVICE_MODEL,
    &WEBVIEW_REDUCED_SEED_EXPIRATION,
    &WEBVIEW_REDUCED_SEED_REQUEST_PERIOD,
    &WEBVIEW_REPORT_IME_INSETS,
    &WEBVIEW_SAFE_AREA_INCLUDES_SYSTEM_BARS,
    &WEBVIEW_SHORT_CIRCUIT_SHOULD_INTERCEPT_REQUEST,
    &WEBVIEW_SKIP_INTERCEPTS_FOR_PREFETCH,
    &WEBVIEW_STARTUP_TASKS_YIELD_TO_NATIVE,
    &WEBVIEW_TEST_FEATURE,
    &WEBVIEW_USE_INITIAL_NETWORK_STATE_AT_STARTUP,
    &WEBVIEW_USE_METRICS_UPLOAD_SERVICE,
    &WEBVIEW_USE_METRICS_UPLOAD_SERVICE_ONLY_SDK_RUNTIME,
    &WEBVIEW_USE_RENDERING_HEURISTIC,
    &WEBVIEW_USE_STARTUP_TASKS_LOGIC,
    &WEBVIEW_USE_STARTUP_TASKS_LOGIC_P2,
    &WEBVIEW_USE_VIEW_POSITION_OBSERVER_FOR_INSETS,
    &WEBVIEW_WEBAUTHN,
];

static EXPOSED_BY_NAME: Lazy<BTreeMap<&'static str, &'static Feature>> =
    Lazy::new(|| EXPOSED_FEATURES.iter().map(|f| (f.name(), *f)).collect());

/// Resolve an embedder-exposed flag by name.
pub fn exposed_feature(name: &str) -> Option<&'static Feature> {
    EXPOSED_BY_NAME.get(name).copied()
}
